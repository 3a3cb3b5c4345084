use crate::error::{Result, ScalarGradError};
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};
use crate::operand::{Exponent, Operand};

/// Raises `base` to a constant power.
///
/// A graph-valued exponent fails with `UnsupportedExponent`: the derivative
/// with respect to the exponent is not tracked.
pub fn pow_op(
    graph: &mut Graph,
    base: impl Into<Operand>,
    exponent: impl Into<Exponent>,
) -> Result<NodeId> {
    let exponent = match exponent.into() {
        Exponent::Constant(n) => n,
        Exponent::Node(_) => {
            return Err(ScalarGradError::UnsupportedExponent {
                operation: "pow".to_string(),
            })
        }
    };
    let base = graph.promote(base, "pow")?;
    let value = graph.get(base).value.powf(exponent);
    Ok(graph.push(Node::unary(value, Op::Pow { exponent }, base)))
}

/// d(a^n)/da = n * a^(n-1)
pub(crate) fn pow_backward(graph: &mut Graph, out: &Node, a: NodeId, exponent: f64) -> Result<()> {
    let a_value = graph.value(a)?;
    let local = exponent * a_value.powf(exponent - 1.0);
    graph.accumulate_grad(a, local * out.grad)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
