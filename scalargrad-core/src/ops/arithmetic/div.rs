use crate::error::Result;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::operand::Operand;
use crate::ops::arithmetic::{mul_op, pow_op};

/// Division, recorded as `a * b^-1`.
///
/// Division by zero is not an error: the forward value and the gradients
/// follow IEEE-754 and come out infinite or NaN.
pub fn div_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId> {
    let (a, b) = graph.promote_pair(a.into(), b.into(), "div")?;
    let recip = pow_op(graph, b, -1.0)?;
    mul_op(graph, a, recip)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
