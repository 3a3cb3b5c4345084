use crate::error::Result;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};
use crate::operand::Operand;

/// Multiplies two operands. Scalars are promoted to leaves first.
pub fn mul_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId> {
    let (a, b) = graph.promote_pair(a.into(), b.into(), "mul")?;
    let value = graph.get(a).value * graph.get(b).value;
    Ok(graph.push(Node::binary(value, Op::Mul, a, b)))
}

// grad_a = grad_out * b, grad_b = grad_out * a
pub(crate) fn mul_backward(graph: &mut Graph, out: &Node, a: NodeId, b: NodeId) -> Result<()> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    graph.accumulate_grad(a, b_value * out.grad)?;
    graph.accumulate_grad(b, a_value * out.grad)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
