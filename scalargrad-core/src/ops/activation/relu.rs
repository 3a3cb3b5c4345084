use crate::error::Result;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};
use crate::operand::Operand;

/// Rectified linear unit: `a` if `a >= 0`, else 0.
pub fn relu_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId> {
    let a = graph.promote(a, "relu")?;
    let input = graph.get(a).value;
    let value = if input >= 0.0 { input } else { 0.0 };
    Ok(graph.push(Node::unary(value, Op::Relu, a)))
}

// The gate is read from the output, so relu(0) passes no gradient.
pub(crate) fn relu_backward(graph: &mut Graph, out: &Node, a: NodeId) -> Result<()> {
    let mask = if out.value > 0.0 { 1.0 } else { 0.0 };
    graph.accumulate_grad(a, mask * out.grad)
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
