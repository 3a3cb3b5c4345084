use crate::error::Result;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};
use crate::operand::Operand;

/// Adds two operands. Scalars are promoted to leaves first.
pub fn add_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId> {
    let (a, b) = graph.promote_pair(a.into(), b.into(), "add")?;
    let value = graph.get(a).value + graph.get(b).value;
    Ok(graph.push(Node::binary(value, Op::Add, a, b)))
}

/// d(a + b)/da = d(a + b)/db = 1
pub(crate) fn add_backward(graph: &mut Graph, out: &Node, a: NodeId, b: NodeId) -> Result<()> {
    graph.accumulate_grad(a, out.grad)?;
    graph.accumulate_grad(b, out.grad)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
