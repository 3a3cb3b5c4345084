use crate::error::Result;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::operand::Operand;
use crate::ops::arithmetic::mul_op;

/// Negation, recorded as `a * -1`.
pub fn neg_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId> {
    mul_op(graph, a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
