use crate::error::Result;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::operand::Operand;
use crate::ops::arithmetic::{add_op, neg_op};

/// Subtraction, recorded as `a + (-b)`.
///
/// Either side may be a scalar, so `sub_op(graph, 1.0, x)` covers `1 - x`.
pub fn sub_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId> {
    let (a, b) = graph.promote_pair(a.into(), b.into(), "sub")?;
    let neg_b = neg_op(graph, b)?;
    add_op(graph, a, neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
