//! Operand and exponent conversions accepted at every operation boundary.

use crate::node::NodeId;

/// An operand of a graph operation: an existing node, or a raw scalar that
/// the graph promotes to a fresh leaf before the operation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Scalar(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

/// Exponent of [`Graph::pow`](crate::graph::Graph::pow).
///
/// Only `Constant` is supported; `Node` exists so that a graph-valued
/// exponent is rejected with an error instead of silently detached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exponent {
    Constant(f64),
    Node(NodeId),
}

impl From<f64> for Exponent {
    fn from(value: f64) -> Self {
        Exponent::Constant(value)
    }
}

impl From<f32> for Exponent {
    fn from(value: f32) -> Self {
        Exponent::Constant(f64::from(value))
    }
}

impl From<i32> for Exponent {
    fn from(value: i32) -> Self {
        Exponent::Constant(f64::from(value))
    }
}

impl From<NodeId> for Exponent {
    fn from(id: NodeId) -> Self {
        Exponent::Node(id)
    }
}

impl From<&NodeId> for Exponent {
    fn from(id: &NodeId) -> Self {
        Exponent::Node(*id)
    }
}
