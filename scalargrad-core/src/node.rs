//! Node records stored in the [`Graph`](crate::graph::Graph) arena.
//!
//! A node never owns its operands. Operand relations are [`NodeId`]s pointing
//! back into the same arena, always at a strictly smaller index.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique graph IDs.
static GRAPH_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Identifies the arena a [`NodeId`] was minted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a node inside a specific [`Graph`](crate::graph::Graph).
///
/// Copying a `NodeId` is free; it does not keep the node alive on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) graph: GraphId,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node in its arena (construction order).
    pub fn index(&self) -> usize {
        self.index
    }
}

/// The operation that produced a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Created directly from a raw scalar. No operands.
    Leaf,
    /// operands[0] + operands[1]
    Add,
    /// operands[0] * operands[1]
    Mul,
    /// operands[0] ^ exponent, exponent is a constant.
    Pow { exponent: f64 },
    /// max(operands[0], 0)
    Relu,
}

impl Op {
    /// Number of operands this op consumes.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Pow { .. } | Op::Relu => 1,
            Op::Add | Op::Mul => 2,
        }
    }
}

/// A vertex of the computation graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) operands: [Option<NodeId>; 2],
}

impl Node {
    pub(crate) fn leaf(value: f64) -> Self {
        Node {
            value,
            grad: 0.0,
            op: Op::Leaf,
            operands: [None, None],
        }
    }

    pub(crate) fn unary(value: f64, op: Op, a: NodeId) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            operands: [Some(a), None],
        }
    }

    pub(crate) fn binary(value: f64, op: Op, a: NodeId, b: NodeId) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            operands: [Some(a), Some(b)],
        }
    }

    /// Forward value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// Operands in construction order. Empty for leaves.
    pub fn operands(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.operands.iter().flatten().copied()
    }

    pub fn is_leaf(&self) -> bool {
        self.op == Op::Leaf
    }

    /// Diagnostic tag for the producing operation.
    pub fn label(&self) -> String {
        match self.op {
            Op::Leaf => String::new(),
            Op::Add => "+".to_string(),
            Op::Mul => "*".to_string(),
            Op::Pow { exponent } => format!("**{}", exponent),
            Op::Relu => "ReLU".to_string(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.value, self.grad)
    }
}
