//! The arena that owns every node of a computation graph.
//!
//! Nodes are appended in construction order and never removed, so an operand
//! always sits at a smaller index than the node consuming it. Operations live
//! in [`crate::ops`]; the methods here are thin wrappers around the `_op`
//! functions so that a graph reads naturally at the call site.

use crate::error::{Result, ScalarGradError};
use crate::node::{GraphId, Node, NodeId};
use crate::operand::{Exponent, Operand};
use crate::ops::activation::relu_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

/// A graph shared between several [`Value`](crate::value::Value) handles.
pub type SharedGraph = Rc<RefCell<Graph>>;

/// Growable arena of [`Node`] records.
#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    nodes: Vec<Node>,
}

/// A clone is a separate arena with its own [`GraphId`]: ids minted by one
/// copy are rejected by the other.
impl Clone for Graph {
    fn clone(&self) -> Self {
        let id = GraphId::next();
        let nodes = self
            .nodes
            .iter()
            .map(|node| Node {
                operands: node.operands.map(|operand| {
                    operand.map(|o| NodeId {
                        graph: id,
                        index: o.index,
                    })
                }),
                ..*node
            })
            .collect();
        Graph { id, nodes }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            id: GraphId::next(),
            nodes: Vec::new(),
        }
    }

    /// Creates an empty graph wrapped for use with [`Value`](crate::value::Value).
    pub fn shared() -> SharedGraph {
        Rc::new(RefCell::new(Graph::new()))
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf node holding `value`.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(value))
    }

    /// Appends a node and returns its id.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId {
            graph: self.id,
            index: self.nodes.len(),
        };
        trace!("graph {:?}: node {} {:?} = {}", self.id, id.index, node.op, node.value);
        self.nodes.push(node);
        id
    }

    /// Looks up a node, rejecting ids minted by another graph or out of range.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.check_node(id, "node")?;
        Ok(&self.nodes[id.index])
    }

    pub fn value(&self, id: NodeId) -> Result<f64> {
        self.node(id).map(Node::value)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64> {
        self.node(id).map(Node::grad)
    }

    /// Iterates over all nodes in construction order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        let graph = self.id;
        self.nodes
            .iter()
            .enumerate()
            .map(move |(index, node)| (NodeId { graph, index }, node))
    }

    /// Resets every gradient in the graph to zero.
    ///
    /// Backward passes accumulate; call this between passes that should not sum.
    pub fn zero_grad(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }

    pub(crate) fn check_node(&self, id: NodeId, operation: &str) -> Result<()> {
        if id.graph != self.id {
            return Err(ScalarGradError::InvalidOperandType {
                operation: operation.to_string(),
                reason: format!("node {} belongs to another graph", id.index),
            });
        }
        if id.index >= self.nodes.len() {
            return Err(ScalarGradError::InvalidOperandType {
                operation: operation.to_string(),
                reason: format!(
                    "node index {} out of range for graph of {} nodes",
                    id.index,
                    self.nodes.len()
                ),
            });
        }
        Ok(())
    }

    /// Turns an operand into a node of this graph.
    ///
    /// Scalars become fresh leaves; node ids are validated.
    pub fn promote(&mut self, operand: impl Into<Operand>, operation: &str) -> Result<NodeId> {
        match operand.into() {
            Operand::Node(id) => {
                self.check_node(id, operation)?;
                Ok(id)
            }
            Operand::Scalar(value) => Ok(self.leaf(value)),
        }
    }

    /// Promotes both operands of a binary operation.
    ///
    /// Node operands are validated before any scalar is turned into a leaf,
    /// so a failed call leaves the graph untouched.
    pub(crate) fn promote_pair(
        &mut self,
        a: Operand,
        b: Operand,
        operation: &str,
    ) -> Result<(NodeId, NodeId)> {
        for operand in [a, b] {
            if let Operand::Node(id) = operand {
                self.check_node(id, operation)?;
            }
        }
        Ok((self.promote(a, operation)?, self.promote(b, operation)?))
    }

    pub(crate) fn accumulate_grad(&mut self, id: NodeId, delta: f64) -> Result<()> {
        self.check_node(id, "accumulate_grad")?;
        self.nodes[id.index].grad += delta;
        Ok(())
    }

    pub(crate) fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<()> {
        self.check_node(id, "set_grad")?;
        self.nodes[id.index].grad = grad;
        Ok(())
    }

    /// Infallible lookup for ids known to come from this graph.
    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index]
    }

    // --- Operations ---

    pub fn add(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId> {
        add_op(self, a, b)
    }

    pub fn mul(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId> {
        mul_op(self, a, b)
    }

    pub fn pow(&mut self, a: impl Into<Operand>, exponent: impl Into<Exponent>) -> Result<NodeId> {
        pow_op(self, a, exponent)
    }

    pub fn relu(&mut self, a: impl Into<Operand>) -> Result<NodeId> {
        relu_op(self, a)
    }

    pub fn neg(&mut self, a: impl Into<Operand>) -> Result<NodeId> {
        neg_op(self, a)
    }

    pub fn sub(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId> {
        sub_op(self, a, b)
    }

    pub fn div(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId> {
        div_op(self, a, b)
    }

    // --- Backward ---

    /// Runs the backward pass from `root`. See [`crate::autograd::backward`].
    pub fn backward(&mut self, root: NodeId) -> Result<()> {
        crate::autograd::backward(self, root)
    }

    /// Nodes reachable from `root`, each listed after all of its operands.
    ///
    /// The backward pass visits this list in reverse.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>> {
        crate::autograd::graph::topological_sort(self, root)
    }
}
