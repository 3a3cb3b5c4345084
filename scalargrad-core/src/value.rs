//! Shared-graph handle with operator overloading.
//!
//! A [`Value`] pairs a [`SharedGraph`] with a [`NodeId`], so expressions can be
//! written as `&x * &y + 1.0` and differentiated with `out.backward()`.
//! The named methods return `Result`; the `std::ops` overloads panic on error,
//! which can only happen when values from two different graphs are mixed.

use crate::error::Result;
use crate::graph::{Graph, SharedGraph};
use crate::node::NodeId;
use crate::operand::{Exponent, Operand};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

/// Handle to a node of a shared computation graph.
///
/// Cloning is cheap (an `Rc` clone) and refers to the same node.
#[derive(Clone)]
pub struct Value {
    graph: SharedGraph,
    id: NodeId,
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.id)
    }
}

impl From<&Value> for Exponent {
    fn from(value: &Value) -> Self {
        Exponent::Node(value.id)
    }
}

impl Value {
    /// Creates a leaf holding `data` in `graph`.
    pub fn new(graph: &SharedGraph, data: f64) -> Self {
        let id = graph.borrow_mut().leaf(data);
        Value {
            graph: Rc::clone(graph),
            id,
        }
    }

    fn wrap(&self, id: NodeId) -> Value {
        Value {
            graph: Rc::clone(&self.graph),
            id,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &SharedGraph {
        &self.graph
    }

    /// Forward value.
    pub fn data(&self) -> f64 {
        self.graph.borrow().get(self.id).value()
    }

    /// Accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.graph.borrow().get(self.id).grad()
    }

    /// Diagnostic tag of the operation that produced this value.
    pub fn label(&self) -> String {
        self.graph.borrow().get(self.id).label()
    }

    /// Runs the backward pass with this value as root.
    pub fn backward(&self) -> Result<()> {
        self.graph.borrow_mut().backward(self.id)
    }

    /// Zeros every gradient of the underlying graph.
    pub fn zero_grad(&self) {
        self.graph.borrow_mut().zero_grad();
    }

    fn apply(&self, f: impl FnOnce(&mut Graph) -> Result<NodeId>) -> Result<Value> {
        let id = f(&mut self.graph.borrow_mut())?;
        Ok(self.wrap(id))
    }

    pub fn add(&self, other: impl Into<Operand>) -> Result<Value> {
        self.apply(|g| g.add(self.id, other))
    }

    pub fn mul(&self, other: impl Into<Operand>) -> Result<Value> {
        self.apply(|g| g.mul(self.id, other))
    }

    pub fn sub(&self, other: impl Into<Operand>) -> Result<Value> {
        self.apply(|g| g.sub(self.id, other))
    }

    pub fn div(&self, other: impl Into<Operand>) -> Result<Value> {
        self.apply(|g| g.div(self.id, other))
    }

    pub fn pow(&self, exponent: impl Into<Exponent>) -> Result<Value> {
        self.apply(|g| g.pow(self.id, exponent))
    }

    pub fn neg(&self) -> Result<Value> {
        self.apply(|g| g.neg(self.id))
    }

    pub fn relu(&self) -> Result<Value> {
        self.apply(|g| g.relu(self.id))
    }

    /// `other - self`, with `other` promoted to a leaf if it is a scalar.
    pub fn rsub(&self, other: impl Into<Operand>) -> Result<Value> {
        self.apply(|g| g.sub(other, self.id))
    }

    /// `other / self`, with `other` promoted to a leaf if it is a scalar.
    pub fn rdiv(&self, other: impl Into<Operand>) -> Result<Value> {
        self.apply(|g| g.div(other, self.id))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph.try_borrow() {
            Ok(graph) => write!(f, "{}", graph.get(self.id)),
            Err(_) => write!(f, "Value(<graph borrowed>)"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph.try_borrow() {
            Ok(graph) => {
                let node = graph.get(self.id);
                write!(
                    f,
                    "Value(id={}, op={:?}, data={}, grad={})",
                    self.id.index(),
                    node.op(),
                    node.value(),
                    node.grad()
                )
            }
            Err(_) => write!(f, "Value(id={}, <graph borrowed>)", self.id.index()),
        }
    }
}

// --- Operator overloads ---

fn expect_value(result: Result<Value>, operation: &str) -> Value {
    result.unwrap_or_else(|e| panic!("Value {} operation failed: {}", operation, e))
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                expect_value(Value::$method(self, rhs), stringify!($method))
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                expect_value(Value::$method(self, &rhs), stringify!($method))
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                expect_value(Value::$method(&self, rhs), stringify!($method))
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                expect_value(Value::$method(&self, &rhs), stringify!($method))
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                expect_value(Value::$method(self, rhs), stringify!($method))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                expect_value(Value::$method(&self, rhs), stringify!($method))
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Mul, mul);
impl_binary_op!(Sub, sub);
impl_binary_op!(Div, div);

// Scalar on the left: 2.0 + x, 1.0 - x, 1.0 / x, ...
macro_rules! impl_reflected_op {
    ($trait:ident, $method:ident, $reflected:ident) => {
        impl $trait<&Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                expect_value(Value::$reflected(rhs, self), stringify!($method))
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                expect_value(Value::$reflected(&rhs, self), stringify!($method))
            }
        }
    };
}

impl_reflected_op!(Add, add, add);
impl_reflected_op!(Mul, mul, mul);
impl_reflected_op!(Sub, sub, rsub);
impl_reflected_op!(Div, div, rdiv);

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        expect_value(Value::neg(self), "neg")
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        expect_value(Value::neg(&self), "neg")
    }
}
