//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Arithmetic on nodes of a [`Graph`] records a directed acyclic computation
//! graph. [`Graph::backward`] walks it once in reverse topological order and
//! leaves in every reachable node the partial derivative of the chosen root.
//!
//! ```
//! use scalargrad_core::{Graph, ScalarGradError};
//!
//! # fn main() -> Result<(), ScalarGradError> {
//! let mut graph = Graph::new();
//! let x = graph.leaf(2.0);
//! let y = graph.leaf(-3.0);
//! let z = graph.leaf(10.0);
//!
//! let q = graph.add(x, y)?;
//! let f = graph.mul(q, z)?;
//! let gated = graph.relu(f)?;
//! let xy = graph.mul(x, y)?;
//! let out = graph.add(gated, xy)?;
//!
//! graph.backward(out)?;
//! assert_eq!(graph.value(out)?, -6.0);
//! assert_eq!(graph.grad(x)?, -3.0);
//! assert_eq!(graph.grad(y)?, 2.0);
//! assert_eq!(graph.grad(z)?, 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! The same computation with the operator-overloading [`Value`] handle:
//!
//! ```
//! use scalargrad_core::{Graph, Value};
//!
//! let graph = Graph::shared();
//! let x = Value::new(&graph, 2.0);
//! let y = Value::new(&graph, -3.0);
//! let z = Value::new(&graph, 10.0);
//!
//! let f = (&x + &y) * &z;
//! let out = f.relu().unwrap() + &x * &y;
//! out.backward().unwrap();
//! assert_eq!(out.data(), -6.0);
//! assert_eq!(x.grad(), -3.0);
//! ```
//!
//! Gradients accumulate across backward passes. Call [`Graph::zero_grad`]
//! between passes that should not sum.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod operand;
pub mod ops;
pub mod value;

#[cfg(test)]
pub(crate) mod utils;

pub use autograd::{check_grad, GradCheckConfig, GradCheckError};
pub use error::{Result, ScalarGradError};
pub use graph::{Graph, SharedGraph};
pub use node::{GraphId, Node, NodeId, Op};
pub use operand::{Exponent, Operand};
pub use value::Value;
