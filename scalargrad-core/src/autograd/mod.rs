//! Reverse-mode differentiation over a [`Graph`](crate::graph::Graph).
//!
//! - [`graph`]: topological ordering of the nodes reachable from a root.
//! - [`backward_op`]: the per-node local derivative, dispatched on the op tag.
//! - [`backward`](mod@backward): the engine that seeds the root and replays the order.
//! - [`grad_check`]: finite-difference validation of analytic gradients.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward::backward;
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
