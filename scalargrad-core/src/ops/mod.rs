//! # Graph Operations Module (`ops`)
//!
//! Every operation appends one new node to a [`Graph`](crate::graph::Graph)
//! and returns its id. Operands are never mutated.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `pow_op`, ...)
//!   that promotes scalar operands, computes the forward value and records the
//!   operation tag. `Graph` exposes them as methods.
//! - **`_backward` Functions:** Primitive operations also provide the local
//!   derivative rule that the backward engine dispatches to from
//!   [`local_backward`](crate::autograd::backward_op::local_backward).
//!   Derived operations (`neg`, `sub`, `div`) are compositions and have none.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, mul, pow and the derived neg, sub, div.
//! - [`activation`]: relu.

pub mod activation;
pub mod arithmetic;
