//! # Activation Functions

pub mod relu;

pub use relu::relu_op;
