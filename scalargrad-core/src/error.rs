use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperandType { operation: String, reason: String },

    #[error("Unsupported exponent for operation {operation}: only real scalar constants are supported")]
    UnsupportedExponent { operation: String },

    #[error("Malformed computation graph: {0}")]
    MalformedGraph(String),
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, ScalarGradError>;
