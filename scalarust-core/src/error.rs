use thiserror::Error;

/// Custom error type for the Scalarust engine.
///
/// Every variant is a programming-contract violation detected before any
/// graph node is allocated, so a returned error never leaves a half-built node
/// behind.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarustError {
    #[error("Invalid exponent for pow: {exponent} (exponent must be a finite real number)")]
    InvalidExponent { exponent: f64 },

    #[error("Type mismatch during {operation}: cannot interpret {found} as an f64 literal")]
    TypeMismatch { operation: String, found: String },

    #[error("Domain error in {operation}: input {value} is outside the function domain")]
    DomainError { operation: String, value: f64 },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Cannot overwrite the data of a non-leaf value; only leaves can be mutated")]
    NonLeafMutation,

    #[error("Invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: String, value: f64 },
}
