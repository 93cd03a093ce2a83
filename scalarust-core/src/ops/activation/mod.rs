// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear activation functions used by `nn::Neuron`.
//!
//! ## Currently Implemented:
//! - [`relu_op`]: Rectified Linear Unit.
//! - [`sigmoid_op`]: logistic sigmoid.
//! - [`tanh_op`]: hyperbolic tangent.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
