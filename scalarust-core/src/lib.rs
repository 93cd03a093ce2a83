//! Scalar reverse-mode automatic differentiation with a small neural-network
//! library on top.
//!
//! Every `Value` is one node of a dynamically built computation graph. Calling
//! [`Value::backward`] on a result fills in `grad()` for every node it depends on.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod types;
pub mod utils;
pub mod value;
pub mod value_data;

pub use error::ScalarustError;
pub use types::Op;
pub use value::{Operand, Value};

// Re-export traits required by public functions
pub use num_traits;
