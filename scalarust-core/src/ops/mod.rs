//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation lives here, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `tanh_op`, ...)
//!   that computes the forward value eagerly and attaches the backward record.
//!   Exactly one node is allocated per primitive; derived operations (`neg`, `sub`,
//!   `div`) are built from primitives and inherit their gradients.
//! - **`Backward` Structs:** Each primitive has a private struct (e.g. `MulBackward`)
//!   implementing [`BackwardOp`](crate::autograd::BackwardOp). It stores the operands
//!   and the forward values its local derivative needs.
//! - **Operators:** `+ - * /` and unary `-` on `Value` and `f64` forward to the
//!   arithmetic `_op` functions.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, div.
//! - [`math_elem`]: exp, sqrt.
//! - [`activation`]: tanh, relu, sigmoid.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, sqrt_op};
