//! # Autograd
//!
//! Reverse-mode automatic differentiation over graphs of scalar `Value`s.
//!
//! - [`backward_op`]: the [`BackwardOp`] trait implemented by every operation's
//!   backward record.
//! - [`graph`]: topological sort and the backward pass itself.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{backward, topological_sort, zero_grad_graph, NodeId};
