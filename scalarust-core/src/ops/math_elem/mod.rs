//! Element-wise math functions (exp, sqrt).

pub mod exp;
pub mod sqrt;

pub use exp::exp_op;
pub use sqrt::sqrt_op;
