use crate::ops::arithmetic::mul_op;
use crate::ops::arithmetic::pow::pow_unchecked;
use crate::value::{Operand, Value};

/// Divides `a` by `b`, defined as `a * b^-1`.
///
/// Division by a zero-valued node follows IEEE semantics (`inf`/`NaN`) rather
/// than failing.
pub fn div_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    let b = b.into().into_value();
    mul_op(a, pow_unchecked(&b, -1.0))
}

/// `lhs / rhs` with a literal on the left, built as `rhs^-1 * lhs` so it matches
/// `rhs.pow(-1.0) * lhs` node for node.
pub(crate) fn rdiv_op(lhs: f64, rhs: &Value) -> Value {
    mul_op(pow_unchecked(rhs, -1.0), lhs)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
