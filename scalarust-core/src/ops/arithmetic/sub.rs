use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::{Operand, Value};

/// Subtracts `b` from `a`, defined as `a + (-b)`.
pub fn sub_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    let b = b.into().into_value();
    add_op(a, neg_op(&b))
}

/// `lhs - rhs` with a literal on the left, built as `(-rhs) + lhs`.
pub(crate) fn rsub_op(lhs: f64, rhs: &Value) -> Value {
    add_op(neg_op(rhs), lhs)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
