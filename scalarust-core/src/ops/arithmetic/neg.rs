use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negates a value. Defined as `a * -1`, so the graph holds a `*` node and a
/// `-1` leaf and the gradient comes from `MulBackward`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
