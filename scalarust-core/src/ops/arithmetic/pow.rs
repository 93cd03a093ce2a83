// scalarust-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct PowBackward {
    base: Value,
    base_data: f64,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d(x^n)/dx = n * x^(n-1)
        let local_gradient = self.exponent * self.base_data.powf(self.exponent - 1.0);
        vec![local_gradient * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Forward Operation ---

/// Raises `base` to a fixed real `exponent`.
///
/// The exponent is a plain `f64` known when the node is built; node-valued
/// exponents are not supported.
///
/// # Errors
/// `ScalarustError::InvalidExponent` if `exponent` is NaN or infinite. Nothing is
/// allocated in that case.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, ScalarustError> {
    if !exponent.is_finite() {
        return Err(ScalarustError::InvalidExponent { exponent });
    }
    Ok(pow_unchecked(base, exponent))
}

/// Builds the power node without validating the exponent. Callers pass constants.
pub(crate) fn pow_unchecked(base: &Value, exponent: f64) -> Value {
    let base_data = base.data();
    let grad_fn = PowBackward {
        base: base.clone(),
        base_data,
        exponent,
    };
    Value::from_op(base_data.powf(exponent), Op::Pow(exponent), Rc::new(grad_fn))
}

// --- Value Method (calls fallible function) ---

impl Value {
    /// Raises this value to `exponent`.
    ///
    /// # Panics
    /// If `exponent` is not finite. Use [`pow_op`] for a `Result`.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent).unwrap_or_else(|e| panic!("Value power operation failed: {}", e))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
