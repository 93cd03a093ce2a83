// scalarust-core/src/ops/math_elem/sqrt.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::types::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct SqrtBackward {
    input: Value,
    // grad = upstream_grad / (2 * sqrt(input)) = upstream_grad / (2 * output)
    output_data: f64,
}

impl BackwardOp for SqrtBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output / (2.0 * self.output_data)]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Computes the square root.
///
/// At an input of exactly 0 the forward value is 0 and the gradient is `inf`.
///
/// # Errors
/// `ScalarustError::DomainError` for a negative input.
pub fn sqrt_op(input: &Value) -> Result<Value, ScalarustError> {
    let x = input.data();
    if x < 0.0 {
        return Err(ScalarustError::DomainError {
            operation: "sqrt".to_string(),
            value: x,
        });
    }
    let output_data = x.sqrt();
    let grad_fn = SqrtBackward {
        input: input.clone(),
        output_data,
    };
    Ok(Value::from_op(output_data, Op::Sqrt, Rc::new(grad_fn)))
}

impl Value {
    /// # Panics
    /// On a negative value. Use [`sqrt_op`] for a `Result`.
    pub fn sqrt(&self) -> Value {
        sqrt_op(self).unwrap_or_else(|e| panic!("Value sqrt operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "sqrt_test.rs"]
mod tests;
