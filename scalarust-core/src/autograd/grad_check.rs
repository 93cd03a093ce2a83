use crate::error::ScalarustError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarustError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid gradient check configuration: epsilon={epsilon}, tolerance={tolerance}")]
    InvalidConfiguration { epsilon: f64, tolerance: f64 },
}

impl From<ScalarustError> for GradCheckError {
    fn from(err: ScalarustError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` receives one fresh leaf per entry of `inputs` and must build a scalar
/// expression from them. The analytic gradient comes from a single `backward()`
/// on that expression; the numerical one from
/// `(f(x + epsilon) - f(x - epsilon)) / (2 * epsilon)` evaluated on freshly built
/// graphs, one input perturbed at a time.
///
/// A comparison passes when the absolute difference is within `tolerance`, or when
/// the difference relative to the analytic magnitude is within `tolerance`.
///
/// # Returns
/// The analytic gradients (one per input) when every comparison passes.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarustError>,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) || !(tolerance >= 0.0 && tolerance.is_finite()) {
        return Err(GradCheckError::InvalidConfiguration { epsilon, tolerance });
    }

    // --- 1. Initial Forward and Backward Pass ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(Value::grad).collect();

    let evaluate = |perturbed: Vec<f64>| -> Result<f64, GradCheckError> {
        let leaves: Vec<Value> = perturbed.into_iter().map(Value::new).collect();
        let out = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
        Ok(out.data())
    };

    // --- 2. Compare each input ---
    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        let mut plus = inputs.to_vec();
        plus[input_index] += epsilon;
        let mut minus = inputs.to_vec();
        minus[input_index] -= epsilon;

        let loss_plus = evaluate(plus)?;
        let loss_minus = evaluate(minus)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance && (difference / (analytical_grad.abs() + epsilon)) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
        log::trace!(
            "check_grad: input {} analytical={} numerical={}",
            input_index,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(analytical_grads)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
