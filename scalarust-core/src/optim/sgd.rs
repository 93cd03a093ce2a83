use crate::error::ScalarustError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Plain stochastic gradient descent: `p.data -= lr * p.grad`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
}

impl Sgd {
    /// Creates an optimizer over `params` (typically `module.parameters()`).
    ///
    /// # Errors
    /// `ScalarustError::InvalidHyperparameter` for a non-finite `lr`.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Result<Self, ScalarustError> {
        if !lr.is_finite() {
            return Err(ScalarustError::InvalidHyperparameter {
                name: "lr".to_string(),
                value: lr,
            });
        }
        Ok(Sgd {
            params: params.into_iter().collect(),
            lr,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Changes the learning rate, e.g. for a decay schedule.
    ///
    /// # Errors
    /// `ScalarustError::InvalidHyperparameter` for a non-finite `lr`.
    pub fn set_lr(&mut self, lr: f64) -> Result<(), ScalarustError> {
        if !lr.is_finite() {
            return Err(ScalarustError::InvalidHyperparameter {
                name: "lr".to_string(),
                value: lr,
            });
        }
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl Optimizer for Sgd {
    /// Updates every parameter, or none of them when one is not a leaf.
    fn step(&mut self) -> Result<(), ScalarustError> {
        if self.params.iter().any(|p| !p.is_leaf()) {
            return Err(ScalarustError::NonLeafMutation);
        }
        for param in &self.params {
            let updated = param.data() - self.lr * param.grad();
            param.set_data(updated)?;
        }
        log::trace!("Sgd step over {} parameters (lr={})", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
