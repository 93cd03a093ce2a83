use crate::error::ScalarustError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step using the gradients currently held
    /// by the parameters.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalarustError` otherwise.
    fn step(&mut self) -> Result<(), ScalarustError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call before each backward pass: gradients accumulate otherwise.
    fn zero_grad(&mut self);
}
