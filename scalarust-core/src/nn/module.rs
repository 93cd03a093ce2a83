use crate::error::ScalarustError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// Parameters are ordinary leaf `Value`s owned by the module; they live across
/// many forward/backward cycles, so their gradients must be reset with
/// [`Module::zero_grad`] before each new backward pass.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `input`: One value per input feature.
    ///
    /// # Returns
    /// One value per output feature, or a `ScalarustError` if the input width
    /// does not match the module.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarustError>;

    /// Returns handles to all learnable parameters of the module, including those
    /// of sub-modules. Order is stable across calls.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. "layer1.neuron0.w2", "layer1.neuron0.b").
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to 0.0.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
