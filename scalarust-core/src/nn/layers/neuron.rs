use crate::error::ScalarustError;
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single unit computing `activation(b + x0*w0 + x1*w1 + ...)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    pub(crate) weights: Vec<Value>,
    pub(crate) bias: Value,
    pub(crate) activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn from `init` and a zero bias.
    ///
    /// # Errors
    /// Propagates `InvalidHyperparameter` from an invalid `init`.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        let weights = init.sample_n(nin, rng)?;
        Ok(Neuron::from_weights(weights, 0.0, activation))
    }

    /// Creates a neuron with explicit parameters, e.g. for deterministic tests.
    pub fn from_weights(weights: Vec<f64>, bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.into_iter().map(Value::new).collect(),
            bias: Value::new(bias),
            activation,
        }
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Number of inputs.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Computes the neuron's output for one input vector.
    ///
    /// The sum starts from the bias and adds `x_i * w_i` left to right.
    ///
    /// # Errors
    /// `DimensionMismatch` if `input.len() != self.nin()`.
    pub fn activate(&self, input: &[Value]) -> Result<Value, ScalarustError> {
        if input.len() != self.nin() {
            return Err(ScalarustError::DimensionMismatch {
                expected: self.nin(),
                actual: input.len(),
            });
        }
        let act = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| add_op(acc, mul_op(x, w)));
        Ok(self.activation.apply(&act))
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarustError> {
        Ok(vec![self.activate(input)?])
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.activation, self.nin())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
