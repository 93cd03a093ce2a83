use crate::error::ScalarustError;
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `nout` independent neurons over the same input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `nout` neurons with `nin` inputs each.
    ///
    /// # Errors
    /// `InvalidHyperparameter` when `nout == 0` or `init` is invalid.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        if nout == 0 {
            return Err(ScalarustError::InvalidHyperparameter {
                name: "nout".to_string(),
                value: 0.0,
            });
        }
        let neurons = (0..nout)
            .map(|_| Neuron::new(nin, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    /// Assembles a layer from existing neurons, which must share one input width.
    ///
    /// # Errors
    /// `InvalidHyperparameter` for an empty list, `DimensionMismatch` when input
    /// widths differ.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarustError> {
        let first = neurons.first().ok_or_else(|| ScalarustError::InvalidHyperparameter {
            name: "nout".to_string(),
            value: 0.0,
        })?;
        let nin = first.nin();
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(ScalarustError::DimensionMismatch {
                expected: nin,
                actual: bad.nin(),
            });
        }
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.neurons[0].nin()
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarustError> {
        self.neurons.iter().map(|n| n.activate(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", i, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
