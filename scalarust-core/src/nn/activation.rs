use crate::value::Value;
use std::fmt;

/// Non-linearity applied at the output of a `Neuron`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Relu,
    Tanh,
    Sigmoid,
    /// Identity; the neuron outputs its affine combination unchanged.
    Linear,
}

impl Activation {
    /// Applies the activation, allocating one node (none for `Linear`).
    pub fn apply(&self, x: &Value) -> Value {
        match self {
            Activation::Relu => x.relu(),
            Activation::Tanh => x.tanh(),
            Activation::Sigmoid => x.sigmoid(),
            Activation::Linear => x.clone(),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Relu => "relu",
            Activation::Tanh => "tanh",
            Activation::Sigmoid => "sigmoid",
            Activation::Linear => "lin",
        };
        write!(f, "{}", name)
    }
}
