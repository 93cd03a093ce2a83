use crate::error::ScalarustError;
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Construction settings for an [`Mlp`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MlpConfig {
    /// Activation of every layer (and of the last one unless overridden).
    pub activation: Activation,
    /// Activation of the final layer. `None` uses `activation`.
    pub output_activation: Option<Activation>,
    pub init: Init,
}

impl MlpConfig {
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_output_activation(mut self, activation: Activation) -> Self {
        self.output_activation = Some(activation);
        self
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }
}

/// Multi-layer perceptron: layers applied in sequence, each feeding the next.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds layers of sizes `[nin, nouts[0]], [nouts[0], nouts[1]], ...`.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if `nouts` is empty, contains a zero, or the init
    /// scheme is invalid.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        config: &MlpConfig,
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        if nouts.is_empty() {
            return Err(ScalarustError::InvalidHyperparameter {
                name: "nouts.len()".to_string(),
                value: 0.0,
            });
        }
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);

        let last = nouts.len() - 1;
        let mut layers = Vec::with_capacity(nouts.len());
        for (i, pair) in sizes.windows(2).enumerate() {
            let activation = if i == last {
                config.output_activation.unwrap_or(config.activation)
            } else {
                config.activation
            };
            layers.push(Layer::new(pair[0], pair[1], activation, &config.init, rng)?);
        }
        let mlp = Mlp { layers };
        log::debug!("Built {} with {} parameters", mlp, mlp.num_parameters());
        Ok(mlp)
    }

    /// Assembles a network from existing layers.
    ///
    /// # Errors
    /// `InvalidHyperparameter` for an empty list, `DimensionMismatch` when a
    /// layer's input width differs from the previous layer's output width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarustError> {
        if layers.is_empty() {
            return Err(ScalarustError::InvalidHyperparameter {
                name: "layers.len()".to_string(),
                value: 0.0,
            });
        }
        for pair in layers.windows(2) {
            if pair[0].nout() != pair[1].nin() {
                return Err(ScalarustError::DimensionMismatch {
                    expected: pair[0].nout(),
                    actual: pair[1].nin(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers[0].nin()
    }

    pub fn nout(&self) -> usize {
        self.layers[self.layers.len() - 1].nout()
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarustError> {
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layer{}.{}", i, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
