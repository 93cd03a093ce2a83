use crate::error::ScalarustError;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

/// Initialisation scheme for neuron weights.
///
/// Sampling always goes through a caller-provided `Rng`, so a network built
/// from [`seeded_rng`] is reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Every weight set to the same value.
    Constant(f64),
}

impl Default for Init {
    /// `Uniform { low: -1.0, high: 1.0 }`.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks the scheme's parameters without sampling.
    ///
    /// # Errors
    /// `ScalarustError::InvalidHyperparameter` for non-finite bounds, `low >= high`,
    /// a range `high - low` that overflows, or a negative / non-finite standard deviation.
    pub fn validate(&self) -> Result<(), ScalarustError> {
        match *self {
            Init::Uniform { low, high } => {
                if !low.is_finite() {
                    return Err(invalid("low", low));
                }
                if !high.is_finite() || low >= high || !(high - low).is_finite() {
                    return Err(invalid("high", high));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() {
                    return Err(invalid("mean", mean));
                }
                if !std.is_finite() || std < 0.0 {
                    return Err(invalid("std", std));
                }
            }
            Init::Constant(value) => {
                if !value.is_finite() {
                    return Err(invalid("constant", value));
                }
            }
        }
        Ok(())
    }

    /// Draws `n` values from the scheme.
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, ScalarustError> {
        self.validate()?;
        let samples = match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..n).map(|_| dist.sample(&mut *rng)).collect()
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std).map_err(|_| invalid("std", std))?;
                (0..n).map(|_| dist.sample(&mut *rng)).collect()
            }
            Init::Constant(value) => vec![value; n],
        };
        Ok(samples)
    }
}

fn invalid(name: &str, value: f64) -> ScalarustError {
    ScalarustError::InvalidHyperparameter {
        name: name.to_string(),
        value,
    }
}

/// Returns a deterministic generator for reproducible initialisation.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
