//! Additive white Gaussian noise

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{AmError, AmResult, Signal};

/// Adds independent zero-mean Gaussian noise to each sample
pub struct NoiseInjector {
    normal: Normal<f64>,
    std_dev: f64,
    rng: StdRng,
}

impl NoiseInjector {
    /// Noise source with the given standard deviation.
    /// A seed makes the noise sequence reproducible; `None` seeds from entropy.
    pub fn new(std_dev: f64, seed: Option<u64>) -> AmResult<Self> {
        // rand_distr accepts a negative σ and silently mirrors the draw
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(AmError::InvalidNoise(format!(
                "standard deviation must be finite and non-negative, got {std_dev}"
            )));
        }
        let normal = Normal::new(0.0, std_dev)
            .map_err(|e| AmError::InvalidNoise(format!("{e} (std_dev = {std_dev})")))?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            normal,
            std_dev,
            rng,
        })
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Return `signal` plus a fresh noise draw; the input is not modified
    pub fn apply(&mut self, signal: &[f64]) -> Signal {
        signal
            .iter()
            .map(|&s| s + self.normal.sample(&mut self.rng))
            .collect()
    }
}
