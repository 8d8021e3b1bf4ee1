//! Configuration profiles
//!
//! A Configuration is a saved profile holding the tunable parts of a
//! workbench session: noise level, RNG seed, and the accepted carrier range.
//! The low-pass cutoff and time grid are fixed and not part of a profile.

use serde::{Deserialize, Serialize};

use super::error::{AmError, AmResult};

fn default_max_carrier_hz() -> f64 {
    50_000.0
}

/// A saved configuration profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Profile name (e.g., "Default", "Low noise")
    pub name: String,
    /// Standard deviation of the injected Gaussian noise
    pub noise_std_dev: f64,
    /// Fixed RNG seed for reproducible noise; `None` draws from entropy
    #[serde(default)]
    pub seed: Option<u64>,
    /// Largest carrier frequency the shift stage accepts, in Hz
    #[serde(default = "default_max_carrier_hz")]
    pub max_carrier_hz: f64,
}

impl Configuration {
    /// Profile matching the quieter second revision of the demo (σ = 0.1)
    pub fn low_noise() -> Self {
        Self {
            name: "Low noise".to_string(),
            noise_std_dev: 0.1,
            ..Self::default()
        }
    }

    /// Check that the profile describes a usable session
    pub fn validate(&self) -> AmResult<()> {
        if !self.noise_std_dev.is_finite() || self.noise_std_dev < 0.0 {
            return Err(AmError::InvalidNoise(format!(
                "standard deviation must be finite and non-negative, got {}",
                self.noise_std_dev
            )));
        }
        if !self.max_carrier_hz.is_finite() || self.max_carrier_hz <= 0.0 {
            return Err(AmError::Config(format!(
                "max_carrier_hz must be finite and positive, got {}",
                self.max_carrier_hz
            )));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            noise_std_dev: 1.0,
            seed: None,
            max_carrier_hz: default_max_carrier_hz(),
        }
    }
}
