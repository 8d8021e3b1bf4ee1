//! Cosine carrier evaluated on a time grid

use std::f64::consts::PI;

use crate::domain::{AmResult, Frequency, Signal, TimeGrid};

/// Zero-phase cosine carrier `cos(2π·f·t)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carrier {
    frequency: Frequency,
}

impl Carrier {
    /// Create a carrier at the given frequency
    pub fn new(frequency: Frequency) -> Self {
        Self { frequency }
    }

    /// Evaluate the cosine at every instant of the grid.
    ///
    /// Phase is computed from absolute time rather than accumulated, so the
    /// value at `t[i]` is exactly `cos(2π·f·t[i])`.
    pub fn sample(&self, grid: &TimeGrid) -> Signal {
        let omega = 2.0 * PI * self.frequency.as_hz();
        grid.instants().iter().map(|&t| (omega * t).cos()).collect()
    }

    /// Multiply `signal` by this carrier sample-for-sample
    pub fn mix(&self, grid: &TimeGrid, signal: &[f64]) -> AmResult<Signal> {
        grid.check_aligned(signal)?;
        Ok(signal
            .iter()
            .zip(self.sample(grid))
            .map(|(s, c)| s * c)
            .collect())
    }
}
