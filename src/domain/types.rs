//! Core domain types

use serde::{Deserialize, Serialize};

use super::error::{AmError, AmResult};

/// A real-valued signal aligned sample-for-sample with the [`TimeGrid`]
pub type Signal = Vec<f64>;

/// Number of samples in the fixed time grid
pub const GRID_SAMPLES: usize = 1000;
/// Last instant of the time grid, in seconds
pub const GRID_DURATION_S: f64 = 10.0;

/// Frequency in Hz
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frequency(pub f64);

impl Frequency {
    pub fn hz(hz: f64) -> Self {
        Self(hz)
    }

    pub fn as_hz(&self) -> f64 {
        self.0
    }
}

/// Evenly spaced sample instants, endpoints included.
///
/// Sample `i` sits at `start + i * (end - start) / (len - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    instants: Vec<f64>,
}

impl TimeGrid {
    /// Build a grid of `len` instants spanning `[start, end]`
    pub fn linspace(start: f64, end: f64, len: usize) -> Self {
        let spacing = if len > 1 {
            (end - start) / (len - 1) as f64
        } else {
            0.0
        };
        let instants = (0..len).map(|i| start + i as f64 * spacing).collect();
        Self { instants }
    }

    /// The fixed 1000-point grid over [0, 10] s used by the workbench
    pub fn standard() -> Self {
        Self::linspace(0.0, GRID_DURATION_S, GRID_SAMPLES)
    }

    pub fn instants(&self) -> &[f64] {
        &self.instants
    }

    pub fn len(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// Reject signals that are not aligned with this grid
    pub fn check_aligned(&self, signal: &[f64]) -> AmResult<()> {
        if signal.len() != self.len() {
            return Err(AmError::LengthMismatch {
                expected: self.len(),
                actual: signal.len(),
            });
        }
        Ok(())
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::standard()
    }
}

/// One-sided magnitude spectrum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Normalized frequency of each bin (`k / N`)
    pub frequencies: Vec<f64>,
    /// Magnitude of each bin
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Index of the strongest bin, or `None` for an empty spectrum
    pub fn peak_bin(&self) -> Option<usize> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
    }
}

/// What a plot shows on its x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    TimeDomain,
    Spectrum,
}

/// Everything the charting port needs to draw one stage result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub kind: PlotKind,
    pub title: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_label: String,
    pub y_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_limits: Option<(f64, f64)>,
}

impl PlotData {
    /// Amplitude over time, clamped to the workbench's ±5 view
    pub fn time_domain(title: &str, grid: &TimeGrid, samples: Vec<f64>) -> Self {
        Self {
            kind: PlotKind::TimeDomain,
            title: title.to_string(),
            x: grid.instants().to_vec(),
            y: samples,
            x_label: "Time (s)".to_string(),
            y_label: "Amplitude".to_string(),
            y_limits: Some((-5.0, 5.0)),
        }
    }

    /// Magnitude over normalized frequency
    pub fn spectrum(title: &str, spectrum: Spectrum) -> Self {
        Self {
            kind: PlotKind::Spectrum,
            title: title.to_string(),
            x: spectrum.frequencies,
            y: spectrum.magnitudes,
            x_label: "Normalized frequency".to_string(),
            y_label: "Magnitude".to_string(),
            y_limits: None,
        }
    }
}
