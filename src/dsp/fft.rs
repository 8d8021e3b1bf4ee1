//! Forward/inverse transform pair and magnitude spectra

use std::sync::Arc;
use rustfft::{Fft, FftPlanner, num_complex::Complex};

use crate::domain::Spectrum;

/// FFT processor holding cached forward and inverse plans for one length
pub struct FftProcessor {
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    fft_size: usize,
}

impl FftProcessor {
    /// Create a new FFT processor with the given size
    pub fn new(fft_size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(fft_size);
        let inverse = planner.plan_fft_inverse(fft_size);
        log::debug!("planned forward/inverse FFT of size {fft_size}");

        Self {
            forward,
            inverse,
            fft_size,
        }
    }

    /// Unnormalized forward DFT of a real signal.
    /// Input longer than `fft_size` is truncated, shorter input is zero-padded.
    pub fn forward(&self, samples: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .take(self.fft_size)
            .map(|&s| Complex::new(s, 0.0))
            .collect();
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        self.forward.process(&mut buffer);
        buffer
    }

    /// Inverse DFT scaled by `1/N`, so `inverse(forward(x)) == x`
    pub fn inverse(&self, spectrum: &[Complex<f64>]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> = spectrum.iter().take(self.fft_size).copied().collect();
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        self.inverse.process(&mut buffer);

        let scale = 1.0 / self.fft_size as f64;
        for c in &mut buffer {
            *c *= scale;
        }
        buffer
    }

    /// Magnitude of the forward transform over the non-negative half,
    /// paired with normalized frequencies `k / N`
    pub fn magnitude_spectrum(&self, samples: &[f64]) -> Spectrum {
        let bins = self.forward(samples);
        let half_size = self.fft_size / 2;
        let n = self.fft_size as f64;

        Spectrum {
            frequencies: (0..half_size).map(|k| k as f64 / n).collect(),
            magnitudes: bins[..half_size].iter().map(|c| c.norm()).collect(),
        }
    }

    /// Get the FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}
