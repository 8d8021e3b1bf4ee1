//! Ideal (brick-wall) low-pass filter applied in the frequency domain

use rustfft::num_complex::Complex;

use super::fft::FftProcessor;

/// Normalized cutoff used by the reconstruction stage
pub const LOWPASS_CUTOFF: f64 = 0.01;

/// Result of running a signal through [`BrickWallLowPass`]
#[derive(Debug, Clone)]
pub struct FilterOutput {
    /// Complex spectrum after masking
    pub spectrum: Vec<Complex<f64>>,
    /// Inverse transform of the masked spectrum
    pub time: Vec<Complex<f64>>,
}

impl FilterOutput {
    /// Real part of the reconstructed time-domain signal
    pub fn real(&self) -> Vec<f64> {
        self.time.iter().map(|c| c.re).collect()
    }
}

/// Zeroes every DFT bin above a normalized cutoff, then inverse-transforms.
///
/// Bin `k` of an `N`-point transform sits at normalized frequency
/// `min(k, N - k) / N`, so positive and negative frequencies are treated alike
/// and a real input stays real. Masking is done on the complex bins and phase
/// is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickWallLowPass {
    cutoff: f64,
}

impl BrickWallLowPass {
    /// Filter passing bins with normalized frequency `<= cutoff`.
    /// `f64::INFINITY` passes everything.
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Normalized frequency of bin `k` in an `n`-point transform
    pub fn bin_frequency(k: usize, n: usize) -> f64 {
        k.min(n - k) as f64 / n as f64
    }

    /// Whether bin `k` of an `n`-point transform survives the filter
    pub fn passes(&self, k: usize, n: usize) -> bool {
        Self::bin_frequency(k, n) <= self.cutoff
    }

    /// Filter `samples` using the transform pair in `fft`
    pub fn apply(&self, fft: &FftProcessor, samples: &[f64]) -> FilterOutput {
        let n = fft.fft_size();
        let mut spectrum = fft.forward(samples);

        for (k, bin) in spectrum.iter_mut().enumerate() {
            if !self.passes(k, n) {
                *bin = Complex::new(0.0, 0.0);
            }
        }

        let time = fft.inverse(&spectrum);
        FilterOutput { spectrum, time }
    }
}

impl Default for BrickWallLowPass {
    fn default() -> Self {
        Self::new(LOWPASS_CUTOFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn tone(freq_bins: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * freq_bins * i as f64 / n as f64).cos())
            .collect()
    }

    #[test]
    fn infinite_cutoff_reproduces_input() {
        let fft = FftProcessor::new(1000);
        let samples: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.37).sin() + 0.2).collect();

        let out = BrickWallLowPass::new(f64::INFINITY).apply(&fft, &samples);

        for (a, b) in samples.iter().zip(out.real()) {
            assert!((a - b).abs() < 1e-9, "expected {a}, got {b}");
        }
    }

    #[test]
    fn bins_above_cutoff_are_exactly_zero() {
        let fft = FftProcessor::new(1000);
        let samples: Vec<f64> = (0..1000).map(|i| ((i * 7919) % 101) as f64 / 50.0 - 0.5).collect();
        let filter = BrickWallLowPass::new(0.01);

        let out = filter.apply(&fft, &samples);

        for (k, bin) in out.spectrum.iter().enumerate() {
            if BrickWallLowPass::bin_frequency(k, 1000) > 0.01 {
                assert_eq!(*bin, Complex::new(0.0, 0.0), "bin {k} should be zeroed");
            }
        }
        // Passband bins are untouched, so at least DC survives
        assert!(out.spectrum[0].norm() > 0.0);
    }

    #[test]
    fn test_lowpass_passes_low_tone() {
        let fft = FftProcessor::new(1000);
        let low = tone(5.0, 1000);

        let out = BrickWallLowPass::default().apply(&fft, &low);

        for (a, b) in low.iter().zip(out.real()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_lowpass_attenuates_high_frequency() {
        let fft = FftProcessor::new(1000);
        let high = tone(100.0, 1000);

        let out = BrickWallLowPass::default().apply(&fft, &high);

        let max_output = out.real().iter().fold(0.0f64, |m, v| m.max(v.abs()));
        assert!(max_output < 1e-9, "tone at 0.1 should be removed, got {max_output}");
    }

    #[test]
    fn real_input_gives_real_output() {
        let fft = FftProcessor::new(1000);
        let samples: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.05).cos() * (i as f64 * 0.9).sin()).collect();

        let out = BrickWallLowPass::default().apply(&fft, &samples);

        assert!(out.time.iter().all(|c| c.im.abs() < 1e-9));
    }

    #[test]
    fn bin_frequency_is_two_sided() {
        assert_eq!(BrickWallLowPass::bin_frequency(0, 1000), 0.0);
        assert_eq!(BrickWallLowPass::bin_frequency(10, 1000), 0.01);
        assert_eq!(BrickWallLowPass::bin_frequency(990, 1000), 0.01);
        assert_eq!(BrickWallLowPass::bin_frequency(500, 1000), 0.5);
        let filter = BrickWallLowPass::default();
        assert!(filter.passes(10, 1000));
        assert!(filter.passes(990, 1000));
        assert!(!filter.passes(11, 1000));
        assert!(!filter.passes(989, 1000));
    }
}
