//! Digital Signal Processing
//!
//! Pure functions for signal processing. No I/O dependencies.

pub mod carrier;
pub mod fft;
pub mod filter;
pub mod noise;

// Re-export commonly used items
pub use carrier::Carrier;
pub use fft::FftProcessor;
pub use filter::{BrickWallLowPass, FilterOutput, LOWPASS_CUTOFF};
pub use noise::NoiseInjector;
