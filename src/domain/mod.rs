//! Core domain types
//!
//! Pure types with no I/O dependencies: signals and the time grid they live
//! on, spectra, plot payloads, configuration profiles, and errors.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
