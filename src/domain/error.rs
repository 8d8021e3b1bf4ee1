//! Domain error types

use thiserror::Error;

/// Errors that can occur while driving the AM pipeline
#[derive(Error, Debug)]
pub enum AmError {
    #[error("No signal generated yet")]
    MissingSignal,

    #[error("No noisy signal yet; add noise first")]
    MissingNoisySignal,

    #[error("No shifted signal yet; run the frequency shift first")]
    MissingShiftedSignal,

    #[error("Carrier frequency has not been set")]
    MissingCarrier,

    #[error("Invalid carrier frequency: {0}")]
    InvalidCarrier(String),

    #[error("Invalid noise level: {0}")]
    InvalidNoise(String),

    #[error("Signal length {actual} does not match time grid length {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AmError {
    /// True for errors raised because a prior stage has not run yet.
    ///
    /// The command layer treats these as a silent no-op.
    pub fn is_missing_precondition(&self) -> bool {
        matches!(
            self,
            AmError::MissingSignal
                | AmError::MissingNoisySignal
                | AmError::MissingShiftedSignal
                | AmError::MissingCarrier
        )
    }
}

/// Result type alias for pipeline operations
pub type AmResult<T> = Result<T, AmError>;
