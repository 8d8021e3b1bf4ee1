//! Carrier frequency prompt port

/// Trait for the modal "enter carrier frequency" dialog
pub trait CarrierPrompt {
    /// Ask the user for a carrier frequency in Hz.
    /// Returns `None` if the user cancelled.
    fn ask_carrier(&mut self, max_hz: f64) -> Option<f64>;
}
