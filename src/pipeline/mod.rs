//! AM pipeline logic
//!
//! - `session` - explicit session state with artifact lineage
//! - `stages` - generate, noise, spectrum, shift, demodulate, low-pass

pub mod session;
pub mod stages;

pub use session::{Progress, SessionState, Stage};
pub use stages::{Pipeline, StageOutput, BASE_FREQUENCY_HZ};
