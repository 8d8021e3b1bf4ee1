//! Adapters - implementations of port traits
//!
//! These connect the pipeline to the outside world.

pub mod json_plot;
pub mod line_prompt;
pub mod memory;

pub use json_plot::JsonLinesPlot;
pub use line_prompt::LinePrompt;
pub use memory::{MemoryPlot, ScriptedPrompt};
