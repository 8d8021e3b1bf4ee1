//! In-memory adapters for development and testing without a display.
//!
//! Every rendered plot is logged at INFO level so you can follow a session
//! from the log alone:
//!
//!   RUST_LOG=am_workbench_lib=info cargo test

use std::collections::VecDeque;

use crate::domain::{AmResult, PlotData};
use crate::ports::{CarrierPrompt, PlotSink};

/// Keeps every rendered plot
#[derive(Debug, Default)]
pub struct MemoryPlot {
    pub plots: Vec<PlotData>,
}

impl MemoryPlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered plot
    pub fn last(&self) -> Option<&PlotData> {
        self.plots.last()
    }
}

impl PlotSink for MemoryPlot {
    fn render(&mut self, plot: &PlotData) -> AmResult<()> {
        log::info!("[MEMORY PLOT] {} ({:?}, {} points)", plot.title, plot.kind, plot.y.len());
        self.plots.push(plot.clone());
        Ok(())
    }
}

/// Answers carrier prompts from a fixed script; `None` entries cancel
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<f64>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }
}

impl CarrierPrompt for ScriptedPrompt {
    fn ask_carrier(&mut self, _max_hz: f64) -> Option<f64> {
        let answer = self.answers.pop_front().flatten();
        log::info!("[SCRIPTED PROMPT] carrier → {answer:?}");
        answer
    }
}
