//! Charting port

use crate::domain::{AmResult, PlotData};

/// Trait for whatever draws stage results.
///
/// Implementations own clearing and redrawing; each call replaces the
/// previous figure.
pub trait PlotSink {
    /// Draw one plot
    fn render(&mut self, plot: &PlotData) -> AmResult<()>;
}
