//! JSON-lines plot adapter
//!
//! Writes each plot as one JSON object per line, for piping into an
//! external charting tool:
//!
//!   am-workbench < session.txt | plot-viewer

use std::io::Write;

use crate::domain::{AmResult, PlotData};
use crate::ports::PlotSink;

pub struct JsonLinesPlot<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesPlot<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PlotSink for JsonLinesPlot<W> {
    fn render(&mut self, plot: &PlotData) -> AmResult<()> {
        serde_json::to_writer(&mut self.out, plot)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        log::debug!("wrote plot '{}' ({} points)", plot.title, plot.y.len());
        Ok(())
    }
}
