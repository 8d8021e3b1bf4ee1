//! Line-based carrier prompt
//!
//! Reads the carrier frequency from the next input line. An empty line or
//! end of input cancels the dialog; unparsable text is reported and the
//! prompt is shown again.

use std::io::{BufRead, Write};

use crate::ports::CarrierPrompt;

pub struct LinePrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for prompt text, shared with other console messages
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one raw line (without the trailing newline), `None` at end of input
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(e) => {
                log::error!("failed to read input: {e}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> CarrierPrompt for LinePrompt<R, W> {
    fn ask_carrier(&mut self, max_hz: f64) -> Option<f64> {
        loop {
            if let Err(e) = write!(self.output, "carrier frequency (Hz, 0-{max_hz}): ")
                .and_then(|_| self.output.flush())
            {
                log::debug!("failed to show carrier prompt: {e}");
            }

            let line = self.read_line()?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                log::debug!("carrier prompt cancelled");
                return None;
            }
            match trimmed.parse::<f64>() {
                Ok(hz) => return Some(hz),
                Err(e) => {
                    log::warn!("ignoring carrier '{trimmed}': {e}");
                    if let Err(e) = writeln!(self.output, "'{trimmed}' is not a number") {
                        log::debug!("failed to report bad carrier: {e}");
                    }
                }
            }
        }
    }
}
