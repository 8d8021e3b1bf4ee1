//! Pipeline commands, one per workbench button
//!
//! Each command locks the pipeline and session from AppState, runs one stage
//! against the current session, stores the resulting session, and returns the
//! plot to draw. A stage whose prerequisites are missing is a silent no-op:
//! the command returns `Ok(None)` and the session is left as it was.

use crate::domain::{AmResult, PlotData};
use crate::pipeline::{Pipeline, SessionState, Stage, StageOutput};
use crate::ports::{CarrierPrompt, PlotSink};
use crate::state::AppState;

/// Lock pipeline and session, run `f`, and commit its new session on success.
fn with_pipeline(
    state: &AppState,
    stage: Stage,
    f: impl FnOnce(&mut Pipeline, &SessionState) -> AmResult<StageOutput>,
) -> Result<Option<PlotData>, String> {
    let mut pipeline = state
        .pipeline
        .lock()
        .map_err(|_| "Pipeline state corrupted".to_string())?;
    let mut session = state
        .session
        .lock()
        .map_err(|_| "Session state corrupted".to_string())?;

    match f(&mut *pipeline, &*session) {
        Ok(StageOutput { state: next, plot }) => {
            *session = next;
            Ok(Some(plot))
        }
        Err(e) if e.is_missing_precondition() => {
            log::debug!("{} skipped: {e}", stage.label());
            Ok(None)
        }
        Err(e) => Err(e.to_string()),
    }
}

pub fn generate_signal(state: &AppState) -> Result<Option<PlotData>, String> {
    with_pipeline(state, Stage::Generate, |p, s| Ok(p.generate(s)))
}

pub fn add_noise(state: &AppState) -> Result<Option<PlotData>, String> {
    with_pipeline(state, Stage::AddNoise, |p, s| p.add_noise(s))
}

pub fn to_freq_domain(state: &AppState) -> Result<Option<PlotData>, String> {
    with_pipeline(state, Stage::Spectrum, |p, s| p.spectrum(s))
}

/// `carrier_hz` is `None` when the user cancelled the prompt
pub fn shift_frequency(state: &AppState, carrier_hz: Option<f64>) -> Result<Option<PlotData>, String> {
    let Some(carrier_hz) = carrier_hz else {
        log::debug!("shift cancelled at prompt");
        return Ok(None);
    };
    with_pipeline(state, Stage::Shift, |p, s| p.shift(s, carrier_hz))
}

pub fn coherent_demodulation(state: &AppState) -> Result<Option<PlotData>, String> {
    with_pipeline(state, Stage::Demodulate, |p, s| p.demodulate(s))
}

pub fn low_pass(state: &AppState) -> Result<Option<PlotData>, String> {
    with_pipeline(state, Stage::LowPass, |p, s| p.lowpass(s))
}

/// Handle one button press end to end: prompt if needed, run, and draw.
///
/// The shift button only prompts once a noisy signal exists, so pressing it
/// early never opens a dialog. Returns whether anything was drawn.
pub fn press(
    state: &AppState,
    stage: Stage,
    prompt: &mut dyn CarrierPrompt,
    plot: &mut dyn PlotSink,
) -> Result<bool, String> {
    let result = match stage {
        Stage::Generate => generate_signal(state)?,
        Stage::AddNoise => add_noise(state)?,
        Stage::Spectrum => to_freq_domain(state)?,
        Stage::Shift => {
            let has_noisy = state
                .session
                .lock()
                .map_err(|_| "Session state corrupted".to_string())?
                .noisy()
                .is_some();
            if !has_noisy {
                log::debug!("shift skipped: no noisy signal");
                return Ok(false);
            }
            let max_hz = state
                .config
                .lock()
                .map_err(|_| "Configuration state corrupted".to_string())?
                .max_carrier_hz;
            shift_frequency(state, prompt.ask_carrier(max_hz))?
        }
        Stage::Demodulate => coherent_demodulation(state)?,
        Stage::LowPass => low_pass(state)?,
    };

    match result {
        Some(data) => {
            plot.render(&data).map_err(|e| e.to_string())?;
            Ok(true)
        }
        None => Ok(false),
    }
}
