//! Status command - snapshot of the session for display

use serde::Serialize;

use crate::pipeline::{Progress, Stage};
use crate::state::AppState;

/// Which artifacts exist, which carrier is set, and whether anything is stale
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub progress: Progress,
    pub has_signal: bool,
    pub has_noisy_signal: bool,
    pub has_shifted_signal: bool,
    pub carrier_hz: Option<f64>,
    pub noisy_is_stale: bool,
    pub shifted_is_stale: bool,
    pub last_view: Option<Stage>,
    pub profile: String,
    pub noise_std_dev: f64,
}

pub fn get_session_status(state: &AppState) -> Result<SessionStatus, String> {
    let session = state
        .session
        .lock()
        .map_err(|_| "Session state corrupted".to_string())?;
    let config = state
        .config
        .lock()
        .map_err(|_| "Configuration state corrupted".to_string())?;
    let noise_std_dev = state
        .pipeline
        .lock()
        .map_err(|_| "Pipeline state corrupted".to_string())?
        .noise_std_dev();

    Ok(SessionStatus {
        progress: session.progress(),
        has_signal: session.signal().is_some(),
        has_noisy_signal: session.noisy().is_some(),
        has_shifted_signal: session.shifted().is_some(),
        carrier_hz: session.carrier().map(|c| c.as_hz()),
        noisy_is_stale: session.noisy_is_stale(),
        shifted_is_stale: session.shifted_is_stale(),
        last_view: session.last_view(),
        profile: config.name.clone(),
        noise_std_dev,
    })
}
