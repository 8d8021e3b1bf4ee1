//! Application state

use std::sync::Mutex;

use crate::domain::{AmResult, Configuration};
use crate::pipeline::{Pipeline, SessionState};

/// Shared application state handed to every command
pub struct AppState {
    pub config: Mutex<Configuration>,
    pub session: Mutex<SessionState>,
    pub pipeline: Mutex<Pipeline>,
}

impl AppState {
    /// Fresh, empty session using the given profile
    pub fn new(config: Configuration) -> AmResult<Self> {
        let pipeline = Pipeline::new(&config)?;
        Ok(Self {
            config: Mutex::new(config),
            session: Mutex::new(SessionState::new()),
            pipeline: Mutex::new(pipeline),
        })
    }
}
