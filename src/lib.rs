//! AM Workbench
//!
//! An interactive walk through amplitude modulation: generate a cosine, add
//! noise, look at its spectrum, shift it onto a carrier, demodulate it
//! coherently, and low-pass it back to baseband.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `dsp/` - Signal processing (pure functions, no I/O)
//! - `pipeline/` - Session state and the six stages
//! - `ports/` - Trait definitions for the plot surface and carrier prompt
//! - `adapters/` - Implementations of ports (JSON lines, line prompt, in-memory)
//! - `commands/` - Command handlers (driving adapters)
//! - `state` - Application state management
//! - `console` - Line-oriented front end used by the binary

// Core domain (pure, no I/O)
pub mod domain;
pub mod dsp;
pub mod pipeline;
pub mod ports;

// Adapters (external I/O)
pub mod adapters;

// Front end
pub mod commands;
pub mod console;
pub mod state;

use std::io;
use std::path::{Path, PathBuf};

use adapters::JsonLinesPlot;
use domain::{AmResult, Configuration};
use state::AppState;

/// Path of a profile JSON to start with
pub const CONFIG_ENV: &str = "AM_WORKBENCH_CONFIG";
/// Directory holding saved profiles
pub const CONFIG_DIR_ENV: &str = "AM_WORKBENCH_CONFIG_DIR";

/// Read a profile from a JSON file and validate it
pub fn read_configuration(path: &Path) -> AmResult<Configuration> {
    let json = std::fs::read_to_string(path)?;
    let config: Configuration = serde_json::from_str(&json)?;
    config.validate()?;
    Ok(config)
}

/// Start the console workbench on stdin/stdout.
///
/// Plots go to stdout as JSON lines; prompts and messages go to stderr.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            log::info!("loading profile from {}", path.display());
            read_configuration(&path)?
        }
        None => Configuration::default(),
    };
    let config_dir = std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("configs"));

    let state = AppState::new(config)?;
    let mut plot = JsonLinesPlot::new(io::stdout().lock());

    console::run_console(&state, io::stdin().lock(), io::stderr(), &mut plot, &config_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_configuration_parses_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(&good, r#"{"name":"Bench","noise_std_dev":0.1,"seed":7}"#).unwrap();
        let config = read_configuration(&good).unwrap();
        assert_eq!(config.seed, Some(7));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"name":"Bench","noise_std_dev":-0.1}"#).unwrap();
        assert!(read_configuration(&bad).is_err());

        assert!(read_configuration(&dir.path().join("missing.json")).is_err());
    }
}
