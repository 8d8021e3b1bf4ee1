//! Configuration persistence commands
//!
//! Save/load/list/delete configuration profiles as JSON files in a
//! configs directory, and apply a profile to the running session.

use std::path::{Path, PathBuf};

use crate::domain::Configuration;
use crate::pipeline::Pipeline;
use crate::state::AppState;

/// Ensure the configs directory exists and return it.
fn config_dir(base: &Path) -> Result<PathBuf, String> {
    std::fs::create_dir_all(base).map_err(|e| format!("Failed to create configs dir: {e}"))?;
    Ok(base.to_path_buf())
}

/// Sanitize a configuration name to prevent path traversal.
/// Rejects anything with path separators, "..", or empty strings.
fn sanitize_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Configuration name cannot be empty".to_string());
    }
    if trimmed.contains("..") || trimmed.contains('/') || trimmed.contains('\\') {
        return Err("Invalid configuration name".to_string());
    }
    // Only allow alphanumeric, spaces, hyphens, underscores
    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_')
    {
        return Err("Configuration name contains invalid characters".to_string());
    }
    Ok(trimmed.to_string())
}

pub fn save_configuration(base: &Path, config: &Configuration) -> Result<(), String> {
    let name = sanitize_name(&config.name)?;
    config.validate().map_err(|e| e.to_string())?;
    let dir = config_dir(base)?;
    let path = dir.join(format!("{name}.json"));
    let json =
        serde_json::to_string_pretty(config).map_err(|e| format!("Serialization error: {e}"))?;
    std::fs::write(&path, json).map_err(|e| format!("Failed to write config: {e}"))?;
    log::info!("saved configuration '{name}' to {}", path.display());
    Ok(())
}

pub fn load_configuration(base: &Path, name: &str) -> Result<Configuration, String> {
    let name = sanitize_name(name)?;
    let dir = config_dir(base)?;
    let path = dir.join(format!("{name}.json"));
    let json = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config '{name}': {e}"))?;
    let config: Configuration = serde_json::from_str(&json)
        .map_err(|e| format!("Failed to parse config '{name}': {e}"))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

pub fn list_configurations(base: &Path) -> Result<Vec<String>, String> {
    let dir = config_dir(base)?;
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .map_err(|e| format!("Failed to read configs dir: {e}"))?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension()?.to_str()? == "json" {
                path.file_stem()?.to_str().map(String::from)
            } else {
                None
            }
        })
        .collect();
    names.sort();
    Ok(names)
}

pub fn delete_configuration(base: &Path, name: &str) -> Result<(), String> {
    let name = sanitize_name(name)?;
    if name == "Default" {
        return Err("Cannot delete the Default configuration".to_string());
    }
    let dir = config_dir(base)?;
    let path = dir.join(format!("{name}.json"));
    if !path.exists() {
        return Err(format!("Configuration '{name}' not found"));
    }
    std::fs::remove_file(&path).map_err(|e| format!("Failed to delete config '{name}': {e}"))
}

/// Make `config` the active profile.
///
/// The pipeline is rebuilt with the new noise source; signals already in the
/// session are kept.
pub fn apply_configuration(state: &AppState, config: Configuration) -> Result<(), String> {
    let pipeline = Pipeline::new(&config).map_err(|e| e.to_string())?;
    // Both locks are taken before either value changes
    let mut active_pipeline = state
        .pipeline
        .lock()
        .map_err(|_| "Pipeline state corrupted".to_string())?;
    let mut active_config = state
        .config
        .lock()
        .map_err(|_| "Configuration state corrupted".to_string())?;
    log::info!("applied configuration '{}'", config.name);
    *active_pipeline = pipeline;
    *active_config = config;
    Ok(())
}
