//! Settings file handling.
//!
//! `<config_dir>/compresor/settings.json`. A missing or unreadable file yields
//! defaults; saving creates the directory as needed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::settings::AppSettings;

const APP_DIR: &str = "compresor";
const SETTINGS_FILE: &str = "settings.json";

/// Default on-disk location of the settings file.
pub fn settings_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| AppError::Storage("No user config directory available".into()))?;
    Ok(base.join(APP_DIR).join(SETTINGS_FILE))
}

/// Read settings. Returns defaults if nothing is saved or the file is corrupt.
pub fn get_settings() -> AppSettings {
    match settings_path() {
        Ok(path) => load_from(&path),
        Err(_) => AppSettings::default(),
    }
}

/// Save settings. Persists to disk immediately.
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    save_to(&settings_path()?, settings)
}

fn load_from(path: &Path) -> AppSettings {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}

fn save_to(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
    }
    let text = serde_json::to_string_pretty(settings)?;
    fs::write(path, text).map_err(|e| AppError::Storage(e.to_string()))?;
    Ok(())
}
