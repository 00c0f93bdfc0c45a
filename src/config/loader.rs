//! Settings loading and saving
//!
//! Settings live in a small JSON file inside the plugin directory.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, instrument, warn};

use super::types::Settings;

/// Load plugin settings from `path`
///
/// Returns `Settings::default()` if the file is missing or can't be parsed.
#[instrument(name = "load_settings")]
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        info!(path = %path.display(), "Settings file not found, using defaults");
        return Settings::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read settings, using defaults");
            return Settings::default();
        }
    };

    match serde_json::from_str::<Settings>(&content) {
        Ok(settings) => {
            info!(path = %path.display(), "Loaded settings");
            settings
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Failed to parse settings JSON, using defaults"
            );
            Settings::default()
        }
    }
}

/// Save plugin settings to `path` using atomic write (write temp + rename)
#[instrument(name = "save_settings", skip(settings))]
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, &json)
        .with_context(|| format!("Failed to write temp settings file: {}", temp_path.display()))?;
    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to {}", path.display()))?;

    info!(path = %path.display(), "Saved settings");
    Ok(())
}
