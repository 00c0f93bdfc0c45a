//! Configuration module - plugin settings and paths
//!
//! This module provides functionality for:
//! - Loading and saving the persisted plugin settings (data folder)
//! - Default values for keyword, directories and file names
//! - Resolving icon and data paths
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Settings, MacrosConfig)
//! - `loader` - File system loading and saving

mod defaults;
mod loader;
mod types;

pub use defaults::{DATA_FILE_NAME, DEFAULT_ACTION_KEYWORD, SETTINGS_FILE_NAME};

pub use types::{default_plugin_directory, MacrosConfig, Settings};

pub use loader::{load_settings, save_settings};

#[cfg(test)]
pub use defaults::{APP_ICON, MACRO_ICON};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
