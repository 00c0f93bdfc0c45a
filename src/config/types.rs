//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults::*;

// ============================================
// PERSISTED SETTINGS
// ============================================

/// Plugin settings persisted between runs (the settings panel's model)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Folder holding `macros.data.json`. Falls back to the plugin directory
    /// when unset or when the folder doesn't exist.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "FolderPath")]
    pub folder_path: Option<String>,
}

impl Settings {
    /// Configured data folder with `~` expanded
    pub fn data_folder(&self) -> Option<PathBuf> {
        self.folder_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
    }
}

// ============================================
// RUNTIME CONFIG
// ============================================

/// Everything the plugin needs at activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacrosConfig {
    /// Prefix token that routes a launcher query to this plugin
    pub action_keyword: String,
    /// Directory holding icons and, by default, the data file
    pub plugin_directory: PathBuf,
    pub settings: Settings,
}

impl MacrosConfig {
    pub fn new(plugin_directory: impl Into<PathBuf>, settings: Settings) -> Self {
        MacrosConfig {
            action_keyword: DEFAULT_ACTION_KEYWORD.to_string(),
            plugin_directory: plugin_directory.into(),
            settings,
        }
    }

    pub fn with_action_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.action_keyword = keyword.into();
        self
    }

    /// Folder the store should try first
    pub fn data_folder(&self) -> PathBuf {
        self.settings
            .data_folder()
            .unwrap_or_else(|| self.plugin_directory.clone())
    }

    pub fn settings_path(&self) -> PathBuf {
        self.plugin_directory.join(SETTINGS_FILE_NAME)
    }

    pub fn app_icon(&self) -> PathBuf {
        icon_path(&self.plugin_directory, APP_ICON)
    }

    pub fn macro_icon(&self) -> PathBuf {
        icon_path(&self.plugin_directory, MACRO_ICON)
    }
}

impl Default for MacrosConfig {
    fn default() -> Self {
        MacrosConfig::new(default_plugin_directory(), Settings::default())
    }
}

/// Default plugin directory (~/.scriptkit/macros)
pub fn default_plugin_directory() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_PLUGIN_DIR).as_ref())
}

fn icon_path(plugin_directory: &Path, icon: &str) -> PathBuf {
    plugin_directory.join(icon)
}
