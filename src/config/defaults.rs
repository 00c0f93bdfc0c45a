//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Action keyword the launcher uses to route queries to the macros plugin
pub const DEFAULT_ACTION_KEYWORD: &str = "mc";

/// Plugin directory relative to the home directory
pub const DEFAULT_PLUGIN_DIR: &str = "~/.scriptkit/macros";

/// Settings file name inside the plugin directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Data file holding the macro list, inside the data folder
pub const DATA_FILE_NAME: &str = "macros.data.json";

/// Icons, relative to the plugin directory
pub const APP_ICON: &str = "ico/app.png";
pub const MACRO_ICON: &str = "ico/macro.png";
