use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // informational
    Warning,  // recoverable
    Error,    // operation failed
    Critical, // store is unusable until reloaded
}

impl ErrorSeverity {
    /// Prefix for terminal notices
    pub fn label(self) -> &'static str {
        match self {
            ErrorSeverity::Info => "info",
            ErrorSeverity::Warning => "warning",
            ErrorSeverity::Error => "error",
            ErrorSeverity::Critical => "critical",
        }
    }
}

/// Domain-specific errors for the macro store and dispatcher
#[derive(Error, Debug)]
pub enum MacroError {
    #[error("can't read data file {path}: {message}!")]
    PersistenceRead { path: PathBuf, message: String },

    #[error("write data failed for {path}: {message}!")]
    PersistenceWrite { path: PathBuf, message: String },

    #[error("macro data is not loaded, reload the data file first")]
    StoreUnavailable,

    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

impl MacroError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PersistenceRead { .. } => ErrorSeverity::Critical,
            Self::PersistenceWrite { .. } => ErrorSeverity::Error,
            Self::StoreUnavailable => ErrorSeverity::Critical,
            Self::ClipboardUnavailable(_) => ErrorSeverity::Warning,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::PersistenceRead { message, .. } => format!("can't read data file: {}!", message),
            Self::PersistenceWrite { message, .. } => format!("write data failed: {}!", message),
            Self::StoreUnavailable => "Macros are not loaded. Try `-rl` to reload.".to_string(),
            Self::ClipboardUnavailable(_) => "Copy failed, please try again later".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MacroError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use script_kit_macros::error::ResultExt;
///
/// // Keep going with default settings if the settings file can't be written
/// save_settings(&path, &settings).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
