//! Structured JSONL logging plus human-readable stderr output.
//!
//! This module provides dual-output logging:
//! - **JSONL to file** (~/.scriptkit/logs/script-kit-macros.jsonl) - structured, one event per line
//! - **Compact to stderr** - human-readable for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use script_kit_macros::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! tracing::info!(event_type = "app_start", "Application started");
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "script-kit-macros.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
/// If the log file can't be opened, only the stderr layer is installed.
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let log_path = log_dir.join(LOG_FILE_NAME);

    let (json_layer, file_guard) = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            (None, None)
        }
    };

    // Default to info, allow override via RUST_LOG
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer)
        .init();

    tracing::debug!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Get the log directory path (~/.scriptkit/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".scriptkit").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("script-kit-macros-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}
