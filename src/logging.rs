//! Logging configuration and initialization.
//!
//! While the TUI owns the terminal, log lines go to `~/.pomo/pomo.log`;
//! the one-shot commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::PomoError;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Append to a file.
    File(PathBuf),
}

/// Get the log filter directive for a verbosity level.
#[must_use]
pub const fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing for the process.
///
/// `RUST_LOG` takes precedence over the verbosity level.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(verbose: u8, target: &LogTarget) -> Result<(), PomoError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_line_number(verbose >= 3); // Show line numbers for -vvv

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    PomoError::Config(format!(
                        "Failed to open log file {}: {e}",
                        path.display()
                    ))
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    result.map_err(|e| PomoError::Config(format!("Failed to initialize logging: {e}")))?;

    debug!(verbose, ?target, "logging initialized");
    Ok(())
}
