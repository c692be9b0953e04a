//! Output formatting for pomo.
//!
//! This module formats run summaries and settings for the terminal once the
//! TUI has released it.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::TimerSettings;
use crate::error::PomoError;
use crate::timer::RunSummary;

pub use json::*;
pub use pretty::*;

/// Format a run summary based on output format
///
/// # Errors
///
/// Returns `PomoError::Serialization` if JSON serialization fails.
pub fn format_summary(summary: &RunSummary, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary)),
        OutputFormat::Json => format_summary_json(summary),
    }
}

/// Format timer settings based on output format
///
/// # Errors
///
/// Returns `PomoError::Serialization` if JSON serialization fails.
pub fn format_settings(settings: &TimerSettings, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_settings_pretty(settings)),
        OutputFormat::Json => format_settings_json(settings),
    }
}
