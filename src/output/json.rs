//! JSON output formatting for pomo.

use serde::Serialize;
use serde_json::json;

use crate::config::TimerSettings;
use crate::error::PomoError;
use crate::timer::RunSummary;

/// Format a finished run as JSON
///
/// # Errors
///
/// Returns `PomoError::Serialization` if JSON serialization fails.
pub fn format_summary_json(summary: &RunSummary) -> Result<String, PomoError> {
    to_json(summary)
}

/// Format effective timer settings as JSON
///
/// # Errors
///
/// Returns `PomoError::Serialization` if JSON serialization fails.
pub fn format_settings_json(settings: &TimerSettings) -> Result<String, PomoError> {
    let output = json!({
        "work_minutes": settings.work_minutes(),
        "break_minutes": settings.break_minutes(),
        "sessions": settings.total_sessions(),
        "require_final_break": settings.require_final_break(),
        "pause": settings.supports_pause(),
        "notifications": settings.notify_on_transition(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PomoError::Serialization` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
