//! Command implementations for pomo.

mod completions;

pub use completions::completions;

use std::path::Path;

use tracing::info;

use crate::cli::args::OutputFormat;
use crate::config::{Config, ConfigOverrides, Paths};
use crate::error::PomoError;
use crate::notify;
use crate::output::{format_settings, format_summary};
use crate::tui;

/// Load the config file and apply command-line overrides.
///
/// An explicit `--config` path must exist; the default path may be missing.
///
/// # Errors
///
/// Returns an error if the file is missing (explicit path only) or malformed.
pub fn load_config(
    explicit: Option<&Path>,
    paths: &Paths,
    overrides: &ConfigOverrides,
) -> Result<Config, PomoError> {
    let config = match explicit {
        Some(path) if !path.exists() => {
            return Err(PomoError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Some(path) => Config::load_from_path(path)?,
        None => Config::load_from_path(&paths.config_file)?,
    };

    Ok(config.with_overrides(overrides))
}

/// Run the timer TUI and report the run summary.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the terminal fails.
pub fn start(
    config: &Config,
    title: Option<String>,
    format: OutputFormat,
) -> Result<String, PomoError> {
    // Validate before touching the terminal
    let settings = config.timer_settings()?;
    let notifier = notify::from_config(config);

    match tui::run(settings, notifier, title)? {
        Some(summary) => {
            info!(outcome = %summary.outcome, work_phases = summary.work_phases, "run finished");
            format_summary(&summary, format)
        }
        None => Ok(String::new()),
    }
}

/// Show the effective settings.
///
/// # Errors
///
/// Returns an error if the settings are invalid or serialization fails.
pub fn config(config: &Config, format: OutputFormat) -> Result<String, PomoError> {
    let settings = config.timer_settings()?;
    format_settings(&settings, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_default_path_missing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        let config = load_config(None, &paths, &ConfigOverrides::default()).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_explicit_path_missing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let missing = temp_dir.path().join("nope.yaml");

        let err = load_config(Some(&missing), &paths, &ConfigOverrides::default()).unwrap_err();

        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "timer:\n  work_minutes: 40\n  sessions: 2\n").unwrap();
        let overrides = ConfigOverrides {
            sessions: Some(6),
            ..ConfigOverrides::default()
        };

        let config = load_config(None, &paths, &overrides).unwrap();

        assert_eq!(config.timer.work_minutes, 40);
        assert_eq!(config.timer.sessions, 6);
    }

    #[test]
    fn test_config_command_rejects_zero() {
        let mut cfg = Config::default();
        cfg.timer.break_minutes = 0;

        let err = config(&cfg, OutputFormat::Pretty).unwrap_err();

        assert!(matches!(err, PomoError::InvalidConfig(_)));
    }

    #[test]
    fn test_start_rejects_invalid_settings_before_tui() {
        let mut cfg = Config::default();
        cfg.timer.work_minutes = 0;

        let err = start(&cfg, Some("x".to_string()), OutputFormat::Pretty).unwrap_err();

        assert!(matches!(err, PomoError::InvalidConfig(_)));
    }
}
