//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`, then overridden by
//! command-line flags, then validated into an immutable [`TimerSettings`].

use serde::Deserialize;

use crate::error::PomoError;
use crate::timer::Phase;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Timer settings.
    pub timer: TimerConfig,
    /// Notification settings.
    pub notifications: NotificationConfig,
}

/// Timer settings as written in the config file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work phase duration in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Break phase duration in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Number of work/break sessions.
    #[serde(default = "default_sessions")]
    pub sessions: u32,
    /// Run the break after the last work phase before finishing.
    #[serde(default = "default_true")]
    pub require_final_break: bool,
    /// Allow pausing the timer.
    #[serde(default = "default_true")]
    pub allow_pause: bool,
}

/// Notification settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Enable desktop notifications at phase boundaries.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Keep notifications on screen until dismissed.
    #[serde(default)]
    pub persistent: bool,
}

// Default value functions for serde
const fn default_work_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_sessions() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            sessions: default_sessions(),
            require_final_break: default_true(),
            allow_pause: default_true(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            persistent: false,
        }
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Work minutes.
    pub work_minutes: Option<u32>,
    /// Break minutes.
    pub break_minutes: Option<u32>,
    /// Session count.
    pub sessions: Option<u32>,
    /// Finish right after the last work phase.
    pub skip_final_break: bool,
    /// Disable pausing.
    pub no_pause: bool,
    /// Disable notifications.
    pub no_notify: bool,
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(minutes) = overrides.work_minutes {
            self.timer.work_minutes = minutes;
        }
        if let Some(minutes) = overrides.break_minutes {
            self.timer.break_minutes = minutes;
        }
        if let Some(sessions) = overrides.sessions {
            self.timer.sessions = sessions;
        }
        if overrides.skip_final_break {
            self.timer.require_final_break = false;
        }
        if overrides.no_pause {
            self.timer.allow_pause = false;
        }
        if overrides.no_notify {
            self.notifications.enabled = false;
        }
        self
    }

    /// Validate into the settings the timer runs with.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::InvalidConfig` if a duration or the session count is zero.
    pub fn timer_settings(&self) -> Result<TimerSettings, PomoError> {
        Ok(TimerSettings::new(
            self.timer.work_minutes,
            self.timer.break_minutes,
            self.timer.sessions,
        )?
        .with_final_break(self.timer.require_final_break)
        .with_pause(self.timer.allow_pause)
        .with_notifications(self.notifications.enabled))
    }
}

/// Validated, immutable timer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    work_minutes: u32,
    break_minutes: u32,
    total_sessions: u32,
    require_final_break: bool,
    supports_pause: bool,
    notify_on_transition: bool,
}

impl TimerSettings {
    /// Create settings with pause, notifications and the final break enabled.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::InvalidConfig` if any value is zero.
    pub fn new(
        work_minutes: u32,
        break_minutes: u32,
        total_sessions: u32,
    ) -> Result<Self, PomoError> {
        if work_minutes == 0 {
            return Err(PomoError::InvalidConfig(
                "work duration must be at least 1 minute".to_string(),
            ));
        }
        if break_minutes == 0 {
            return Err(PomoError::InvalidConfig(
                "break duration must be at least 1 minute".to_string(),
            ));
        }
        if total_sessions == 0 {
            return Err(PomoError::InvalidConfig(
                "session count must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            work_minutes,
            break_minutes,
            total_sessions,
            require_final_break: true,
            supports_pause: true,
            notify_on_transition: true,
        })
    }

    /// Set whether the last session ends with a break.
    #[must_use]
    pub const fn with_final_break(mut self, required: bool) -> Self {
        self.require_final_break = required;
        self
    }

    /// Set whether pause/resume is honored.
    #[must_use]
    pub const fn with_pause(mut self, supported: bool) -> Self {
        self.supports_pause = supported;
        self
    }

    /// Set whether phase transitions fire notifications.
    #[must_use]
    pub const fn with_notifications(mut self, enabled: bool) -> Self {
        self.notify_on_transition = enabled;
        self
    }

    /// Work phase length in minutes.
    #[must_use]
    pub const fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    /// Break phase length in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Number of sessions.
    #[must_use]
    pub const fn total_sessions(&self) -> u32 {
        self.total_sessions
    }

    /// Whether the last session ends with a break.
    #[must_use]
    pub const fn require_final_break(&self) -> bool {
        self.require_final_break
    }

    /// Whether pause/resume is honored.
    #[must_use]
    pub const fn supports_pause(&self) -> bool {
        self.supports_pause
    }

    /// Whether phase transitions fire notifications.
    #[must_use]
    pub const fn notify_on_transition(&self) -> bool {
        self.notify_on_transition
    }

    /// Length of a phase in minutes.
    #[must_use]
    pub const fn minutes_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_minutes,
            Phase::Break => self.break_minutes,
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            total_sessions: default_sessions(),
            require_final_break: true,
            supports_pause: true,
            notify_on_transition: true,
        }
    }
}
