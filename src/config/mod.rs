//! Configuration management for pomo.
//!
//! This module handles loading configuration from `~/.pomo/` and merging it
//! with command-line overrides.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, ConfigOverrides, NotificationConfig, TimerConfig, TimerSettings};
