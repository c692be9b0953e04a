//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur while configuring or running the timer.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration was read but holds values the timer cannot run with.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A desktop notification could not be delivered.
    #[error("Notification failed: {0}")]
    Notification(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PomoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
