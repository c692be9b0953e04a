//! Observable timer state.
//!
//! A [`Snapshot`] is what the presentation layer renders after every tick.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::timer::format::format_duration_mmss;

/// Phase of a Pomodoro session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Focused work interval
    Work,
    /// Rest interval between work phases
    Break,
}

impl Phase {
    /// Label shown above the progress bar.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work Time",
            Self::Break => "Break Time",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Work => write!(f, "Work"),
            Self::Break => write!(f, "Break"),
        }
    }
}

/// Timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Timer is running
    Running,
    /// Timer is paused
    Paused,
    /// Every configured session has finished
    Completed,
    /// Timer was stopped before completing
    Stopped,
}

impl TimerState {
    /// Whether no further ticks should be delivered.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Stopped)
    }
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Completed => write!(f, "Completed"),
            Self::Stopped => write!(f, "Stopped"),
        }
    }
}

/// Point-in-time view of a [`SessionTimer`](crate::timer::SessionTimer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Session title entered at startup
    pub title: String,
    /// Current phase
    pub phase: Phase,
    /// Fraction of the current phase that has elapsed (0.0 - 1.0)
    pub percent_complete: f64,
    /// 1-indexed session number
    pub current_session: u32,
    /// Number of configured sessions
    pub total_sessions: u32,
    /// Whether progress is suspended
    pub paused: bool,
    /// Lifecycle state
    pub state: TimerState,
    /// Seconds elapsed in the current phase as of the last tick
    pub elapsed_seconds: i64,
    /// Length of the current phase in seconds
    pub phase_seconds: i64,
}

impl Snapshot {
    /// Time left in the current phase.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds((self.phase_seconds - self.elapsed_seconds).max(0))
    }

    /// Remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(self.remaining())
    }

    /// Check if the timer has reached a terminal state.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Session counter as "k/N".
    #[must_use]
    pub fn session_label(&self) -> String {
        format!("{}/{}", self.current_session, self.total_sessions)
    }
}
