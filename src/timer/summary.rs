//! End-of-run statistics.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOutcome {
    /// Every configured session finished
    Completed,
    /// The user quit early
    Stopped,
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::Stopped => write!(f, "Stopped"),
        }
    }
}

/// Statistics for a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Session title
    pub title: String,
    /// How the run ended
    pub outcome: RunOutcome,
    /// Session the run ended in
    pub last_session: u32,
    /// Number of configured sessions
    pub total_sessions: u32,
    /// Work phases that ran to the end
    pub work_phases: u32,
    /// Break phases that ran to the end
    pub break_phases: u32,
    /// Time spent in work phases, in seconds
    pub focused_seconds: i64,
    /// Time spent paused, in seconds
    pub paused_seconds: i64,
}

impl RunSummary {
    /// Time spent in work phases.
    #[must_use]
    pub const fn focused(&self) -> Duration {
        Duration::seconds(self.focused_seconds)
    }

    /// Time spent paused.
    #[must_use]
    pub const fn paused(&self) -> Duration {
        Duration::seconds(self.paused_seconds)
    }

    /// Check if every configured session finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome == RunOutcome::Completed
    }
}
