//! Pomodoro session timer.
//!
//! Provides the work/break state machine and the data the TUI renders:
//! - Work and break phases across a configured number of sessions
//! - Pause/resume that excludes paused time from progress
//! - Snapshots for rendering and a summary once the run ends

pub mod clock;
pub mod format;
pub mod session;
pub mod snapshot;
pub mod summary;

pub use clock::{Clock, SystemClock};
pub use format::{format_duration, format_duration_mmss};
pub use session::SessionTimer;
pub use snapshot::{Phase, Snapshot, TimerState};
pub use summary::{RunOutcome, RunSummary};
