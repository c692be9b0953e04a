//! Time source for timer drivers.
//!
//! The session timer never reads the clock itself; drivers take `now` from a
//! [`Clock`] and pass it into every operation.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
