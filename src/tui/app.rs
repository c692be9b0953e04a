//! Application state for the TUI.

use chrono::{DateTime, Utc};

use crate::config::TimerSettings;
use crate::notify::Notifier;
use crate::timer::{Phase, RunSummary, SessionTimer, Snapshot, TimerState};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Capturing the session title.
    Title,
    /// Timer running.
    Timer,
}

/// Application state.
pub struct App<N: Notifier> {
    settings: TimerSettings,
    /// Held until the timer starts.
    notifier: Option<N>,
    timer: Option<SessionTimer<N>>,
    /// Title being typed on the title screen.
    pub title_input: String,
    /// Latest timer snapshot.
    pub snapshot: Option<Snapshot>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the user quit before starting a timer.
    cancelled: bool,
}

impl<N: Notifier> App<N> {
    /// Create a new app instance.
    ///
    /// With a title the timer starts right away; otherwise the title screen
    /// is shown first.
    pub fn new(
        settings: TimerSettings,
        notifier: N,
        title: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut app = Self {
            settings,
            notifier: Some(notifier),
            timer: None,
            title_input: String::new(),
            snapshot: None,
            status: None,
            cancelled: false,
        };

        if let Some(title) = title {
            app.title_input = title;
            app.start_timer(now);
        }

        app
    }

    /// Current screen.
    pub const fn screen(&self) -> Screen {
        if self.timer.is_some() {
            Screen::Timer
        } else {
            Screen::Title
        }
    }

    /// Append a character to the title.
    pub fn push_char(&mut self, c: char) {
        if self.screen() == Screen::Title {
            self.title_input.push(c);
        }
    }

    /// Delete the last character of the title.
    pub fn pop_char(&mut self) {
        if self.screen() == Screen::Title {
            self.title_input.pop();
        }
    }

    /// Confirm the title and start the timer.
    pub fn start_timer(&mut self, now: DateTime<Utc>) {
        let Some(notifier) = self.notifier.take() else {
            return;
        };

        let title = self.title_input.trim().to_string();
        let timer = SessionTimer::new(title, self.settings, notifier, now);
        self.snapshot = Some(timer.snapshot());
        self.timer = Some(timer);
        self.status = Some(format!(
            "Focus for {} minutes",
            self.settings.work_minutes()
        ));
    }

    /// Deliver a tick to the timer.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        let Some(timer) = self.timer.as_mut() else {
            return;
        };

        let previous = self.snapshot.take();
        let snapshot = timer.on_tick(now);

        if let Some(previous) = previous {
            if let Some(status) = transition_status(&previous, &snapshot) {
                self.status = Some(status);
            }
        }
        self.snapshot = Some(snapshot);
    }

    /// Pause or resume the timer.
    pub fn toggle_pause(&mut self, now: DateTime<Utc>) {
        let Some(timer) = self.timer.as_mut() else {
            return;
        };

        if !timer.settings().supports_pause() {
            self.status = Some("Pausing is disabled".to_string());
            return;
        }

        timer.toggle_pause(now);
        self.status = Some(match timer.state() {
            TimerState::Paused => "Paused - press p to resume".to_string(),
            _ => "Resumed".to_string(),
        });
        self.snapshot = Some(timer.snapshot());
    }

    /// Quit, stopping the timer if it is running.
    pub fn quit(&mut self, now: DateTime<Utc>) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.quit(now);
                self.snapshot = Some(timer.snapshot());
            }
            None => self.cancelled = true,
        }
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.cancelled || self.timer.as_ref().is_some_and(SessionTimer::is_finished)
    }

    /// Whether pause is available in this run.
    pub const fn supports_pause(&self) -> bool {
        self.settings.supports_pause()
    }

    /// Summary of the finished run, if a timer ran.
    pub fn summary(&self) -> Option<RunSummary> {
        self.timer.as_ref().and_then(SessionTimer::summary)
    }
}

/// Status line for a phase change between two snapshots.
fn transition_status(previous: &Snapshot, current: &Snapshot) -> Option<String> {
    if current.state == TimerState::Completed {
        return Some("All sessions complete!".to_string());
    }
    if previous.phase == current.phase && previous.current_session == current.current_session {
        return None;
    }

    Some(match current.phase {
        Phase::Break => format!("Break time! Back in {} minutes", current.phase_seconds / 60),
        Phase::Work => format!("Session {} - focus", current.session_label()),
    })
}
