//! Terminal User Interface (TUI) for pomo.
//!
//! Captures the session title, then renders the running timer once a second.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Screen};
pub use event::{action_for_key, Action};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::config::TimerSettings;
use crate::error::PomoError;
use crate::notify::Notifier;
use crate::timer::{Clock, RunSummary, SystemClock};

/// Interval between timer ticks.
pub const TICK_RATE: Duration = Duration::from_secs(1);

/// Run the TUI application.
///
/// Returns the run summary, or `None` if the user quit at the title prompt.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<N: Notifier>(
    settings: TimerSettings,
    notifier: N,
    title: Option<String>,
) -> Result<Option<RunSummary>, PomoError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut terminal = restore_on_error(setup_terminal(), || {
        execute!(io::stdout(), LeaveAlternateScreen).ok();
        disable_raw_mode().ok();
    })?;

    // Create app state and run main loop
    let clock = SystemClock;
    let mut app = App::new(settings, notifier, title, clock.now());
    let result = run_app(&mut terminal, &mut app, &clock);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|()| app.summary())
}

/// Enter the alternate screen and create the ratatui terminal.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, PomoError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))
}

/// Run `restore` if a setup step failed, so raw mode is not left behind.
fn restore_on_error<T>(
    result: Result<T, PomoError>,
    restore: impl FnOnce(),
) -> Result<T, PomoError> {
    if result.is_err() {
        restore();
    }
    result
}

/// Run the main application loop.
fn run_app<B: Backend, N: Notifier, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<N>,
    clock: &C,
) -> Result<(), PomoError> {
    let mut next_tick = Instant::now() + TICK_RATE;

    while !app.should_quit() {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events until the next tick is due
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if let Some(action) = event::next_action(app.screen(), timeout)? {
            debug!(?action, "input");
            match action {
                Action::Quit => app.quit(clock.now()),
                Action::Confirm => {
                    app.start_timer(clock.now());
                    next_tick = Instant::now() + TICK_RATE;
                }
                Action::Insert(c) => app.push_char(c),
                Action::Backspace => app.pop_char(),
                Action::TogglePause => app.toggle_pause(clock.now()),
            }
        }

        let now = Instant::now();
        if now >= next_tick {
            app.tick(clock.now());
            // Progress is recomputed from wall time, so skipped ticks are not replayed
            next_tick = now + TICK_RATE;
        }
    }

    Ok(())
}
