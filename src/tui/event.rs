//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::tui::app::Screen;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Confirm the session title and start the timer.
    Confirm,
    /// Append a character to the title.
    Insert(char),
    /// Delete the last title character.
    Backspace,
    /// Pause or resume the timer.
    TogglePause,
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_action(screen: Screen, timeout: Duration) -> Result<Option<Action>, PomoError> {
    if !event::poll(timeout)
        .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let event =
        event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?;

    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(action_for_key(screen, key)),
        _ => Ok(None),
    }
}

/// Map a key press to an action for the current screen.
#[must_use]
pub fn action_for_key(screen: Screen, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match screen {
        Screen::Title => match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) if is_plain(key.modifiers) => Some(Action::Insert(c)),
            _ => None,
        },
        Screen::Timer => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('p' | ' ') => Some(Action::TogglePause),
            _ => None,
        },
    }
}

/// No modifiers other than Shift.
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}
