//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::notify::Notifier;
use crate::timer::{Phase, Snapshot, TimerState};
use crate::tui::app::{App, Screen};

const WORK_COLOR: Color = Color::Rgb(0xFF, 0x45, 0x00);
const BREAK_COLOR: Color = Color::Rgb(0x76, 0xB0, 0x41);
const PLACEHOLDER: &str = "Enter session title";

/// Render the application UI.
pub fn render<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>) {
    match (app.screen(), app.snapshot.as_ref()) {
        (Screen::Timer, Some(snapshot)) => render_timer(frame, app, snapshot),
        _ => render_title_prompt(frame, app),
    }
}

/// Gauge color for a phase.
#[must_use]
pub const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Work => WORK_COLOR,
        Phase::Break => BREAK_COLOR,
    }
}

/// Render the title prompt.
fn render_title_prompt<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hint
            Constraint::Min(0),
        ])
        .split(frame.area());

    let input = if app.title_input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.title_input.as_str())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Session ")
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(Line::from(input)).block(block), chunks[0]);

    let hint = Paragraph::new("Press Enter to start session... (Esc to quit)")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[2]);

    #[allow(clippy::cast_possible_truncation)]
    let cursor_x = chunks[0].x + 1 + app.title_input.chars().count() as u16;
    frame.set_cursor_position((cursor_x, chunks[0].y + 1));
}

/// Render the running timer.
fn render_timer<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>, snapshot: &Snapshot) {
    // Create layout: header, phase, gauge, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Phase
            Constraint::Length(3), // Gauge
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    render_phase(frame, snapshot, chunks[1]);
    render_gauge(frame, snapshot, chunks[2]);
    render_status_bar(frame, app, chunks[4]);
}

/// Render the session title header.
fn render_header(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let title = if snapshot.title.is_empty() {
        " Session ".to_string()
    } else {
        format!(" Session: {} ", snapshot.title)
    };

    let header = Paragraph::new(format!("Session {}", snapshot.session_label()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the phase label.
fn render_phase(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let mut spans = vec![Span::styled(
        snapshot.phase.label(),
        Style::default()
            .fg(phase_color(snapshot.phase))
            .add_modifier(Modifier::BOLD),
    )];

    match snapshot.state {
        TimerState::Paused => spans.push(Span::styled(
            "  [paused]",
            Style::default().fg(Color::Yellow),
        )),
        TimerState::Completed => spans.push(Span::styled(
            "  [done]",
            Style::default().fg(Color::Green),
        )),
        TimerState::Running | TimerState::Stopped => {}
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the progress gauge.
fn render_gauge(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let ratio = snapshot.percent_complete.clamp(0.0, 1.0);
    let label = format!(
        "{:.0}%  {} left",
        ratio * 100.0,
        snapshot.format_remaining()
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(snapshot.phase)))
        .ratio(ratio)
        .label(label);

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>, area: Rect) {
    let help = if app.supports_pause() {
        "p:pause/resume | q:quit"
    } else {
        "q:quit"
    };

    let text = app
        .status
        .as_ref()
        .map_or_else(|| help.to_string(), |status| format!("{status}  ({help})"));

    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
