use colored::Colorize;

use crate::config::TimerSettings;
use crate::timer::{format_duration, RunOutcome, RunSummary};

/// Format a finished run as pretty output
pub fn format_summary_pretty(summary: &RunSummary) -> String {
    let (icon, headline) = match summary.outcome {
        RunOutcome::Completed => ("✅", "All sessions complete!".green().bold()),
        RunOutcome::Stopped => ("⏹️", "Session stopped early".yellow().bold()),
    };

    let mut output = format!("{icon} {headline}\n");
    output.push_str(&"─".repeat(40));
    output.push('\n');

    if !summary.title.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Session".dimmed(), summary.title.bold()));
    }

    output.push_str(&format!(
        "  {}: {}/{}\n",
        "Reached".dimmed(),
        summary.last_session,
        summary.total_sessions
    ));
    output.push_str(&format!(
        "  {}: {} work, {} break\n",
        "Phases".dimmed(),
        summary.work_phases,
        summary.break_phases
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Focused".dimmed(),
        format_duration(summary.focused()).cyan()
    ));

    if summary.paused_seconds > 0 {
        output.push_str(&format!(
            "  {}: {}\n",
            "Paused".dimmed(),
            format_duration(summary.paused())
        ));
    }

    output
}

/// Format effective timer settings as pretty output
pub fn format_settings_pretty(settings: &TimerSettings) -> String {
    let on_off = |enabled: bool| if enabled { "on".green() } else { "off".red() };

    let mut output = format!("{}\n", "Timer settings".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "  {}: {} min\n",
        "Work".dimmed(),
        settings.work_minutes()
    ));
    output.push_str(&format!(
        "  {}: {} min\n",
        "Break".dimmed(),
        settings.break_minutes()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Sessions".dimmed(),
        settings.total_sessions()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Final break".dimmed(),
        on_off(settings.require_final_break())
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Pause".dimmed(),
        on_off(settings.supports_pause())
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Notifications".dimmed(),
        on_off(settings.notify_on_transition())
    ));

    output
}
