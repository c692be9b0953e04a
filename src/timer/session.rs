//! The Pomodoro session state machine.
//!
//! A [`SessionTimer`] alternates work and break phases until every configured
//! session has finished. It never reads the clock: the driver passes `now`
//! into each tick and command, and progress is always recomputed from the
//! phase start so missed ticks cannot cause drift.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::config::TimerSettings;
use crate::notify::Notifier;
use crate::timer::format::fractional_minutes;
use crate::timer::snapshot::{Phase, Snapshot, TimerState};
use crate::timer::summary::{RunOutcome, RunSummary};

/// Timer for a run of Pomodoro sessions.
pub struct SessionTimer<N> {
    title: String,
    settings: TimerSettings,
    notifier: N,
    phase: Phase,
    /// 1-indexed
    current_session: u32,
    /// Start of the current phase, shifted forward by every pause.
    phase_start: DateTime<Utc>,
    paused_at: Option<DateTime<Utc>>,
    state: TimerState,
    percent_complete: f64,
    /// Elapsed phase time as of the last tick.
    elapsed: Duration,
    work_phases: u32,
    break_phases: u32,
    focused: Duration,
    paused_total: Duration,
}

impl<N: Notifier> SessionTimer<N> {
    /// Start the first work phase at `now`.
    pub fn new(
        title: impl Into<String>,
        settings: TimerSettings,
        notifier: N,
        now: DateTime<Utc>,
    ) -> Self {
        let title = title.into();
        info!(
            title = %title,
            work_minutes = settings.work_minutes(),
            break_minutes = settings.break_minutes(),
            sessions = settings.total_sessions(),
            "starting session timer"
        );

        Self {
            title,
            settings,
            notifier,
            phase: Phase::Work,
            current_session: 1,
            phase_start: now,
            paused_at: None,
            state: TimerState::Running,
            percent_complete: 0.0,
            elapsed: Duration::zero(),
            work_phases: 0,
            break_phases: 0,
            focused: Duration::zero(),
            paused_total: Duration::zero(),
        }
    }

    /// Advance the timer to `now`.
    ///
    /// Does nothing while paused or after the run has finished.
    pub fn on_tick(&mut self, now: DateTime<Utc>) -> Snapshot {
        if self.state != TimerState::Running {
            return self.snapshot();
        }

        let elapsed = now.signed_duration_since(self.phase_start).max(Duration::zero());
        let elapsed_minutes = fractional_minutes(elapsed);
        let phase_minutes = f64::from(self.settings.minutes_for(self.phase));

        if elapsed_minutes >= phase_minutes {
            self.finish_phase(now);
        } else {
            self.elapsed = elapsed;
            self.percent_complete = elapsed_minutes / phase_minutes;
        }

        self.snapshot()
    }

    /// Suspend progress.
    ///
    /// Ignored when already paused, finished, or pausing is disabled.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if !self.settings.supports_pause() {
            debug!("pause ignored: pausing is disabled");
            return;
        }
        if self.state != TimerState::Running {
            debug!(state = %self.state, "pause ignored");
            return;
        }

        self.paused_at = Some(now);
        self.state = TimerState::Paused;
        debug!(phase = %self.phase, session = self.current_session, "paused");
    }

    /// Continue after a pause; the paused interval does not count as elapsed.
    ///
    /// Ignored unless paused.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if self.state != TimerState::Paused {
            debug!(state = %self.state, "resume ignored");
            return;
        }

        let paused_for = self.take_pause(now);
        self.phase_start += paused_for;
        self.state = TimerState::Running;
        debug!(paused_seconds = paused_for.num_seconds(), "resumed");
    }

    /// Pause when running, resume when paused.
    pub fn toggle_pause(&mut self, now: DateTime<Utc>) {
        match self.state {
            TimerState::Running => self.pause(now),
            TimerState::Paused => self.resume(now),
            TimerState::Completed | TimerState::Stopped => {}
        }
    }

    /// Stop the run immediately, whatever the phase.
    pub fn quit(&mut self, now: DateTime<Utc>) {
        if self.state.is_finished() {
            return;
        }
        // Progress stops at the pause, otherwise at `now`
        let until = self.paused_at.unwrap_or(now);
        self.advance_to(until);
        if self.state == TimerState::Paused {
            self.take_pause(now);
        }
        if self.phase == Phase::Work {
            self.focused += self.elapsed;
        }

        self.state = TimerState::Stopped;
        info!(
            phase = %self.phase,
            session = self.current_session,
            "session timer stopped"
        );
    }

    /// Current observable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            title: self.title.clone(),
            phase: self.phase,
            percent_complete: self.percent_complete,
            current_session: self.current_session,
            total_sessions: self.settings.total_sessions(),
            paused: self.state == TimerState::Paused,
            state: self.state,
            elapsed_seconds: self.elapsed.num_seconds(),
            phase_seconds: i64::from(self.settings.minutes_for(self.phase)) * 60,
        }
    }

    /// Statistics for the run, available once it has finished.
    #[must_use]
    pub fn summary(&self) -> Option<RunSummary> {
        let outcome = match self.state {
            TimerState::Completed => RunOutcome::Completed,
            TimerState::Stopped => RunOutcome::Stopped,
            TimerState::Running | TimerState::Paused => return None,
        };

        Some(RunSummary {
            title: self.title.clone(),
            outcome,
            last_session: self.current_session,
            total_sessions: self.settings.total_sessions(),
            work_phases: self.work_phases,
            break_phases: self.break_phases,
            focused_seconds: self.focused.num_seconds(),
            paused_seconds: self.paused_total.num_seconds(),
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Check if the run has finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Settings the timer was created with.
    #[must_use]
    pub const fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    fn finish_phase(&mut self, now: DateTime<Utc>) {
        let total = self.settings.total_sessions();

        match self.phase {
            Phase::Work => {
                self.work_phases += 1;
                self.focused += Duration::minutes(i64::from(self.settings.work_minutes()));

                if self.current_session >= total && !self.settings.require_final_break() {
                    self.complete();
                    return;
                }

                self.enter(Phase::Break, now);
                self.notify(
                    &format!("Work session {}/{total} complete", self.current_session),
                    &format!("Take a {} minute break.", self.settings.break_minutes()),
                );
            }
            Phase::Break => {
                self.break_phases += 1;

                if self.current_session >= total {
                    self.complete();
                    return;
                }

                self.current_session += 1;
                self.enter(Phase::Work, now);
                self.notify(
                    "Break over",
                    &format!(
                        "Session {}/{total}: focus for {} minutes.",
                        self.current_session,
                        self.settings.work_minutes()
                    ),
                );
            }
        }
    }

    fn enter(&mut self, phase: Phase, now: DateTime<Utc>) {
        self.phase = phase;
        self.phase_start = now;
        self.percent_complete = 0.0;
        self.elapsed = Duration::zero();
        info!(
            phase = %phase,
            session = self.current_session,
            minutes = self.settings.minutes_for(phase),
            "phase started"
        );
    }

    fn complete(&mut self) {
        self.state = TimerState::Completed;
        self.percent_complete = 1.0;
        self.elapsed = Duration::minutes(i64::from(self.settings.minutes_for(self.phase)));
        info!(
            work_phases = self.work_phases,
            break_phases = self.break_phases,
            "all sessions complete"
        );

        let total = self.settings.total_sessions();
        let plural = if total == 1 { "" } else { "s" };
        let message = if self.title.is_empty() {
            format!("Finished {total} session{plural}.")
        } else {
            format!("Finished {total} session{plural} of {}.", self.title)
        };
        self.notify("All sessions complete", &message);
    }

    /// Record progress up to `until` without finishing the phase.
    fn advance_to(&mut self, until: DateTime<Utc>) {
        let phase_length = Duration::minutes(i64::from(self.settings.minutes_for(self.phase)));
        self.elapsed = until
            .signed_duration_since(self.phase_start)
            .clamp(Duration::zero(), phase_length);
        self.percent_complete =
            fractional_minutes(self.elapsed) / fractional_minutes(phase_length);
    }

    /// Clear the pause marker, returning how long the timer was paused.
    fn take_pause(&mut self, now: DateTime<Utc>) -> Duration {
        let paused_for = self
            .paused_at
            .take()
            .map_or_else(Duration::zero, |at| {
                now.signed_duration_since(at).max(Duration::zero())
            });
        self.paused_total += paused_for;
        paused_for
    }

    fn notify(&self, title: &str, message: &str) {
        if !self.settings.notify_on_transition() {
            return;
        }
        if let Err(e) = self.notifier.notify(title, message) {
            warn!(error = %e, title, "notification not delivered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{MockNotifier, NullNotifier};
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn at(minutes: i64) -> DateTime<Utc> {
        start() + Duration::minutes(minutes)
    }

    fn at_seconds(seconds: i64) -> DateTime<Utc> {
        start() + Duration::seconds(seconds)
    }

    fn settings(work: u32, brk: u32, sessions: u32) -> TimerSettings {
        TimerSettings::new(work, brk, sessions).unwrap()
    }

    fn quiet_timer(settings: TimerSettings) -> SessionTimer<NullNotifier> {
        SessionTimer::new("Thesis", settings, NullNotifier, start())
    }

    /// Tick once per simulated second until the run finishes, returning the
    /// last minute offset reached.
    fn run_to_completion<N: Notifier>(timer: &mut SessionTimer<N>) -> i64 {
        let mut second = 0;
        while !timer.is_finished() {
            second += 1;
            timer.on_tick(at_seconds(second));
            assert!(second < 60 * 60 * 24, "timer never finished");
        }
        second / 60
    }

    #[test]
    fn test_new_timer_starts_in_first_work_phase() {
        let timer = quiet_timer(settings(25, 5, 5));
        let snap = timer.snapshot();

        assert_eq!(snap.title, "Thesis");
        assert_eq!(snap.phase, Phase::Work);
        assert_eq!(snap.current_session, 1);
        assert_eq!(snap.total_sessions, 5);
        assert_eq!(snap.state, TimerState::Running);
        assert!(!snap.paused);
        assert_eq!(snap.percent_complete, 0.0);
        assert_eq!(snap.phase_seconds, 25 * 60);
    }

    #[test]
    fn test_percent_recomputed_from_elapsed() {
        let mut timer = quiet_timer(settings(25, 5, 1));

        let snap = timer.on_tick(at(24));
        assert_eq!(snap.phase, Phase::Work);
        assert!((snap.percent_complete - 0.96).abs() < 1e-9);
        assert_eq!(snap.elapsed_seconds, 24 * 60);
        assert_eq!(snap.format_remaining(), "01:00");
    }

    #[test]
    fn test_missed_ticks_do_not_drift() {
        let mut timer = quiet_timer(settings(10, 5, 1));

        timer.on_tick(at(1));
        // No ticks for several minutes
        let snap = timer.on_tick(at(7));
        assert!((snap.percent_complete - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_tick_transitions_to_break() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|title, message| {
                title.starts_with("Work session 1/1") && message.contains("5 minute break")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let mut timer = SessionTimer::new("Thesis", settings(25, 5, 1), notifier, start());

        let snap = timer.on_tick(at(25));

        assert_eq!(snap.phase, Phase::Break);
        assert_eq!(snap.percent_complete, 0.0);
        assert_eq!(snap.elapsed_seconds, 0);
        assert_eq!(snap.phase_seconds, 5 * 60);
        assert_eq!(snap.current_session, 1);
        assert_eq!(snap.state, TimerState::Running);
    }

    #[test]
    fn test_single_session_with_final_break() {
        let mut timer = quiet_timer(settings(25, 5, 1));

        timer.on_tick(at(24));
        timer.on_tick(at(25));
        let snap = timer.on_tick(at(29));
        assert_eq!(snap.phase, Phase::Break);
        assert!((snap.percent_complete - 0.8).abs() < 1e-9);

        let snap = timer.on_tick(at(30));
        assert_eq!(snap.state, TimerState::Completed);
        assert!(snap.is_finished());
        assert_eq!(snap.percent_complete, 1.0);
    }

    #[test]
    fn test_single_session_skipping_final_break() {
        let mut timer = quiet_timer(settings(25, 5, 1).with_final_break(false));

        let snap = timer.on_tick(at(25));

        assert_eq!(snap.state, TimerState::Completed);
        assert_eq!(snap.phase, Phase::Work);
        let summary = timer.summary().unwrap();
        assert_eq!(summary.work_phases, 1);
        assert_eq!(summary.break_phases, 0);
    }

    #[test]
    fn test_break_completion_starts_next_session() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|title, _| title.starts_with("Work session"))
            .times(1)
            .returning(|_, _| Ok(()));
        notifier
            .expect_notify()
            .withf(|title, message| title.starts_with("Break over") && message.contains("2/3"))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut timer = SessionTimer::new("Thesis", settings(25, 5, 3), notifier, start());

        timer.on_tick(at(25));
        let snap = timer.on_tick(at(30));

        assert_eq!(snap.phase, Phase::Work);
        assert_eq!(snap.current_session, 2);
        assert_eq!(snap.percent_complete, 0.0);
        assert_eq!(snap.phase_seconds, 25 * 60);
    }

    #[test]
    fn test_phase_counts_with_final_break() {
        for sessions in 1..=4 {
            let mut timer = quiet_timer(settings(2, 1, sessions));
            let finished_at = run_to_completion(&mut timer);

            let summary = timer.summary().unwrap();
            assert_eq!(summary.outcome, RunOutcome::Completed);
            assert_eq!(summary.work_phases, sessions);
            assert_eq!(summary.break_phases, sessions);
            assert_eq!(summary.last_session, sessions);
            assert_eq!(finished_at, i64::from(sessions) * 3);
        }
    }

    #[test]
    fn test_phase_counts_skipping_final_break() {
        for sessions in 1..=4 {
            let mut timer = quiet_timer(settings(2, 1, sessions).with_final_break(false));
            let finished_at = run_to_completion(&mut timer);

            let summary = timer.summary().unwrap();
            assert_eq!(summary.work_phases, sessions);
            assert_eq!(summary.break_phases, sessions - 1);
            assert_eq!(finished_at, i64::from(sessions) * 3 - 1);
        }
    }

    #[test]
    fn test_session_counter_stays_in_range() {
        let mut timer = quiet_timer(settings(1, 1, 3));
        let mut second = 0;
        while !timer.is_finished() {
            second += 1;
            let snap = timer.on_tick(at_seconds(second));
            assert!(snap.current_session >= 1);
            assert!(snap.current_session <= snap.total_sessions);
        }
    }

    #[test]
    fn test_percent_monotonic_within_phase_and_reset_on_transition() {
        let mut timer = quiet_timer(settings(3, 2, 2));
        let mut previous = timer.snapshot();
        let mut second = 0;

        while !timer.is_finished() {
            second += 1;
            let snap = timer.on_tick(at_seconds(second));
            if snap.is_finished() {
                break;
            }
            if snap.phase == previous.phase && snap.current_session == previous.current_session {
                assert!(snap.percent_complete >= previous.percent_complete);
            } else {
                assert_eq!(snap.percent_complete, 0.0);
            }
            assert!(snap.percent_complete < 1.0);
            previous = snap;
        }
    }

    #[test]
    fn test_pause_excludes_paused_time() {
        let mut timer = quiet_timer(settings(25, 5, 1));

        let before = timer.on_tick(at(10));
        timer.pause(at(10));
        timer.resume(at(20));
        let after = timer.on_tick(at(20));

        assert!((after.percent_complete - before.percent_complete).abs() < 1e-9);

        // Completion is pushed back by the ten paused minutes
        assert_eq!(timer.on_tick(at(34)).phase, Phase::Work);
        assert_eq!(timer.on_tick(at(35)).phase, Phase::Break);
    }

    #[test]
    fn test_immediate_pause_resume_is_identity() {
        let mut timer = quiet_timer(settings(25, 5, 2));
        timer.on_tick(at(7));
        let before = timer.snapshot();

        timer.pause(at(7));
        timer.resume(at(7));

        assert_eq!(timer.snapshot(), before);
        assert_eq!(timer.on_tick(at(8)).elapsed_seconds, 8 * 60);
    }

    #[test]
    fn test_double_pause_is_noop() {
        let mut timer = quiet_timer(settings(25, 5, 2));
        timer.on_tick(at(5));

        timer.pause(at(5));
        let after_first = timer.snapshot();
        timer.pause(at(6));

        assert_eq!(timer.snapshot(), after_first);
        assert!(after_first.paused);

        // The first pause instant is the one that counts
        timer.resume(at(8));
        let snap = timer.on_tick(at(8));
        assert_eq!(snap.elapsed_seconds, 5 * 60);
    }

    #[test]
    fn test_resume_while_running_is_noop() {
        let mut timer = quiet_timer(settings(25, 5, 2));
        timer.on_tick(at(5));
        let before = timer.snapshot();

        timer.resume(at(6));

        assert_eq!(timer.snapshot(), before);
        assert_eq!(timer.on_tick(at(6)).elapsed_seconds, 6 * 60);
    }

    #[test]
    fn test_tick_while_paused_changes_nothing() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();
        let mut timer = SessionTimer::new("Thesis", settings(25, 5, 1), notifier, start());

        timer.on_tick(at(3));
        timer.pause(at(3));
        let paused = timer.snapshot();

        // Well past the work boundary
        let snap = timer.on_tick(at(60));

        assert_eq!(snap, paused);
        assert_eq!(snap.phase, Phase::Work);
        assert!(snap.paused);
    }

    #[test]
    fn test_pause_disabled() {
        let mut timer = quiet_timer(settings(25, 5, 1).with_pause(false));
        timer.on_tick(at(5));

        timer.pause(at(5));
        assert_eq!(timer.state(), TimerState::Running);

        timer.toggle_pause(at(6));
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.on_tick(at(25)).phase, Phase::Break);
    }

    #[test]
    fn test_toggle_pause() {
        let mut timer = quiet_timer(settings(25, 5, 1));

        timer.toggle_pause(at(1));
        assert_eq!(timer.state(), TimerState::Paused);
        timer.toggle_pause(at(2));
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn test_quit_mid_run() {
        let mut timer = quiet_timer(settings(25, 5, 5));
        // Reach the second work phase
        timer.on_tick(at(25));
        timer.on_tick(at(30));
        let snap = timer.on_tick(at(40));
        assert_eq!(snap.current_session, 2);
        assert_eq!(snap.phase, Phase::Work);

        timer.quit(at(40));

        assert_eq!(timer.state(), TimerState::Stopped);
        assert!(timer.is_finished());
        let summary = timer.summary().unwrap();
        assert_eq!(summary.outcome, RunOutcome::Stopped);
        assert_eq!(summary.last_session, 2);
        assert_eq!(summary.work_phases, 1);
        assert_eq!(summary.focused(), Duration::minutes(35));
    }

    #[test]
    fn test_quit_while_paused_records_pause() {
        let mut timer = quiet_timer(settings(25, 5, 1));
        timer.on_tick(at(5));
        timer.pause(at(5));

        timer.quit(at(9));

        let summary = timer.summary().unwrap();
        assert_eq!(summary.paused(), Duration::minutes(4));
        assert_eq!(summary.focused(), Duration::minutes(5));
    }

    #[test]
    fn test_quit_counts_time_since_last_tick() {
        let mut timer = quiet_timer(settings(25, 5, 1));
        timer.on_tick(at(3));

        timer.quit(at_seconds(7 * 60 + 30));

        let summary = timer.summary().unwrap();
        assert_eq!(summary.focused(), Duration::seconds(7 * 60 + 30));
        assert!((timer.snapshot().percent_complete - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_quit_without_ticks_caps_at_phase_length() {
        let mut timer = quiet_timer(settings(25, 5, 1));

        // No ticks were delivered, e.g. the process was suspended
        timer.quit(at(90));

        let summary = timer.summary().unwrap();
        assert_eq!(summary.focused(), Duration::minutes(25));
        assert_eq!(summary.work_phases, 0);
    }

    #[test]
    fn test_quit_while_paused_stops_progress_at_pause() {
        let mut timer = quiet_timer(settings(25, 5, 1));
        timer.on_tick(at(2));
        timer.pause(at(6));

        timer.quit(at(20));

        let summary = timer.summary().unwrap();
        assert_eq!(summary.focused(), Duration::minutes(6));
        assert_eq!(summary.paused(), Duration::minutes(14));
    }

    #[test]
    fn test_finished_timer_ignores_input() {
        let mut timer = quiet_timer(settings(1, 1, 1).with_final_break(false));
        timer.on_tick(at(1));
        let done = timer.snapshot();

        timer.pause(at(2));
        timer.resume(at(3));
        timer.quit(at(4));

        assert_eq!(timer.on_tick(at(10)), done);
        assert_eq!(timer.state(), TimerState::Completed);
    }

    #[test]
    fn test_summary_unavailable_while_running() {
        let timer = quiet_timer(settings(25, 5, 1));
        assert!(timer.summary().is_none());
    }

    #[test]
    fn test_completion_notifies() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|title, message| {
                title.starts_with("All sessions complete") && message.contains("Thesis")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let mut timer = SessionTimer::new(
            "Thesis",
            settings(25, 5, 1).with_final_break(false),
            notifier,
            start(),
        );

        timer.on_tick(at(25));
    }

    #[test]
    fn test_notifications_disabled() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();
        let mut timer = SessionTimer::new(
            "Thesis",
            settings(1, 1, 2).with_notifications(false),
            notifier,
            start(),
        );

        run_to_completion(&mut timer);
    }

    #[test]
    fn test_notification_failure_does_not_stop_timer() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .returning(|_, _| Err(crate::error::PomoError::Notification("no dbus".to_string())));
        let mut timer = SessionTimer::new("Thesis", settings(1, 1, 2), notifier, start());

        assert_eq!(timer.on_tick(at(1)).phase, Phase::Break);
        assert_eq!(timer.on_tick(at(2)).current_session, 2);
        run_to_completion(&mut timer);
        assert_eq!(timer.state(), TimerState::Completed);
    }

    #[test]
    fn test_clock_going_backwards_clamps_to_zero() {
        let mut timer = quiet_timer(settings(25, 5, 1));
        let snap = timer.on_tick(start() - Duration::minutes(3));
        assert_eq!(snap.percent_complete, 0.0);
        assert_eq!(snap.elapsed_seconds, 0);
    }
}
