//! Progress state: the learned/frozen calendar and everything derived from it

use chrono::{DateTime, Local, NaiveDate};
use journey_util::{AsCalendarDay, Clock, days_between, local_day, previous_day};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{DayClass, GoalDuration, TextClass};

/// Progress of a single user towards a single learning goal.
///
/// The date sets are the source of truth. `current_streak_count` and
/// `frozen_days_count` are derived from them and are fully recomputed
/// (never patched) by the mutators that can affect them.
#[derive(Debug, Clone)]
pub struct ProgressState {
    pub(crate) logged_dates: BTreeSet<NaiveDate>,
    pub(crate) frozen_dates: BTreeSet<NaiveDate>,
    pub(crate) current_streak_count: u32,
    pub(crate) frozen_days_count: u32,
    pub(crate) learning_topic: String,
    pub(crate) goal_duration: GoalDuration,
    pub(crate) goal_start_date: NaiveDate,
    pub(crate) simulated_date: Option<DateTime<Local>>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ProgressState {
    /// Fresh state before onboarding: no topic, a week-long goal starting today.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let today = clock.today();
        Self {
            logged_dates: BTreeSet::new(),
            frozen_dates: BTreeSet::new(),
            current_streak_count: 0,
            frozen_days_count: 0,
            learning_topic: String::new(),
            goal_duration: GoalDuration::default(),
            goal_start_date: today,
            simulated_date: None,
            clock,
        }
    }

    /// State for a newly chosen goal, starting today.
    pub fn with_goal(clock: Arc<dyn Clock>, topic: &str, duration: GoalDuration) -> Self {
        let mut state = Self::new(clock);
        state.learning_topic = topic.trim().to_string();
        state.goal_duration = duration;
        state
    }

    // Current date

    /// "Now" as seen by every day-dependent rule: the simulated date when
    /// one is set, the clock otherwise.
    pub fn current_date(&self) -> DateTime<Local> {
        self.simulated_date.unwrap_or_else(|| self.clock.now())
    }

    /// The local calendar day of [`current_date`](Self::current_date).
    pub fn today(&self) -> NaiveDate {
        local_day(&self.current_date())
    }

    // Accessors

    pub fn logged_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.logged_dates
    }

    pub fn frozen_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.frozen_dates
    }

    pub fn current_streak_count(&self) -> u32 {
        self.current_streak_count
    }

    pub fn frozen_days_count(&self) -> u32 {
        self.frozen_days_count
    }

    pub fn learning_topic(&self) -> &str {
        &self.learning_topic
    }

    pub fn goal_duration(&self) -> GoalDuration {
        self.goal_duration
    }

    pub fn goal_start_date(&self) -> NaiveDate {
        self.goal_start_date
    }

    pub fn simulated_date(&self) -> Option<DateTime<Local>> {
        self.simulated_date
    }

    pub fn is_simulating(&self) -> bool {
        self.simulated_date.is_some()
    }

    // Freeze quota and goal period

    pub fn max_freezes(&self) -> u32 {
        self.goal_duration.max_freezes()
    }

    pub fn has_freezes_remaining(&self) -> bool {
        self.frozen_days_count < self.max_freezes()
    }

    pub fn freezes_remaining(&self) -> u32 {
        self.max_freezes().saturating_sub(self.frozen_days_count)
    }

    /// Whole calendar days from the goal start to today.
    pub fn days_since_goal_start(&self) -> i64 {
        days_between(self.goal_start_date, self.today())
    }

    /// Days left before the goal period completes (0 once completed).
    pub fn days_remaining_in_goal(&self) -> i64 {
        (self.goal_duration.required_days() - self.days_since_goal_start()).max(0)
    }

    pub fn is_goal_completed(&self) -> bool {
        self.days_since_goal_start() >= self.goal_duration.required_days()
    }

    // Queries

    pub fn is_date_logged(&self, date: impl AsCalendarDay) -> bool {
        self.logged_dates.contains(&date.calendar_day())
    }

    pub fn is_date_frozen(&self, date: impl AsCalendarDay) -> bool {
        self.frozen_dates.contains(&date.calendar_day())
    }

    pub fn is_today_logged(&self) -> bool {
        self.is_date_logged(self.today())
    }

    pub fn is_today_frozen(&self) -> bool {
        self.is_date_frozen(self.today())
    }

    fn is_marked(&self, day: NaiveDate) -> bool {
        self.logged_dates.contains(&day) || self.frozen_dates.contains(&day)
    }

    /// Display classification of a calendar cell.
    ///
    /// Frozen is checked before learned, and "today" before past days.
    pub fn color_class_for(&self, date: impl AsCalendarDay) -> DayClass {
        let day = date.calendar_day();
        let is_today = day == self.today();

        if self.frozen_dates.contains(&day) {
            return if is_today { DayClass::FrozenToday } else { DayClass::FrozenPast };
        }

        if self.logged_dates.contains(&day) {
            return if is_today { DayClass::LearnedToday } else { DayClass::LearnedPast };
        }

        DayClass::Unmarked
    }

    /// Classification of the day number drawn inside a calendar cell.
    pub fn text_class_for(&self, date: impl AsCalendarDay) -> TextClass {
        let day = date.calendar_day();

        if day == self.today() {
            TextClass::Today
        } else if self.frozen_dates.contains(&day) {
            TextClass::FrozenPast
        } else if self.logged_dates.contains(&day) {
            TextClass::LearnedPast
        } else {
            TextClass::Plain
        }
    }

    /// Whether the chain broke: yesterday was neither learned nor frozen and
    /// today is not marked yet.
    ///
    /// The first two days of a goal are a grace period, and days on or before
    /// the goal start never count as misses. This only answers the question;
    /// the caller decides how to react.
    pub fn is_streak_broken(&self) -> bool {
        let today = self.today();
        let goal_start = self.goal_start_date;

        if days_between(goal_start, today) <= 1 {
            return false;
        }

        if self.is_marked(today) {
            return false;
        }

        let Some(yesterday) = previous_day(today) else {
            return false;
        };

        if yesterday <= goal_start {
            return false;
        }

        !self.is_marked(yesterday)
    }

    // User actions

    /// Mark today as learned. Returns `false` when today is already marked.
    pub fn log_today(&mut self) -> bool {
        let today = self.today();

        if self.is_marked(today) {
            debug!(day = %today, "Today already marked, log ignored");
            return false;
        }

        self.logged_dates.insert(today);
        self.update_streak_count();

        debug!(day = %today, streak = self.current_streak_count, "Logged today");
        true
    }

    /// Mark today as frozen, spending one freeze. Returns `false` when no
    /// freezes are left or today is already marked.
    pub fn freeze_today(&mut self) -> bool {
        let today = self.today();

        if !self.has_freezes_remaining() {
            debug!(
                day = %today,
                used = self.frozen_days_count,
                max = self.max_freezes(),
                "No freezes remaining, freeze ignored"
            );
            return false;
        }

        if self.is_marked(today) {
            debug!(day = %today, "Today already marked, freeze ignored");
            return false;
        }

        self.frozen_dates.insert(today);
        self.update_freeze_count();
        self.update_streak_count();

        debug!(
            day = %today,
            streak = self.current_streak_count,
            freezes_remaining = self.freezes_remaining(),
            "Froze today"
        );
        true
    }

    // Goal edits

    pub fn set_learning_topic(&mut self, topic: &str) {
        self.learning_topic = topic.trim().to_string();
    }

    pub fn set_goal_duration(&mut self, duration: GoalDuration) {
        self.goal_duration = duration;
    }

    /// Move the start of the goal period and re-derive both counters.
    pub fn set_goal_start(&mut self, day: NaiveDate) {
        self.goal_start_date = day;
        self.refresh();
    }

    /// Re-derive both counters against the current date.
    ///
    /// Time travel does not recompute on its own; call this after a jump when
    /// the counters must reflect the new "today".
    pub fn refresh(&mut self) {
        self.update_freeze_count();
        self.update_streak_count();
    }

    // Resets

    /// Zero both counters, keeping the calendar history.
    pub fn reset_streak(&mut self) {
        self.current_streak_count = 0;
        self.frozen_days_count = 0;
        debug!("Streak counters reset");
    }

    /// A goal was edited but not scrapped.
    pub fn reset_for_goal_update(&mut self) {
        self.reset_streak();
    }

    /// Prepare for a brand-new goal chosen mid-period.
    ///
    /// Only today's marks are removed so the day can be logged again under the
    /// new goal; earlier history stays. The caller sets the new goal start.
    pub fn reset_for_new_goal(&mut self) {
        let today = self.today();
        self.logged_dates.remove(&today);
        self.frozen_dates.remove(&today);
        self.current_streak_count = 0;
        self.frozen_days_count = 0;
        info!(day = %today, "Progress reset for a new goal");
    }

    /// Clear all history and counters.
    pub fn reset_streak_and_history(&mut self) {
        self.logged_dates.clear();
        self.frozen_dates.clear();
        self.current_streak_count = 0;
        self.frozen_days_count = 0;
        info!("Progress history cleared");
    }

    /// Start a new period of the same goal today, keeping history visible.
    ///
    /// Older marks stay in the date sets but fall before the new start, so
    /// they no longer count towards streak or freeze totals.
    pub fn reset_goal_keep_history(&mut self) {
        self.goal_start_date = self.today();
        self.current_streak_count = 0;
        self.frozen_days_count = 0;
        info!(start = %self.goal_start_date, "Goal period restarted");
    }

    // Time travel

    /// Pretend it is one calendar day later.
    pub fn advance_to_next_day(&mut self) {
        self.shift_simulated_date(1);
    }

    /// Pretend it is one calendar day earlier.
    pub fn go_to_previous_day(&mut self) {
        self.shift_simulated_date(-1);
    }

    /// Stop simulating and follow the clock again.
    pub fn reset_to_real_date(&mut self) {
        self.simulated_date = None;
        debug!("Simulated date cleared");
    }

    /// Pin "today" to the given calendar day, keeping the current time of day.
    pub fn simulate_day(&mut self, day: NaiveDate) {
        let base = self.current_date();
        let shift = days_between(local_day(&base), day);
        self.simulated_date = Some(base);
        if shift != 0 {
            self.shift_simulated_date(shift);
        }
    }

    fn shift_simulated_date(&mut self, days: i64) {
        let base = self.current_date();
        let delta = chrono::Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            base.checked_add_days(delta)
        } else {
            base.checked_sub_days(delta)
        };

        match shifted {
            Some(date) => {
                self.simulated_date = Some(date);
                debug!(today = %local_day(&date), "Simulated date moved");
            }
            None => warn!(days, "Simulated date cannot move outside the calendar range"),
        }
    }

    // Derived counters

    /// Count learned days walking back from today, stopping at the first day
    /// that is neither learned nor frozen or at the goal start. Frozen days
    /// keep the chain alive without adding to it.
    fn update_streak_count(&mut self) {
        let goal_start = self.goal_start_date;
        let mut streak = 0;
        let mut cursor = self.today();

        while cursor >= goal_start {
            let logged = self.logged_dates.contains(&cursor);
            if !logged && !self.frozen_dates.contains(&cursor) {
                break;
            }
            if logged {
                streak += 1;
            }
            match previous_day(cursor) {
                Some(day) => cursor = day,
                None => break,
            }
        }

        self.current_streak_count = streak;
    }

    /// Frozen days on or after the goal start.
    fn update_freeze_count(&mut self) {
        self.frozen_days_count = self.frozen_dates.range(self.goal_start_date..).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_util::{FixedClock, shift_days};

    fn d(offset: i64) -> NaiveDate {
        shift_days(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), offset).unwrap()
    }

    fn setup(duration: GoalDuration) -> (Arc<FixedClock>, ProgressState) {
        let clock = Arc::new(FixedClock::at_day(d(0)));
        let state = ProgressState::with_goal(clock.clone(), "Rust", duration);
        (clock, state)
    }

    /// Independent re-derivation of the streak walk
    fn expected_streak(state: &ProgressState) -> u32 {
        let mut streak = 0;
        let mut day = state.today();
        while day >= state.goal_start_date() {
            if state.logged_dates().contains(&day) {
                streak += 1;
            } else if !state.frozen_dates().contains(&day) {
                break;
            }
            day = day.pred_opt().unwrap();
        }
        streak
    }

    fn expected_freezes(state: &ProgressState) -> u32 {
        state
            .frozen_dates()
            .iter()
            .filter(|day| **day >= state.goal_start_date())
            .count() as u32
    }

    fn assert_invariants(state: &ProgressState) {
        assert!(state.logged_dates().is_disjoint(state.frozen_dates()));
        assert_eq!(state.frozen_days_count(), expected_freezes(state));
        assert_eq!(state.current_streak_count(), expected_streak(state));
    }

    #[test]
    fn test_new_state_starts_today_with_nothing_marked() {
        let clock = Arc::new(FixedClock::at_day(d(0)));
        let state = ProgressState::new(clock);

        assert_eq!(state.goal_start_date(), d(0));
        assert_eq!(state.goal_duration(), GoalDuration::Week);
        assert!(state.learning_topic().is_empty());
        assert!(!state.is_today_logged());
        assert!(!state.is_today_frozen());
        assert_eq!(state.freezes_remaining(), 2);
    }

    #[test]
    fn test_with_goal_trims_topic() {
        let clock = Arc::new(FixedClock::at_day(d(0)));
        let state = ProgressState::with_goal(clock, "  Swift  ", GoalDuration::Year);
        assert_eq!(state.learning_topic(), "Swift");
        assert_eq!(state.max_freezes(), 96);
    }

    #[test]
    fn test_log_today_is_idempotent() {
        let (_clock, mut state) = setup(GoalDuration::Week);

        assert!(state.log_today());
        assert!(!state.log_today());

        assert_eq!(state.logged_dates().len(), 1);
        assert_eq!(state.current_streak_count(), 1);
        assert_invariants(&state);
    }

    #[test]
    fn test_logging_consecutive_days_builds_streak() {
        let (clock, mut state) = setup(GoalDuration::Week);

        for _ in 0..3 {
            state.log_today();
            assert_invariants(&state);
            clock.advance_days(1);
        }

        clock.set_day(d(2));
        state.refresh();
        assert_eq!(state.current_streak_count(), 3);
    }

    #[test]
    fn test_gap_breaks_the_chain() {
        let (clock, mut state) = setup(GoalDuration::Month);

        state.log_today();
        clock.set_day(d(1));
        state.log_today();
        clock.set_day(d(3));
        state.log_today();

        assert_eq!(state.current_streak_count(), 1);
        assert_invariants(&state);
    }

    #[test]
    fn test_streak_does_not_cross_goal_start() {
        let (clock, mut state) = setup(GoalDuration::Month);

        state.log_today();
        clock.set_day(d(1));
        state.log_today();
        clock.set_day(d(2));
        state.set_goal_start(d(2));
        state.log_today();

        assert_eq!(state.current_streak_count(), 1);
        assert_invariants(&state);
    }

    #[test]
    fn test_marks_are_disjoint() {
        let (_clock, mut state) = setup(GoalDuration::Week);

        assert!(state.freeze_today());
        assert!(!state.log_today());
        assert!(state.is_today_frozen());
        assert!(!state.is_today_logged());

        let (_clock, mut state) = setup(GoalDuration::Week);
        assert!(state.log_today());
        assert!(!state.freeze_today());
        assert_eq!(state.frozen_days_count(), 0);
        assert_invariants(&state);
    }

    #[test]
    fn test_freeze_quota_is_enforced() {
        let (clock, mut state) = setup(GoalDuration::Week);

        assert!(state.freeze_today());
        clock.set_day(d(1));
        assert!(state.freeze_today());

        assert!(!state.has_freezes_remaining());
        assert_eq!(state.freezes_remaining(), 0);

        clock.set_day(d(2));
        assert!(!state.freeze_today());
        assert!(!state.is_today_frozen());
        assert_eq!(state.frozen_days_count(), 2);
        assert_eq!(state.freezes_remaining(), 0);
        assert_invariants(&state);
    }

    #[test]
    fn test_frozen_days_before_goal_start_do_not_use_quota() {
        let (clock, mut state) = setup(GoalDuration::Week);

        state.freeze_today();
        clock.set_day(d(1));
        state.freeze_today();
        clock.set_day(d(5));
        state.reset_goal_keep_history();
        state.refresh();

        assert_eq!(state.frozen_dates().len(), 2);
        assert_eq!(state.frozen_days_count(), 0);
        assert!(state.freeze_today());
        assert_eq!(state.frozen_days_count(), 1);
        assert_invariants(&state);
    }

    #[test]
    fn test_frozen_days_bridge_but_do_not_count() {
        let (clock, mut state) = setup(GoalDuration::Week);

        for offset in 0..3 {
            clock.set_day(d(offset));
            state.log_today();
        }
        clock.set_day(d(3));
        state.freeze_today();
        assert_eq!(state.current_streak_count(), 3);

        clock.set_day(d(4));
        state.refresh();
        assert_eq!(state.current_streak_count(), 0);

        state.freeze_today();
        assert_eq!(state.current_streak_count(), 3);
        assert_invariants(&state);
    }

    #[test]
    fn test_goal_completion_uses_calendar_days() {
        let (clock, state) = setup(GoalDuration::Month);

        clock.set_day(d(29));
        assert!(!state.is_goal_completed());
        assert_eq!(state.days_remaining_in_goal(), 1);

        clock.set_day(d(30));
        assert!(state.is_goal_completed());
        assert_eq!(state.days_remaining_in_goal(), 0);

        // Late evening of day 6 is still day 6
        clock.set(journey_util::start_of_day(d(6)) + chrono::Duration::minutes(23 * 60 + 59));
        let week = ProgressState {
            goal_duration: GoalDuration::Week,
            ..state.clone()
        };
        assert!(!week.is_goal_completed());
        clock.set_day(d(7));
        assert!(week.is_goal_completed());
        clock.set_day(d(365));
        let year = ProgressState {
            goal_duration: GoalDuration::Year,
            ..state
        };
        assert!(year.is_goal_completed());
    }

    #[test]
    fn test_streak_break_detection() {
        let (clock, mut state) = setup(GoalDuration::Week);

        // Grace period
        clock.set_day(d(1));
        assert!(!state.is_streak_broken());

        // Grace is over and nothing was marked yesterday
        clock.set_day(d(2));
        assert!(state.is_streak_broken());

        for offset in 0..3 {
            clock.set_day(d(offset));
            state.log_today();
        }

        clock.set_day(d(3));
        assert!(!state.is_streak_broken());

        clock.set_day(d(4));
        assert!(state.is_streak_broken());

        // Pure query
        assert_eq!(state.logged_dates().len(), 3);

        // Marking today makes it safe again
        state.log_today();
        assert!(!state.is_streak_broken());
    }

    #[test]
    fn test_frozen_yesterday_keeps_streak_safe() {
        let (clock, mut state) = setup(GoalDuration::Week);

        for offset in 0..3 {
            clock.set_day(d(offset));
            state.log_today();
        }
        clock.set_day(d(3));
        state.freeze_today();

        clock.set_day(d(4));
        assert!(!state.is_streak_broken());
    }

    #[test]
    fn test_reset_streak_keeps_history() {
        let (clock, mut state) = setup(GoalDuration::Week);
        state.log_today();
        clock.set_day(d(1));
        state.freeze_today();

        state.reset_for_goal_update();

        assert_eq!(state.current_streak_count(), 0);
        assert_eq!(state.frozen_days_count(), 0);
        assert_eq!(state.logged_dates().len(), 1);
        assert_eq!(state.frozen_dates().len(), 1);
    }

    #[test]
    fn test_reset_for_new_goal_only_clears_today() {
        let (clock, mut state) = setup(GoalDuration::Week);
        state.log_today();
        clock.set_day(d(1));
        state.freeze_today();
        clock.set_day(d(2));
        state.log_today();

        state.reset_for_new_goal();

        assert!(!state.is_today_logged());
        assert!(state.is_date_logged(d(0)));
        assert!(state.is_date_frozen(d(1)));
        assert_eq!(state.current_streak_count(), 0);
        assert_eq!(state.frozen_days_count(), 0);

        state.set_goal_start(d(2));
        assert!(state.log_today());
        assert_eq!(state.current_streak_count(), 1);
        assert_invariants(&state);
    }

    #[test]
    fn test_reset_streak_and_history_clears_everything_but_goal() {
        let (clock, mut state) = setup(GoalDuration::Month);
        state.log_today();
        clock.set_day(d(1));
        state.freeze_today();

        state.reset_streak_and_history();

        assert!(state.logged_dates().is_empty());
        assert!(state.frozen_dates().is_empty());
        assert_eq!(state.current_streak_count(), 0);
        assert_eq!(state.frozen_days_count(), 0);
        assert_eq!(state.learning_topic(), "Rust");
        assert_eq!(state.goal_duration(), GoalDuration::Month);
    }

    #[test]
    fn test_reset_goal_keep_history_restarts_today() {
        let (clock, mut state) = setup(GoalDuration::Week);
        for offset in 0..7 {
            clock.set_day(d(offset));
            state.log_today();
        }
        clock.set_day(d(7));
        assert!(state.is_goal_completed());

        state.reset_goal_keep_history();

        assert_eq!(state.goal_start_date(), d(7));
        assert!(!state.is_goal_completed());
        assert_eq!(state.current_streak_count(), 0);
        assert_eq!(state.logged_dates().len(), 7);

        state.log_today();
        assert_eq!(state.current_streak_count(), 1);
        assert_invariants(&state);
    }

    #[test]
    fn test_time_travel_shifts_simulated_date() {
        let (_clock, mut state) = setup(GoalDuration::Week);
        assert!(!state.is_simulating());

        state.advance_to_next_day();
        assert_eq!(state.today(), d(1));
        state.advance_to_next_day();
        assert_eq!(state.today(), d(2));
        state.go_to_previous_day();
        assert_eq!(state.today(), d(1));

        state.reset_to_real_date();
        assert_eq!(state.today(), d(0));

        state.go_to_previous_day();
        assert_eq!(state.today(), d(-1));

        state.simulate_day(d(40));
        assert_eq!(state.today(), d(40));
    }

    #[test]
    fn test_time_travel_does_not_recompute() {
        let (_clock, mut state) = setup(GoalDuration::Week);
        state.log_today();

        state.advance_to_next_day();
        state.advance_to_next_day();
        assert_eq!(state.current_streak_count(), 1);

        state.refresh();
        assert_eq!(state.current_streak_count(), 0);
    }

    #[test]
    fn test_color_classification() {
        let (clock, mut state) = setup(GoalDuration::Week);
        state.log_today();
        clock.set_day(d(1));
        state.freeze_today();
        clock.set_day(d(2));
        state.log_today();

        assert_eq!(state.color_class_for(d(0)), DayClass::LearnedPast);
        assert_eq!(state.color_class_for(d(1)), DayClass::FrozenPast);
        assert_eq!(state.color_class_for(d(2)), DayClass::LearnedToday);
        assert_eq!(state.color_class_for(d(3)), DayClass::Unmarked);
        assert_eq!(state.color_class_for(state.current_date()), DayClass::LearnedToday);

        state.reset_for_new_goal();
        state.freeze_today();
        assert_eq!(state.color_class_for(d(2)), DayClass::FrozenToday);

        assert_eq!(state.text_class_for(d(2)), TextClass::Today);
        assert_eq!(state.text_class_for(d(1)), TextClass::FrozenPast);
        assert_eq!(state.text_class_for(d(0)), TextClass::LearnedPast);
        assert_eq!(state.text_class_for(d(5)), TextClass::Plain);
    }

    #[test]
    fn test_invariants_hold_across_mixed_actions() {
        let (clock, mut state) = setup(GoalDuration::Month);

        // log, log, freeze, skip, log, freeze, freeze, skip, skip, log ...
        let plan = [1, 1, 2, 0, 1, 2, 2, 0, 0, 1, 1, 2, 1, 0, 1];
        for (offset, action) in plan.iter().enumerate() {
            clock.set_day(d(offset as i64));
            match action {
                1 => {
                    state.log_today();
                }
                2 => {
                    state.freeze_today();
                }
                _ => state.refresh(),
            }
            assert_invariants(&state);
            assert!(state.freezes_remaining() <= state.max_freezes());
        }
    }

    #[test]
    fn test_streak_walk_stops_at_earliest_calendar_day() {
        let first = NaiveDate::MIN;
        let clock = Arc::new(FixedClock::at_day(first));
        let mut state = ProgressState::with_goal(clock.clone(), "Rust", GoalDuration::Week);
        assert_eq!(state.goal_start_date(), first);

        assert!(state.log_today());
        assert_eq!(state.current_streak_count(), 1);

        clock.set_day(first.succ_opt().unwrap());
        assert!(state.log_today());
        assert_eq!(state.current_streak_count(), 2);
        assert!(!state.is_streak_broken());

        state.refresh();
        assert_eq!(state.current_streak_count(), 2);
    }
}
