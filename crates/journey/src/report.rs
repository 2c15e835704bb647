//! Plain-text rendering of progress for the terminal

use chrono::{Datelike, NaiveDate};
use journey_core::{DayClass, ProgressState, TextClass, month_days};
use journey_util::format_day;
use std::fmt::Write;

const WEEKDAY_HEADER: &str = " Mo   Tu   We   Th   Fr   Sa   Su";

/// Cell marker for a day's highlight
fn marker(class: DayClass) -> char {
    match class {
        DayClass::LearnedToday => 'L',
        DayClass::LearnedPast => 'l',
        DayClass::FrozenToday => 'F',
        DayClass::FrozenPast => 'f',
        DayClass::Unmarked => ' ',
    }
}

/// Summary of the goal, streak, freezes and today's mark.
pub fn status_report(state: &ProgressState) -> String {
    let mut out = String::new();
    let today = state.today();

    let _ = writeln!(
        out,
        "Learning {} ({} goal, started {})",
        state.learning_topic(),
        state.goal_duration(),
        format_day(state.goal_start_date())
    );

    let simulated = if state.is_simulating() { " (simulated)" } else { "" };
    let _ = writeln!(out, "Today: {}{}", format_day(today), simulated);
    let _ = writeln!(out, "Streak: {} day(s)", state.current_streak_count());
    let _ = writeln!(
        out,
        "Freezes: {} used, {} of {} remaining",
        state.frozen_days_count(),
        state.freezes_remaining(),
        state.max_freezes()
    );

    if state.is_goal_completed() {
        let _ = writeln!(out, "Goal: completed");
    } else {
        let _ = writeln!(
            out,
            "Goal: day {} of {}, {} day(s) remaining",
            state.days_since_goal_start() + 1,
            state.goal_duration().required_days(),
            state.days_remaining_in_goal()
        );
    }

    let today_line = if state.is_today_logged() {
        "Marked today: learned"
    } else if state.is_today_frozen() {
        "Marked today: frozen"
    } else {
        "Marked today: nothing yet"
    };
    let _ = writeln!(out, "{}", today_line);

    if state.is_streak_broken() {
        let _ = writeln!(out, "Yesterday was missed; your streak is broken.");
    }

    out
}

/// Month grid for the month containing `day`, weeks starting on Monday.
///
/// Today's number is prefixed with `>`; each number is followed by its
/// marker: `L`/`l` learned, `F`/`f` frozen (uppercase for today).
pub fn calendar_report(state: &ProgressState, day: NaiveDate) -> String {
    let days = month_days(day);
    let Some(first) = days.first() else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", first.format("%B %Y"));
    let _ = writeln!(out, "{}", WEEKDAY_HEADER);

    let lead = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<String> = vec!["    ".to_string(); lead];
    cells.extend(days.iter().map(|d| {
        let prefix = match state.text_class_for(d) {
            TextClass::Today => '>',
            _ => ' ',
        };
        format!("{}{:>2}{}", prefix, d.day(), marker(state.color_class_for(d)))
    }));

    for week in cells.chunks(7) {
        let _ = writeln!(out, "{}", week.join(" ").trim_end());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_core::GoalDuration;
    use journey_util::FixedClock;
    use std::sync::Arc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
    }

    fn tracked() -> ProgressState {
        // 2025-09-01 is a Monday
        let clock = Arc::new(FixedClock::at_day(day(1)));
        let mut state = ProgressState::with_goal(clock.clone(), "Rust", GoalDuration::Week);
        state.log_today();
        clock.set_day(day(2));
        state.freeze_today();
        clock.set_day(day(3));
        state.log_today();
        state
    }

    #[test]
    fn test_status_mentions_goal_and_counters() {
        let report = status_report(&tracked());

        assert!(report.contains("Learning Rust (Week goal, started 2025-09-01)"));
        assert!(report.contains("Today: 2025-09-03\n"));
        assert!(report.contains("Streak: 2 day(s)"));
        assert!(report.contains("Freezes: 1 used, 1 of 2 remaining"));
        assert!(report.contains("Goal: day 3 of 7, 5 day(s) remaining"));
        assert!(report.contains("Marked today: learned"));
        assert!(!report.contains("broken"));
    }

    #[test]
    fn test_status_flags_simulation_and_broken_streak() {
        let mut state = tracked();
        state.advance_to_next_day();
        state.advance_to_next_day();

        let report = status_report(&state);
        assert!(report.contains("Today: 2025-09-05 (simulated)"));
        assert!(report.contains("Marked today: nothing yet"));
        assert!(report.contains("streak is broken"));
    }

    #[test]
    fn test_calendar_marks_days() {
        let report = calendar_report(&tracked(), day(15));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "September 2025");
        assert_eq!(lines[1], WEEKDAY_HEADER);
        assert!(lines[2].starts_with("  1l   2f > 3L   4 "));
        // 30 days starting Monday span five weeks
        assert_eq!(lines.len(), 2 + 5);
    }

    #[test]
    fn test_calendar_pads_first_week() {
        // 2025-10-01 is a Wednesday
        let report = calendar_report(&tracked(), NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        let first_week = report.lines().nth(2).unwrap();

        assert!(first_week.starts_with(&format!("{}1 ", " ".repeat(12))));
    }
}
