//! Time utilities for journey
//!
//! All "what day is it" logic goes through a [`Clock`]. Production code uses
//! [`SystemClock`]; tests inject a [`FixedClock`] so that streak and goal
//! arithmetic is deterministic.
//!
//! Days are compared on the local calendar: a calendar day is a
//! [`NaiveDate`] obtained from a local timestamp, and day distances are
//! counted in whole calendar days rather than elapsed 24h periods.
//!
//! # Mock Time for Development
//!
//! In debug builds, the `JOURNEY_MOCK_TIME` environment variable can be set
//! to override the system time seen by [`SystemClock`]. The mocked clock keeps
//! ticking at the real rate from the given starting point.
//!
//! Format: `YYYY-MM-DD HH:MM:SS` (e.g., `2025-12-25 14:30:00`)
//!
//! Example:
//! ```bash
//! JOURNEY_MOCK_TIME="2025-12-25 14:30:00" journey status
//! ```

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt;
use std::sync::{Mutex, OnceLock};

use crate::JourneyError;

/// Environment variable name for mock time (debug builds only)
pub const MOCK_TIME_ENV_VAR: &str = "JOURNEY_MOCK_TIME";

/// Accepted format for `JOURNEY_MOCK_TIME`
pub const MOCK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used for calendar days in text (CLI input, display)
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Cached mock time offset from the real time when the process started.
static MOCK_TIME_OFFSET: OnceLock<Option<chrono::Duration>> = OnceLock::new();

#[allow(clippy::disallowed_methods)] // This is the internal implementation that wraps Local::now()
fn get_mock_time_offset() -> Option<chrono::Duration> {
    *MOCK_TIME_OFFSET.get_or_init(|| {
        #[cfg(debug_assertions)]
        {
            if let Ok(mock_time_str) = std::env::var(MOCK_TIME_ENV_VAR) {
                if let Ok(naive_dt) = NaiveDateTime::parse_from_str(&mock_time_str, MOCK_TIME_FORMAT) {
                    if let Some(mock_dt) = Local.from_local_datetime(&naive_dt).earliest() {
                        let offset = mock_dt.signed_duration_since(chrono::Local::now());
                        tracing::info!(
                            mock_time = %mock_time_str,
                            offset_secs = offset.num_seconds(),
                            "Mock time enabled"
                        );
                        return Some(offset);
                    }
                    tracing::warn!(
                        mock_time = %mock_time_str,
                        "Failed to convert mock time to local timezone"
                    );
                } else {
                    tracing::warn!(
                        mock_time = %mock_time_str,
                        expected_format = MOCK_TIME_FORMAT,
                        "Invalid mock time format"
                    );
                }
            }
            None
        }
        #[cfg(not(debug_assertions))]
        {
            None
        }
    })
}

/// Returns whether mock time is currently active.
pub fn is_mock_time_active() -> bool {
    get_mock_time_offset().is_some()
}

/// Get the current local time, respecting mock time settings in debug builds.
#[allow(clippy::disallowed_methods)] // This is the wrapper that provides mock time support
pub fn now() -> DateTime<Local> {
    let real_now = chrono::Local::now();

    match get_mock_time_offset() {
        Some(offset) => real_now + offset,
        None => real_now,
    }
}

/// Source of "now" for everything that depends on the current day.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current local time
    fn now(&self) -> DateTime<Local>;

    /// Current local calendar day
    fn today(&self) -> NaiveDate {
        local_day(&self.now())
    }
}

/// Real wall-clock time (with `JOURNEY_MOCK_TIME` support in debug builds)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self { now: Mutex::new(at) }
    }

    /// A clock reading midday on the given local calendar day.
    ///
    /// Midday keeps day arithmetic clear of DST transitions, which happen
    /// around midnight in most zones.
    pub fn at_day(day: NaiveDate) -> Self {
        Self::new(start_of_day(day) + chrono::Duration::hours(12))
    }

    pub fn set(&self, at: DateTime<Local>) {
        match self.now.lock() {
            Ok(mut now) => *now = at,
            Err(poisoned) => *poisoned.into_inner() = at,
        }
    }

    pub fn set_day(&self, day: NaiveDate) {
        self.set(start_of_day(day) + chrono::Duration::hours(12));
    }

    pub fn advance(&self, by: chrono::Duration) {
        let at = self.now() + by;
        self.set(at);
    }

    pub fn advance_days(&self, days: i64) {
        match shift_days(self.today(), days) {
            Some(day) => self.set_day(day),
            None => tracing::warn!(days, "Fixed clock cannot move outside the calendar range"),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Anything that can be reduced to a local calendar day.
pub trait AsCalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl AsCalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl AsCalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl AsCalendarDay for DateTime<Local> {
    fn calendar_day(&self) -> NaiveDate {
        local_day(self)
    }
}

impl<T: AsCalendarDay + ?Sized> AsCalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// The local calendar day containing `dt`.
pub fn local_day(dt: &DateTime<Local>) -> NaiveDate {
    dt.date_naive()
}

/// The first instant of `day` on the local calendar.
///
/// When local midnight does not exist (a DST gap at 00:00) the first instant
/// after the gap is used; when it is ambiguous the earlier reading wins.
pub fn start_of_day(day: NaiveDate) -> DateTime<Local> {
    let midnight = day.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(midnight + chrono::Duration::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| Local.from_utc_datetime(&midnight))
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// The calendar day before `day`, or `None` at the start of the representable range.
pub fn previous_day(day: NaiveDate) -> Option<NaiveDate> {
    day.pred_opt()
}

/// The calendar day after `day`, or `None` at the end of the representable range.
pub fn next_day(day: NaiveDate) -> Option<NaiveDate> {
    day.succ_opt()
}

/// Move `day` by a signed number of calendar days.
pub fn shift_days(day: NaiveDate, days: i64) -> Option<NaiveDate> {
    let delta = chrono::Days::new(days.unsigned_abs());
    if days >= 0 {
        day.checked_add_days(delta)
    } else {
        day.checked_sub_days(delta)
    }
}

/// Format a calendar day as `YYYY-MM-DD`.
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` calendar day.
pub fn parse_day(value: &str) -> Result<NaiveDate, JourneyError> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT).map_err(|_| JourneyError::InvalidDate {
        value: value.to_string(),
        expected: "YYYY-MM-DD",
    })
}
