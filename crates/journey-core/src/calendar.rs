//! Calendar day classification for display

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a calendar cell is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayClass {
    FrozenToday,
    FrozenPast,
    LearnedToday,
    LearnedPast,
    #[serde(rename = "none")]
    Unmarked,
}

impl DayClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrozenToday => "frozen-today",
            Self::FrozenPast => "frozen-past",
            Self::LearnedToday => "learned-today",
            Self::LearnedPast => "learned-past",
            Self::Unmarked => "none",
        }
    }

    pub fn is_marked(&self) -> bool {
        !matches!(self, Self::Unmarked)
    }
}

/// How the day number inside a calendar cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextClass {
    Today,
    FrozenPast,
    LearnedPast,
    Plain,
}

impl TextClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::FrozenPast => "frozen-past",
            Self::LearnedPast => "learned-past",
            Self::Plain => "plain",
        }
    }
}

/// Every day of the month containing `day`, in order.
pub fn month_days(day: NaiveDate) -> Vec<NaiveDate> {
    let Some(first) = day.with_day(1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == first.month() && d.year() == first.year())
        .collect()
}
