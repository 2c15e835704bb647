//! Goal durations

use journey_util::JourneyError;
use std::fmt;
use std::str::FromStr;

/// Freeze allowance used when a duration label is not recognized
pub const FALLBACK_MAX_FREEZES: u32 = 2;

/// Length of a goal period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GoalDuration {
    #[default]
    Week,
    Month,
    Year,
}

impl GoalDuration {
    pub const ALL: [GoalDuration; 3] = [GoalDuration::Week, GoalDuration::Month, GoalDuration::Year];

    /// Stable label, also the persisted form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }

    /// Number of freezes allowed within one goal period
    pub fn max_freezes(&self) -> u32 {
        match self {
            Self::Week => 2,
            Self::Month => 8,
            Self::Year => 96,
        }
    }

    /// Calendar days after the start at which the goal counts as completed
    pub fn required_days(&self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }
}

impl fmt::Display for GoalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GoalDuration {
    type Err = JourneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Week" => Ok(Self::Week),
            "Month" => Ok(Self::Month),
            "Year" => Ok(Self::Year),
            other => Err(JourneyError::invalid_duration(other)),
        }
    }
}

/// Freeze allowance for a raw duration label, falling back to
/// [`FALLBACK_MAX_FREEZES`] for anything unrecognized.
pub fn max_freezes_for_label(label: &str) -> u32 {
    label
        .parse::<GoalDuration>()
        .map(|d| d.max_freezes())
        .unwrap_or(FALLBACK_MAX_FREEZES)
}
