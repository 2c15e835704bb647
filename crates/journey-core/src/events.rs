//! Change notifications emitted after progress mutations

use chrono::NaiveDate;

use crate::GoalDuration;

/// Events published to observers of a progress session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Today was marked as learned
    Logged { day: NaiveDate, streak: u32 },

    /// Today was frozen
    Frozen {
        day: NaiveDate,
        streak: u32,
        freezes_remaining: u32,
    },

    /// A goal was set or edited
    GoalUpdated {
        topic: String,
        duration: GoalDuration,
        start: NaiveDate,
    },

    /// The same goal was started again, history kept
    GoalRenewed { start: NaiveDate },

    /// Counters were zeroed, history kept
    StreakReset,

    /// All history was cleared
    HistoryCleared,

    /// Yesterday was missed
    StreakBroken { today: NaiveDate },

    /// The simulated "today" moved
    DateChanged { today: NaiveDate, simulated: bool },
}
