//! Persisted snapshot of a progress state and its validation

use chrono::{DateTime, Local};
use journey_util::{Clock, local_day, start_of_day};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

use crate::{GoalDuration, ProgressState};

/// Storage key for snapshots of this shape
pub const SNAPSHOT_KEY: &str = "progress.snapshot.v1";

/// Serializable copy of a [`ProgressState`].
///
/// Dates are local midnights written as RFC 3339 timestamps. The duration is
/// kept as its raw label so that an unknown value is a validation failure
/// rather than a decode failure. Every field is required and unknown fields
/// are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProgressSnapshot {
    pub logged_dates: Vec<DateTime<Local>>,
    pub frozen_dates: Vec<DateTime<Local>>,
    pub current_streak_count: u32,
    pub frozen_days_count: u32,
    pub learning_topic: String,
    pub goal_duration: String,
    pub goal_start_date: DateTime<Local>,
}

/// Reasons a snapshot is not usable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("learning topic is empty")]
    EmptyTopic,

    #[error("unknown goal duration '{0}'")]
    UnknownDuration(String),

    #[error("{0} is marked both learned and frozen")]
    OverlappingDay(String),
}

impl ProgressSnapshot {
    /// All problems with this snapshot; empty when it can be used.
    pub fn validate(&self) -> Vec<SnapshotError> {
        let mut errors = Vec::new();

        if self.learning_topic.trim().is_empty() {
            errors.push(SnapshotError::EmptyTopic);
        }

        if self.goal_duration.parse::<GoalDuration>().is_err() {
            errors.push(SnapshotError::UnknownDuration(self.goal_duration.clone()));
        }

        let logged: BTreeSet<_> = self.logged_dates.iter().map(local_day).collect();
        let overlap = self
            .frozen_dates
            .iter()
            .map(local_day)
            .filter(|day| logged.contains(day))
            .collect::<BTreeSet<_>>();
        errors.extend(
            overlap
                .into_iter()
                .map(|day| SnapshotError::OverlappingDay(journey_util::format_day(day))),
        );

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl ProgressState {
    /// Take a serializable copy; date sets become ordered lists.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            logged_dates: self.logged_dates.iter().copied().map(start_of_day).collect(),
            frozen_dates: self.frozen_dates.iter().copied().map(start_of_day).collect(),
            current_streak_count: self.current_streak_count,
            frozen_days_count: self.frozen_days_count,
            learning_topic: self.learning_topic.clone(),
            goal_duration: self.goal_duration.label().to_string(),
            goal_start_date: start_of_day(self.goal_start_date),
        }
    }

    /// Rebuild a live state from a snapshot.
    ///
    /// Counters and goal metadata are copied as stored; they are not
    /// re-derived until the next mutation or [`refresh`](Self::refresh).
    pub fn from_snapshot(
        snapshot: ProgressSnapshot,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, Vec<SnapshotError>> {
        let errors = snapshot.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let goal_duration = snapshot
            .goal_duration
            .parse::<GoalDuration>()
            .map_err(|_| vec![SnapshotError::UnknownDuration(snapshot.goal_duration.clone())])?;

        Ok(Self {
            logged_dates: snapshot.logged_dates.iter().map(local_day).collect(),
            frozen_dates: snapshot.frozen_dates.iter().map(local_day).collect(),
            current_streak_count: snapshot.current_streak_count,
            frozen_days_count: snapshot.frozen_days_count,
            learning_topic: snapshot.learning_topic,
            goal_duration,
            goal_start_date: local_day(&snapshot.goal_start_date),
            simulated_date: None,
            clock,
        })
    }
}
