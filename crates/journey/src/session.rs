//! Progress session: applies user actions, saves eagerly, notifies observers

use chrono::NaiveDate;
use journey_core::{GoalDuration, ProgressEvent, ProgressState};
use journey_store::{PersistenceGateway, SaveOutcome};
use journey_util::{Clock, JourneyError};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, info};

/// Trim a topic and reject it when nothing is left.
pub fn validate_topic(topic: &str) -> Result<&str, JourneyError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(JourneyError::EmptyTopic);
    }
    Ok(topic)
}

/// The live progress of the user plus where it is saved.
///
/// Every action that changes the state is saved right away and then
/// published to subscribers.
pub struct ProgressSession {
    state: ProgressState,
    gateway: PersistenceGateway,
    subscribers: Vec<Sender<ProgressEvent>>,
}

impl ProgressSession {
    /// Onboarding: start tracking a new goal today.
    pub fn start(
        gateway: PersistenceGateway,
        clock: Arc<dyn Clock>,
        topic: &str,
        duration: GoalDuration,
    ) -> Result<Self, JourneyError> {
        let topic = validate_topic(topic)?;
        let state = ProgressState::with_goal(clock, topic, duration);

        info!(
            topic = %state.learning_topic(),
            duration = %duration,
            start = %state.goal_start_date(),
            "Goal started"
        );

        let session = Self::from_state(state, gateway);
        session.persist();
        Ok(session)
    }

    /// Pick up saved progress, with counters re-derived against today.
    pub fn resume(gateway: PersistenceGateway, clock: Arc<dyn Clock>) -> Option<Self> {
        let mut state = gateway.load(clock)?;
        state.refresh();
        Some(Self::from_state(state, gateway))
    }

    pub fn from_state(state: ProgressState, gateway: PersistenceGateway) -> Self {
        Self {
            state,
            gateway,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn gateway(&self) -> &PersistenceGateway {
        &self.gateway
    }

    /// Receive every event published from now on.
    pub fn subscribe(&mut self) -> Receiver<ProgressEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self, event: ProgressEvent) {
        debug!(?event, subscribers = self.subscribers.len(), "Publishing progress event");
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Save the current state, e.g. when the host is about to go away.
    pub fn persist(&self) -> SaveOutcome {
        self.gateway.save(&self.state)
    }

    /// Remove saved progress. The in-memory state is untouched.
    pub fn clear_saved(&self) {
        self.gateway.clear();
    }

    pub fn log_today(&mut self) -> bool {
        if !self.state.log_today() {
            return false;
        }

        self.persist();
        self.publish(ProgressEvent::Logged {
            day: self.state.today(),
            streak: self.state.current_streak_count(),
        });
        true
    }

    pub fn freeze_today(&mut self) -> bool {
        if !self.state.freeze_today() {
            return false;
        }

        self.persist();
        self.publish(ProgressEvent::Frozen {
            day: self.state.today(),
            streak: self.state.current_streak_count(),
            freezes_remaining: self.state.freezes_remaining(),
        });
        true
    }

    /// Repeat the same goal from today, keeping history.
    pub fn reset_goal_keep_history(&mut self) {
        self.state.reset_goal_keep_history();
        self.persist();
        self.publish(ProgressEvent::GoalRenewed {
            start: self.state.goal_start_date(),
        });
    }

    /// Set a new topic and duration.
    ///
    /// Changing course mid-period (`updating_midway`) also drops today's mark
    /// so today can be logged under the new goal. The new period starts on
    /// `start`, or today when not given.
    pub fn update_goal(
        &mut self,
        topic: &str,
        duration: GoalDuration,
        updating_midway: bool,
        start: Option<NaiveDate>,
    ) -> Result<(), JourneyError> {
        let topic = validate_topic(topic)?;

        self.state.set_learning_topic(topic);
        self.state.set_goal_duration(duration);

        if updating_midway {
            self.state.reset_for_new_goal();
        } else {
            self.state.reset_for_goal_update();
        }

        let start = start.unwrap_or_else(|| self.state.today());
        self.state.set_goal_start(start);

        info!(topic, duration = %duration, start = %start, updating_midway, "Goal updated");

        self.persist();
        self.publish(ProgressEvent::GoalUpdated {
            topic: topic.to_string(),
            duration,
            start,
        });
        Ok(())
    }

    /// Zero the counters, keeping history.
    pub fn reset_streak(&mut self) {
        self.state.reset_streak();
        self.persist();
        self.publish(ProgressEvent::StreakReset);
    }

    /// Clear all history and counters.
    pub fn reset_streak_and_history(&mut self) {
        self.state.reset_streak_and_history();
        self.persist();
        self.publish(ProgressEvent::HistoryCleared);
    }

    /// Report whether yesterday was missed. Nothing is reset here.
    pub fn check_streak(&mut self) -> bool {
        let broken = self.state.is_streak_broken();
        if broken {
            info!(today = %self.state.today(), "Streak broken");
            self.publish(ProgressEvent::StreakBroken {
                today: self.state.today(),
            });
        }
        broken
    }

    pub fn advance_to_next_day(&mut self) {
        self.state.advance_to_next_day();
        self.date_changed();
    }

    pub fn go_to_previous_day(&mut self) {
        self.state.go_to_previous_day();
        self.date_changed();
    }

    pub fn reset_to_real_date(&mut self) {
        self.state.reset_to_real_date();
        self.date_changed();
    }

    pub fn simulate_day(&mut self, day: NaiveDate) {
        self.state.simulate_day(day);
        self.date_changed();
    }

    fn date_changed(&mut self) {
        self.state.refresh();
        self.publish(ProgressEvent::DateChanged {
            today: self.state.today(),
            simulated: self.state.is_simulating(),
        });
    }
}
