//! Progress gateway: snapshot encoding and storage under a versioned key

use journey_core::{ProgressSnapshot, ProgressState, SNAPSHOT_KEY, SnapshotError};
use journey_util::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{KeyValueStore, StoreResult};

/// Result of a save attempt. Saving never fails loudly; callers that care
/// can inspect the outcome, everyone else can ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Snapshot written
    Saved,

    /// Snapshot failed validation; storage left untouched
    Rejected(Vec<SnapshotError>),

    /// The backing store could not be written; not retried
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Encode a snapshot as JSON bytes
pub fn encode_snapshot(snapshot: &ProgressSnapshot) -> StoreResult<Vec<u8>> {
    Ok(serde_json::to_vec(snapshot)?)
}

/// Decode JSON bytes into a snapshot
pub fn decode_snapshot(bytes: &[u8]) -> StoreResult<ProgressSnapshot> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Moves progress state in and out of a key-value store.
pub struct PersistenceGateway {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl PersistenceGateway {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, SNAPSHOT_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Validate and write a snapshot of `state`.
    pub fn save(&self, state: &ProgressState) -> SaveOutcome {
        let snapshot = state.snapshot();

        let errors = snapshot.validate();
        if !errors.is_empty() {
            debug!(key = %self.key, ?errors, "Snapshot rejected, not saved");
            return SaveOutcome::Rejected(errors);
        }

        let result = encode_snapshot(&snapshot).and_then(|bytes| self.store.set(&self.key, &bytes));
        match result {
            Ok(()) => {
                debug!(
                    key = %self.key,
                    logged = snapshot.logged_dates.len(),
                    frozen = snapshot.frozen_dates.len(),
                    "Progress saved"
                );
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to save progress");
                SaveOutcome::Failed(e.to_string())
            }
        }
    }

    /// Read back a usable state, or `None` when nothing usable is stored.
    ///
    /// Missing, undecodable and invalid snapshots are all treated as "no
    /// saved progress".
    pub fn load(&self, clock: Arc<dyn Clock>) -> Option<ProgressState> {
        let bytes = match self.store.get(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!(key = %self.key, "No saved progress");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read saved progress");
                return None;
            }
        };

        let snapshot = match decode_snapshot(&bytes) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Saved progress is not decodable");
                return None;
            }
        };

        match ProgressState::from_snapshot(snapshot, clock) {
            Ok(state) => {
                debug!(key = %self.key, topic = %state.learning_topic(), "Progress loaded");
                Some(state)
            }
            Err(errors) => {
                warn!(key = %self.key, ?errors, "Saved progress failed validation");
                None
            }
        }
    }

    /// Remove saved progress.
    pub fn clear(&self) {
        match self.store.remove(&self.key) {
            Ok(()) => debug!(key = %self.key, "Saved progress cleared"),
            Err(e) => warn!(key = %self.key, error = %e, "Failed to clear saved progress"),
        }
    }
}
