//! journey: a learning-habit tracker
//!
//! Ties the progress model to its storage:
//! - [`ProgressSession`] applies actions, saves them and notifies observers
//! - [`open_gateway`] builds the persistence gateway described by the settings
//! - [`report`] renders progress as plain text

pub mod report;
mod session;

pub use session::*;

use journey_config::{Settings, StorageBackend};
use journey_store::{KeyValueStore, MemoryStore, PersistenceGateway, SqliteStore, StoreResult};
use std::sync::Arc;
use tracing::info;

/// Open the configured backing store and wrap it in a gateway.
pub fn open_gateway(settings: &Settings) -> StoreResult<PersistenceGateway> {
    let store: Arc<dyn KeyValueStore> = match settings.backend {
        StorageBackend::Sqlite => {
            let path = settings.database_path();
            info!(path = %path.display(), "Opening progress database");
            Arc::new(SqliteStore::open(&path)?)
        }
        StorageBackend::Memory => {
            info!("Using in-memory progress store; nothing is kept after exit");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(PersistenceGateway::with_key(store, settings.snapshot_key.clone()))
}
