//! Resolved settings (validated, with defaults applied)

use journey_core::SNAPSHOT_KEY;
use journey_util::{database_path, default_data_dir};
use std::path::PathBuf;

use crate::schema::{RawConfig, RawStorageBackend};

/// Default log filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where progress is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// SQLite database in the data directory
    #[default]
    Sqlite,

    /// Process memory; nothing is kept between runs
    Memory,
}

/// Validated settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub snapshot_key: String,
    pub log_level: String,
}

impl Settings {
    /// Convert from a raw config (assumes validation passed)
    pub fn from_raw(raw: RawConfig) -> Self {
        let backend = match raw.storage.backend {
            Some(RawStorageBackend::Memory) => StorageBackend::Memory,
            Some(RawStorageBackend::Sqlite) | None => StorageBackend::Sqlite,
        };

        Self {
            backend,
            data_dir: raw.storage.data_dir.unwrap_or_else(default_data_dir),
            snapshot_key: raw
                .storage
                .snapshot_key
                .map(|k| k.trim().to_string())
                .unwrap_or_else(|| SNAPSHOT_KEY.to_string()),
            log_level: raw
                .logging
                .level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// SQLite database file for this configuration
    pub fn database_path(&self) -> PathBuf {
        database_path(&self.data_dir)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            snapshot_key: SNAPSHOT_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
