//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Where progress is kept
    #[serde(default)]
    pub storage: RawStorageConfig,

    /// Log output
    #[serde(default)]
    pub logging: RawLoggingConfig,
}

/// Storage settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawStorageConfig {
    /// Storage backend (default: sqlite)
    pub backend: Option<RawStorageBackend>,

    /// Data directory for the database (default: $XDG_DATA_HOME/journey)
    pub data_dir: Option<PathBuf>,

    /// Key the progress snapshot is stored under
    pub snapshot_key: Option<String>,
}

/// Raw storage backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RawStorageBackend {
    Sqlite,
    Memory,
}

/// Logging settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawLoggingConfig {
    /// Default filter directive, e.g. "info" or "journey_store=debug"
    pub level: Option<String>,
}
