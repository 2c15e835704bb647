//! Configuration validation

use crate::schema::RawConfig;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("storage.snapshot_key cannot be empty")]
    EmptySnapshotKey,

    #[error("storage.data_dir cannot be empty")]
    EmptyDataDir,

    #[error("logging.level cannot be empty")]
    EmptyLogLevel,
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(key) = &config.storage.snapshot_key
        && key.trim().is_empty()
    {
        errors.push(ValidationError::EmptySnapshotKey);
    }

    if let Some(dir) = &config.storage.data_dir
        && dir.as_os_str().is_empty()
    {
        errors.push(ValidationError::EmptyDataDir);
    }

    if let Some(level) = &config.logging.level
        && level.trim().is_empty()
    {
        errors.push(ValidationError::EmptyLogLevel);
    }

    errors
}
