//! Configuration parsing and validation for journey
//!
//! Supports TOML configuration with:
//! - Versioned schema
//! - Storage backend, data directory and snapshot key
//! - Default log level
//! - Validation with clear error messages

mod schema;
mod settings;
mod validation;

pub use schema::*;
pub use settings::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Current supported config version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Load and validate configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Settings> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Like [`load_config`], but a missing file yields the defaults
pub fn load_config_or_default(path: impl AsRef<Path>) -> ConfigResult<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Settings::default());
    }
    load_config(path)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<Settings> {
    let raw: RawConfig = toml::from_str(content)?;

    // Check version
    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    // Validate
    let errors = validate_config(&raw);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationFailed { errors });
    }

    Ok(Settings::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_minimal_config() {
        let settings = parse_config("config_version = 1").unwrap();
        assert_eq!(settings.backend, StorageBackend::Sqlite);
        assert_eq!(settings.snapshot_key, "progress.snapshot.v1");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_parse_full_config() {
        let config = r#"
            config_version = 1

            [storage]
            backend = "memory"
            data_dir = "/var/lib/journey"
            snapshot_key = "progress.snapshot.test"

            [logging]
            level = "journey_store=debug"
        "#;

        let settings = parse_config(config).unwrap();
        assert_eq!(settings.backend, StorageBackend::Memory);
        assert_eq!(settings.data_dir, PathBuf::from("/var/lib/journey"));
        assert_eq!(
            settings.database_path(),
            PathBuf::from("/var/lib/journey/journey.db")
        );
        assert_eq!(settings.snapshot_key, "progress.snapshot.test");
        assert_eq!(settings.log_level, "journey_store=debug");
    }

    #[test]
    fn test_reject_wrong_version() {
        let result = parse_config("config_version = 99");
        assert!(matches!(result, Err(ConfigError::UnsupportedVersion(99))));
    }

    #[test]
    fn test_reject_unknown_backend_and_fields() {
        let backend = "config_version = 1\n[storage]\nbackend = \"postgres\"";
        assert!(matches!(parse_config(backend), Err(ConfigError::ParseError(_))));

        let field = "config_version = 1\n[storage]\npath = \"/tmp\"";
        assert!(matches!(parse_config(field), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_reject_blank_snapshot_key() {
        let config = "config_version = 1\n[storage]\nsnapshot_key = \"\"";
        assert!(matches!(
            parse_config(config),
            Err(ConfigError::ValidationFailed { errors }) if errors == vec![ValidationError::EmptySnapshotKey]
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_config_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.snapshot_key, Settings::default().snapshot_key);

        assert!(matches!(
            load_config(dir.path().join("absent.toml")),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "config_version = 1\n[logging]\nlevel = \"warn\"\n").unwrap();

        let settings = load_config(&path).unwrap();
        assert_eq!(settings.log_level, "warn");
    }
}
