//! Default paths for journey
//!
//! Paths are user-writable by default:
//! - Config: `$XDG_CONFIG_HOME/journey/config.toml` or `~/.config/journey/config.toml`
//! - Data: `$XDG_DATA_HOME/journey` or `~/.local/share/journey`

use std::path::PathBuf;

/// Environment variable for overriding the data directory
pub const JOURNEY_DATA_DIR_ENV: &str = "JOURNEY_DATA_DIR";

/// Environment variable for overriding the config file
pub const JOURNEY_CONFIG_ENV: &str = "JOURNEY_CONFIG";

/// Application subdirectory name
const APP_DIR: &str = "journey";

/// Config filename within the config directory
const CONFIG_FILENAME: &str = "config.toml";

/// SQLite database filename within the data directory
pub const DATABASE_FILENAME: &str = "journey.db";

/// Get the default config file path.
///
/// Order of precedence:
/// 1. `$JOURNEY_CONFIG` environment variable (if set)
/// 2. `$XDG_CONFIG_HOME/journey/config.toml` (if XDG_CONFIG_HOME is set)
/// 3. `~/.config/journey/config.toml` (fallback)
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(JOURNEY_CONFIG_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILENAME);
    }

    PathBuf::from("/tmp").join(APP_DIR).join(CONFIG_FILENAME)
}

/// Get the default data directory.
///
/// Order of precedence:
/// 1. `$JOURNEY_DATA_DIR` environment variable (if set)
/// 2. `$XDG_DATA_HOME/journey` (if XDG_DATA_HOME is set)
/// 3. `~/.local/share/journey` (fallback)
pub fn default_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var(JOURNEY_DATA_DIR_ENV) {
        return PathBuf::from(path);
    }

    data_dir_without_env()
}

/// XDG data directory, ignoring `JOURNEY_DATA_DIR`
fn data_dir_without_env() -> PathBuf {
    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(data_home).join(APP_DIR);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_DIR);
    }

    // Last resort
    PathBuf::from("/tmp").join(APP_DIR).join("data")
}

/// Path of the SQLite database inside a data directory
pub fn database_path(data_dir: impl Into<PathBuf>) -> PathBuf {
    data_dir.into().join(DATABASE_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_toml() {
        let path = default_config_path();
        assert!(path.to_string_lossy().ends_with(".toml"));
    }

    #[test]
    fn test_data_dir_contains_journey() {
        let path = data_dir_without_env();
        assert!(path.to_string_lossy().contains("journey"));
    }

    #[test]
    fn test_database_lives_in_data_dir() {
        let db = database_path("/var/lib/journey");
        assert_eq!(db, PathBuf::from("/var/lib/journey/journey.db"));
    }
}
