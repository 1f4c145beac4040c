//! Application settings loaded from config.toml.
//!
//! The configuration file is optional: when it is missing every field falls
//! back to its default, so the daemon can run with no configuration at all.
//! The only tunable today is the overview refresh interval used by the
//! poll-based change feed.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default overview re-poll interval.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// Application settings parsed from config.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds between poll-based overview refreshes
    pub refresh_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

/// Loads settings from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from the given path, falling back to [`Settings::default`]
/// when the file does not exist.
///
/// # Errors
/// Returns an error only when the file exists but cannot be parsed.
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    if path.as_ref().exists() {
        load_settings(path)
    } else {
        Ok(Settings::default())
    }
}

/// Loads settings from the default location (./config.toml).
///
/// # Errors
/// Returns an error only when the file exists but cannot be parsed.
pub fn load_default_settings() -> Result<Settings> {
    load_settings_or_default("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_settings() {
        let toml_str = r"
            refresh_interval_secs = 5
        ";

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.refresh_interval_secs, 5);
    }

    #[test]
    fn test_parse_empty_settings_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(
            settings.refresh_interval_secs,
            DEFAULT_REFRESH_INTERVAL_SECS
        );
    }

    #[test]
    fn test_load_settings_missing_file() {
        let result = load_settings("/nonexistent/config.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_settings_or_default_missing_file_uses_defaults() {
        let settings = load_settings_or_default("/nonexistent/config.toml").unwrap();
        assert_eq!(
            settings.refresh_interval_secs,
            DEFAULT_REFRESH_INTERVAL_SECS
        );
    }

    #[test]
    fn test_load_settings_or_default_reads_existing_file() {
        let path = std::env::temp_dir().join("daily_planner_settings_test.toml");
        std::fs::write(&path, "refresh_interval_secs = 7\n").unwrap();

        let settings = load_settings_or_default(&path).unwrap();
        assert_eq!(settings.refresh_interval_secs, 7);

        std::fs::remove_file(&path).ok();
    }
}
