//! Configuration types for the logging system

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::LogError;

/// Main logging configuration
///
/// Loadable from JSON; omitted fields keep their defaults:
///
/// ```json
/// { "default_level": "debug", "file": { "directory": "./logs", "rotation": "hourly" } }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LogConfig {
    /// Default log level (can be overridden by RUST_LOG)
    pub default_level: String,

    /// Console output configuration
    pub console: ConsoleConfig,

    /// File output configuration
    pub file: Option<FileConfig>,

    /// JSONL output configuration
    pub jsonl: JsonlConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: None,
            jsonl: JsonlConfig::default(),
        }
    }
}

impl LogConfig {
    /// Create a config for development (verbose console output)
    pub fn development() -> Self {
        Self {
            default_level: "debug".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: true,
                ansi: true,
            },
            ..Default::default()
        }
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, LogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LogError> {
        let json = std::fs::read_to_string(path).map_err(|source| LogError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Create a config for testing (minimal output)
    pub fn testing() -> Self {
        Self {
            default_level: "warn".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: false,
                ansi: false,
            },
            ..Default::default()
        }
    }
}

/// Console output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ConsoleConfig {
    /// Enable console output
    pub enabled: bool,
    /// Use pretty (human-readable) format instead of JSONL
    pub pretty: bool,
    /// Include ANSI colors
    pub ansi: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pretty: true,
            ansi: true,
        }
    }
}

/// File output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FileConfig {
    /// Directory for log files
    pub directory: PathBuf,
    /// File name prefix
    pub prefix: String,
    /// Rotation strategy
    pub rotation: RotationStrategy,
}

impl FileConfig {
    /// Daily-rotated files under `directory` with the default prefix.
    pub fn daily(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./logs"),
            prefix: "clickport".to_string(),
            rotation: RotationStrategy::Daily,
        }
    }
}

/// File rotation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationStrategy {
    /// Rotate daily
    #[default]
    Daily,
    /// Rotate hourly
    Hourly,
    /// Never rotate (single file, truncated on start)
    Never,
}

/// JSONL formatting configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct JsonlConfig {
    /// Flatten event fields to root level
    pub flatten_events: bool,
    /// Include span list in events
    pub include_spans: bool,
    /// Include file/line information
    pub include_location: bool,
}

impl Default for JsonlConfig {
    fn default() -> Self {
        Self {
            flatten_events: true,
            include_spans: true,
            include_location: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, "info");
        assert!(config.console.enabled);
        assert!(config.console.pretty);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_testing_config_is_quiet() {
        let config = LogConfig::testing();
        assert_eq!(config.default_level, "warn");
        assert!(!config.console.pretty);
        assert!(!config.console.ansi);
    }

    #[test]
    fn test_development_config_is_verbose() {
        let config = LogConfig::development();
        assert_eq!(config.default_level, "debug");
        assert!(config.console.pretty);
        assert!(config.console.ansi);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LogConfig::from_json(
            r#"{"default_level": "trace", "file": {"directory": "/var/log/clickport", "rotation": "hourly"}}"#,
        )
        .unwrap();
        assert_eq!(config.default_level, "trace");
        assert!(config.console.enabled);
        assert!(config.jsonl.flatten_events);

        let file = config.file.unwrap();
        assert_eq!(file.directory, PathBuf::from("/var/log/clickport"));
        assert_eq!(file.prefix, "clickport");
        assert_eq!(file.rotation, RotationStrategy::Hourly);
    }

    #[test]
    fn test_json_rejects_unknown_keys() {
        let err = LogConfig::from_json(r#"{"otel": {"endpoint": "http://localhost:4317"}}"#);
        assert!(matches!(err, Err(LogError::InvalidConfig(_))));

        let err = LogConfig::from_json(r#"{"console": {"colour": true}}"#);
        assert!(matches!(err, Err(LogError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logging.json");
        std::fs::write(&path, r#"{"console": {"pretty": false}}"#).unwrap();

        let config = LogConfig::load(&path).unwrap();
        assert!(!config.console.pretty);
        assert_eq!(config.default_level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let err = LogConfig::load(Path::new("/nonexistent/clickport-logging.json"));
        assert!(matches!(err, Err(LogError::ReadConfig { .. })));
    }

    #[test]
    fn test_rotation_deserializes_lowercase() {
        let rotation: RotationStrategy = serde_json::from_str("\"hourly\"").unwrap();
        assert_eq!(rotation, RotationStrategy::Hourly);
    }

    #[test]
    fn test_daily_file_config() {
        let file = FileConfig::daily("/tmp/clickport-logs");
        assert_eq!(file.directory, PathBuf::from("/tmp/clickport-logs"));
        assert_eq!(file.prefix, "clickport");
        assert_eq!(file.rotation, RotationStrategy::Daily);
    }
}
