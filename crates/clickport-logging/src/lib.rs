//! Logging setup for the Clickport shell
//!
//! Builds a global `tracing` subscriber with:
//!
//! - **Console output**: human-readable (default) or JSONL
//! - **File output**: JSONL lines to a rolling file via tracing-appender
//! - **Env override**: `RUST_LOG` takes precedence over the configured level
//!
//! # Quick Start
//!
//! ```ignore
//! use clickport_logging::{ShellSubscriberBuilder, LogConfig, FileConfig};
//!
//! // Pretty console output at info level
//! let _guard = ShellSubscriberBuilder::new().init()?;
//!
//! // Console plus daily-rotated JSONL files
//! let _guard = ShellSubscriberBuilder::new()
//!     .with_level("debug")
//!     .with_file_output(FileConfig::daily("./logs"))
//!     .init()?;
//!
//! // Settings from a JSON file, level overridden on the command line
//! let _guard = ShellSubscriberBuilder::new()
//!     .with_config(LogConfig::load(Path::new("logging.json"))?)
//!     .with_level("trace")
//!     .init()?;
//! ```
//!
//! Keep the returned guard alive for the whole program when file output is
//! enabled, otherwise buffered lines are lost on exit.

pub mod config;

pub use config::{ConsoleConfig, FileConfig, JsonlConfig, LogConfig, RotationStrategy};
pub use tracing_appender::non_blocking::WorkerGuard;

use std::fs::{self, File};
use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create log file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("failed to open rolling log file: {0}")]
    Appender(#[from] InitError),

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Builder for configuring and installing the logging subscriber
pub struct ShellSubscriberBuilder {
    config: LogConfig,
}

impl ShellSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    ///
    /// Default: pretty console output at `info`
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Switch the console between pretty and JSONL output
    pub fn with_pretty_console(mut self, pretty: bool) -> Self {
        self.config.console.pretty = pretty;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// Install the subscriber globally.
    ///
    /// Returns the file writer guard when file output is configured; it must
    /// be held until the program exits.
    pub fn init(self) -> Result<Option<WorkerGuard>, LogError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let (file_writer, guard) = match &self.config.file {
            Some(file_config) => {
                let (writer, guard) = open_file_writer(file_config)?;
                (Some(writer), Some(guard))
            }
            None => (None, None),
        };

        let console = &self.config.console;
        let jsonl = &self.config.jsonl;

        let pretty_console = (console.enabled && console.pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .with_ansi(console.ansi)
                .with_target(true)
        });

        let jsonl_console = (console.enabled && !console.pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(jsonl.include_spans)
                .flatten_event(jsonl.flatten_events)
                .with_file(jsonl.include_location)
                .with_line_number(jsonl.include_location)
        });

        let file_layer = file_writer.map(|writer| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_current_span(true)
                .with_span_list(jsonl.include_spans)
                .flatten_event(jsonl.flatten_events)
                .with_file(jsonl.include_location)
                .with_line_number(jsonl.include_location)
                .with_writer(writer)
        });

        Registry::default()
            .with(env_filter)
            .with(pretty_console)
            .with(jsonl_console)
            .with(file_layer)
            .try_init()
            .map_err(|_| LogError::AlreadyInitialized)?;

        Ok(guard)
    }
}

impl Default for ShellSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Open the non-blocking writer for file output.
///
/// `Never` truncates a single `<prefix>.log`; the rotating strategies append
/// to `<prefix>.<date>.log`.
fn open_file_writer(file_config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LogError> {
    let rotation = match file_config.rotation {
        RotationStrategy::Never => {
            fs::create_dir_all(&file_config.directory).map_err(|source| LogError::CreateDir {
                path: file_config.directory.clone(),
                source,
            })?;
            let path = file_config
                .directory
                .join(format!("{}.log", file_config.prefix));
            let file = File::create(&path).map_err(|source| LogError::CreateFile {
                path: path.clone(),
                source,
            })?;
            return Ok(tracing_appender::non_blocking(file));
        }
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
    };

    let appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&file_config.prefix)
        .filename_suffix("log")
        .build(&file_config.directory)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Initialize logging for testing (minimal output), ignoring a subscriber
/// that is already installed
pub fn init_testing() {
    let _ = ShellSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creation() {
        let builder = ShellSubscriberBuilder::new();
        assert_eq!(builder.config.default_level, "info");
        assert!(builder.config.console.pretty);
    }

    #[test]
    fn test_builder_with_level() {
        let builder = ShellSubscriberBuilder::new().with_level("trace");
        assert_eq!(builder.config.default_level, "trace");
    }

    #[test]
    fn test_builder_overrides_apply_on_top_of_config() {
        let builder = ShellSubscriberBuilder::new()
            .with_config(LogConfig::development())
            .with_level("warn")
            .with_pretty_console(false);
        assert_eq!(builder.config.default_level, "warn");
        assert!(!builder.config.console.pretty);
        assert!(builder.config.console.ansi);
    }

    #[test]
    fn test_builder_with_file_output() {
        let builder = ShellSubscriberBuilder::new().with_file_output(FileConfig::daily("logs"));
        let file = builder.config.file.expect("file output configured");
        assert_eq!(file.directory, PathBuf::from("logs"));
    }

    #[test]
    fn test_never_rotation_creates_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig {
            directory: dir.path().join("nested"),
            prefix: "shell".to_string(),
            rotation: RotationStrategy::Never,
        };

        let (_writer, _guard) = open_file_writer(&config).unwrap();
        assert!(dir.path().join("nested").join("shell.log").exists());
    }

    #[test]
    fn test_daily_rotation_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::daily(dir.path().join("daily"));

        let (_writer, _guard) = open_file_writer(&config).unwrap();
        assert!(dir.path().join("daily").is_dir());
    }

    #[test]
    fn test_init_testing_is_repeatable() {
        init_testing();
        init_testing();
    }
}
