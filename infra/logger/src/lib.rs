//! # Logger
//!
//! One place to install the global `tracing` subscriber for the applications: a compact
//! console layer and/or a rolling file layer (optionally JSON), filtered by a default level,
//! an optional programmatic filter and `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use techdeck_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder("deck")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
#[must_use = "The builder does nothing until `init()` is called."]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    stderr: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    env_filter: Option<String>,
    json: bool,
    rotation: Rotation,
    max_files: usize,
}

impl LoggerBuilder {
    /// Minimum level emitted when neither `RUST_LOG` nor [`Self::env_filter`] say otherwise.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives such as `techdeck_cards=debug,dioxus=warn`.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Send console output to stderr instead of stdout, leaving stdout to the program.
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.stderr = enabled;
        self
    }

    /// Also write to rolling files `<name>.<date>.log` inside `path`.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Write file output as JSON lines. Console output stays human readable.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: it owns the file writer's worker.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, a bad filter
    ///   or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_filter()?;

        let mut layers = Vec::new();
        if self.console && self.stderr {
            layers.push(layer().compact().with_ansi(true).with_writer(std::io::stderr).boxed());
        } else if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(dir) = &self.path {
            fs::create_dir_all(dir)
                .context(format!("Failed to create log directory {}", dir.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(self.rotation.clone())
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.max_files)
                .build(dir)
                .context("Failed to build file appender")?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);
            layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        tracing::debug!(name = %self.name, "Logger initialized");
        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if self.max_files == 0 {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        if !self.console && self.path.is_none() {
            return Err(LoggerError::invalid("No output enabled. Enable console or file output."));
        }
        Ok(())
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => builder.parse(directives).map_err(|e| {
                LoggerError::invalid(format!("Invalid env filter '{directives}': {e}"))
            }),
        }
    }
}

/// Handle of the installed logging system.
///
/// Dropping it flushes and stops the background file writer.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a logger. `name` prefixes the log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            stderr: false,
            path: None,
            level: LevelFilter::INFO,
            env_filter: None,
            json: false,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
        }
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("deck");
        assert!(builder.console);
        assert!(!builder.stderr);
        assert!(builder.path.is_none());
        assert_eq!(builder.level, LevelFilter::INFO);
        assert_eq!(builder.max_files, DEFAULT_MAX_FILES);
        assert!(!builder.json);
    }

    #[test]
    fn builder_configuration() {
        let builder = Logger::builder("deck")
            .console(false)
            .stderr(true)
            .path("logs")
            .json(true)
            .max_files(3)
            .env_filter("techdeck_cards=debug")
            .level(LevelFilter::WARN);

        assert!(!builder.console);
        assert!(builder.stderr);
        assert_eq!(builder.path.as_deref(), Some(std::path::Path::new("logs")));
        assert!(builder.json);
        assert_eq!(builder.max_files, 3);
        assert_eq!(builder.env_filter.as_deref(), Some("techdeck_cards=debug"));
        assert_eq!(builder.level, LevelFilter::WARN);
    }

    #[test]
    fn validation_rejects_bad_settings() {
        let empty_name = Logger::builder("  ").validate();
        assert!(matches!(empty_name, Err(LoggerError::InvalidConfiguration { .. })));

        let no_files = Logger::builder("deck").max_files(0).validate();
        assert!(matches!(no_files, Err(LoggerError::InvalidConfiguration { .. })));

        let no_output = Logger::builder("deck").console(false).validate();
        assert!(matches!(no_output, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn invalid_filter_is_reported() {
        let err = Logger::builder("deck")
            .env_filter("techdeck=notalevel")
            .build_filter()
            .expect_err("filter must be rejected");
        assert!(err.to_string().contains("Invalid env filter"));
    }
}
