//! Sink configuration
//!
//! The host owns configuration loading. `SinkConfig` derives serde so it can be
//! embedded in whatever config format the host already parses; every field has
//! a default, so partial documents are fine.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_PATH: &str = ".";
pub const DEFAULT_NAME: &str = "default";
pub const LOG_EXTENSION: &str = "log";
pub const DEFAULT_FLUSH_PERIOD: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Directory the log files are created in. Must already exist.
    pub base_path: PathBuf,
    /// File name prefix, e.g. `default` gives `default_2025_01_08_....log`
    pub name: String,
    /// Initial threshold
    pub level: LogLevel,
    /// Echo every line to stdout
    pub console: bool,
    /// Color the echoed lines by level (requires the `console` feature)
    pub console_colors: bool,
    /// Nominal flush period in milliseconds
    pub flush_period_ms: u64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            name: DEFAULT_NAME.to_string(),
            level: LogLevel::default(),
            console: false,
            console_colors: false,
            flush_period_ms: DEFAULT_FLUSH_PERIOD.as_millis() as u64,
        }
    }
}

impl SinkConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn flush_period(&self) -> Duration {
        Duration::from_millis(self.flush_period_ms)
    }

    /// Reject settings the sink cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LoggerError::config("SinkConfig", "file name prefix is empty"));
        }
        if self.name.contains(['/', '\\']) {
            return Err(LoggerError::config(
                "SinkConfig",
                format!("file name prefix '{}' contains a path separator", self.name),
            ));
        }
        if self.flush_period_ms == 0 {
            return Err(LoggerError::config(
                "SinkConfig",
                "flush period must be non-zero",
            ));
        }
        Ok(())
    }
}
