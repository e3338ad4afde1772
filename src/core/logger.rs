//! Logger facade and lifecycle

use super::{
    config::SinkConfig,
    error::Result,
    log_entry::{LogEntry, MessagePart},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    scheduler::FlushScheduler,
    sink::SinkCore,
};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Non-blocking logging sink.
///
/// Emit calls only filter and enqueue. A background scheduler drains the queue
/// every flush period, rendering each entry, optionally echoing it to stdout,
/// and appending it to a file that rotates with the entry's local day.
///
/// # Example
///
/// ```no_run
/// use daylog::prelude::*;
/// use daylog::{info, parts};
///
/// let logger = Logger::builder()
///     .base_path("/var/log/gateway")
///     .name("gateway")
///     .level(LogLevel::Debug)
///     .console(true)
///     .build()?;
///
/// info!(logger, "listening on port ", 8080);
/// logger.warning(parts!["slow upstream"]);
///
/// logger.close();
/// # Ok::<(), daylog::LoggerError>(())
/// ```
pub struct Logger {
    core: Arc<SinkCore>,
    scheduler: Mutex<Option<FlushScheduler>>,
    closed: AtomicBool,
    config: SinkConfig,
}

impl Logger {
    /// Logger with default settings: current directory, `default` prefix,
    /// `INF` threshold, no console echo, 300ms flush period.
    pub fn new() -> Result<Self> {
        Self::with_config(SinkConfig::default())
    }

    pub fn with_config(config: SinkConfig) -> Result<Self> {
        config.validate()?;

        let core = Arc::new(SinkCore::new(&config));
        let task_core = Arc::clone(&core);
        let scheduler = FlushScheduler::start(config.flush_period(), move || {
            task_core.flush_cycle();
        })?;

        Ok(Self {
            core,
            scheduler: Mutex::new(Some(scheduler)),
            closed: AtomicBool::new(false),
            config,
        })
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn log<I>(&self, level: LogLevel, parts: I)
    where
        I: IntoIterator<Item = MessagePart>,
    {
        // Reject before stamping so filtered calls stay cheap
        if !self.core.admits(level) {
            self.core.metrics().record_filtered();
            return;
        }
        self.push(LogEntry::new(level, parts));
    }

    /// Submit a pre-built entry, e.g. one forwarded from another process.
    ///
    /// Entries above the threshold, or submitted after shutdown, are dropped.
    pub fn push(&self, entry: LogEntry) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        self.core.submit(entry);
    }

    #[inline]
    pub fn error<I>(&self, parts: I)
    where
        I: IntoIterator<Item = MessagePart>,
    {
        self.log(LogLevel::Error, parts);
    }

    #[inline]
    pub fn warning<I>(&self, parts: I)
    where
        I: IntoIterator<Item = MessagePart>,
    {
        self.log(LogLevel::Warning, parts);
    }

    #[inline]
    pub fn info<I>(&self, parts: I)
    where
        I: IntoIterator<Item = MessagePart>,
    {
        self.log(LogLevel::Info, parts);
    }

    #[inline]
    pub fn debug<I>(&self, parts: I)
    where
        I: IntoIterator<Item = MessagePart>,
    {
        self.log(LogLevel::Debug, parts);
    }

    #[inline]
    pub fn panic<I>(&self, parts: I)
    where
        I: IntoIterator<Item = MessagePart>,
    {
        self.log(LogLevel::Panic, parts);
    }

    pub fn level(&self) -> LogLevel {
        self.core.level()
    }

    /// Change the threshold. Entries submitted concurrently may see either value.
    pub fn set_level(&self, level: LogLevel) {
        self.core.set_level(level);
    }

    /// Run one flush cycle now, under the same single-flight rule as the
    /// scheduler.
    ///
    /// Returns `false` if another cycle was running or the logger is closed.
    pub fn flush(&self) -> bool {
        if self.closed.load(Ordering::Acquire) {
            return false;
        }
        self.core.flush_cycle()
    }

    /// Number of entries waiting for the next flush
    pub fn pending(&self) -> usize {
        self.core.pending()
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```no_run
    /// use daylog::Logger;
    ///
    /// let logger = Logger::new()?;
    ///
    /// // After logging operations...
    /// let metrics = logger.metrics();
    /// println!("Written: {}", metrics.written());
    /// println!("Lost: {}", metrics.lost());
    /// println!("Skipped ticks: {}", metrics.skipped_ticks());
    /// # Ok::<(), daylog::LoggerError>(())
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        self.core.metrics()
    }

    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Graceful shutdown: stop the scheduler, drain everything still queued,
    /// then close the file. Later calls are no-ops.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.stop_scheduler();
        // The scheduler is gone, so the final drain does not compete for the
        // single-flight flag
        self.core.drain();
        self.core.close_file();
    }

    /// Immediate shutdown: stop the scheduler, abandon whatever is still
    /// queued, close the file. A running drain stops after its current entry.
    pub fn force_close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.core.disable();
        self.stop_scheduler();
        self.core.close_file();
    }

    fn stop_scheduler(&self) {
        if let Some(mut scheduler) = self.scheduler.lock().take() {
            scheduler.stop();
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();

        let lost = self.core.metrics().lost();
        if lost > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} lost lines (loss rate: {:.2}%)",
                lost,
                self.core.metrics().loss_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use daylog::prelude::*;
/// use std::time::Duration;
///
/// let logger = Logger::builder()
///     .base_path("logs")
///     .name("worker")
///     .level(LogLevel::Warning)
///     .flush_period(Duration::from_millis(100))
///     .build()?;
/// # Ok::<(), daylog::LoggerError>(())
/// ```
pub struct LoggerBuilder {
    config: SinkConfig,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: SinkConfig::default(),
        }
    }

    /// Start from an existing configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: SinkConfig) -> Self {
        self.config = config;
        self
    }

    /// Directory for log files; the host must create it
    #[must_use = "builder methods return a new value"]
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.base_path = path.into();
        self
    }

    /// File name prefix
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Initial threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    /// Echo every line to stdout
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_colors(mut self, enabled: bool) -> Self {
        self.config.console_colors = enabled;
        self
    }

    /// Nominal period between scheduled flushes (millisecond resolution)
    #[must_use = "builder methods return a new value"]
    pub fn flush_period(mut self, period: Duration) -> Self {
        self.config.flush_period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Build the Logger and start its flush scheduler
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the scheduler
    /// thread cannot be spawned.
    pub fn build(self) -> Result<Logger> {
        Logger::with_config(self.config)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
