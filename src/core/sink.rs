//! State shared between the facade and the flush task
//!
//! Producers only touch the threshold and the queue. Everything behind the
//! appender mutex belongs to the flush task; the mutex is only ever taken by
//! a cycle that already holds the single-flight flag, or by shutdown after the
//! scheduler has been stopped.

use super::config::SinkConfig;
use super::error::LoggerError;
use super::formatter::render;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::metrics::LoggerMetrics;
use super::queue::SubmissionQueue;
use crate::appenders::{ConsoleEcho, RotatingFileAppender};
use parking_lot::Mutex;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

pub(crate) struct SinkCore {
    queue: SubmissionQueue,
    threshold: AtomicU8,
    /// Cleared by a forced close; a running drain stops after its current entry
    enabled: AtomicBool,
    /// Single-flight flag
    busy: AtomicBool,
    file: Mutex<RotatingFileAppender>,
    console: Option<ConsoleEcho>,
    metrics: LoggerMetrics,
}

/// Releases the single-flight flag when the cycle ends, even by unwinding
struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

struct DepthGuard<'a> {
    metrics: &'a LoggerMetrics,
}

impl<'a> DepthGuard<'a> {
    fn enter(metrics: &'a LoggerMetrics) -> Self {
        metrics.enter_flush();
        Self { metrics }
    }
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.metrics.exit_flush();
    }
}

impl SinkCore {
    pub(crate) fn new(config: &SinkConfig) -> Self {
        Self {
            queue: SubmissionQueue::new(),
            threshold: AtomicU8::new(config.level.id()),
            enabled: AtomicBool::new(true),
            busy: AtomicBool::new(false),
            file: Mutex::new(RotatingFileAppender::new(
                config.base_path.clone(),
                config.name.clone(),
            )),
            console: config
                .console
                .then(|| ConsoleEcho::with_colors(config.console_colors)),
            metrics: LoggerMetrics::new(),
        }
    }

    #[inline]
    pub(crate) fn level(&self) -> LogLevel {
        LogLevel::from_id(self.threshold.load(Ordering::Relaxed))
    }

    #[inline]
    pub(crate) fn set_level(&self, level: LogLevel) {
        self.threshold.store(level.id(), Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn admits(&self, level: LogLevel) -> bool {
        level.admits(self.level())
    }

    /// Enqueue an entry if it passes the threshold. Never blocks.
    pub(crate) fn submit(&self, entry: LogEntry) -> bool {
        if !self.admits(entry.level()) {
            self.metrics.record_filtered();
            return false;
        }
        self.queue.push(entry);
        self.metrics.record_enqueued();
        true
    }

    pub(crate) fn pending(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub(crate) fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    fn try_begin_flush(&self) -> Option<FlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlightGuard { flag: &self.busy })
    }

    /// One scheduler firing. Dropped entirely if another cycle is running.
    ///
    /// Returns whether the cycle ran.
    pub(crate) fn flush_cycle(&self) -> bool {
        let Some(_flight) = self.try_begin_flush() else {
            self.metrics.record_skipped_tick();
            return false;
        };
        self.drain();
        true
    }

    /// Drain the queue into the console and the current file.
    ///
    /// Panics are contained here so the scheduler survives them. The flush
    /// depth gauge is entered before the appender mutex, so it counts every
    /// drain in progress, including ones waiting for the file.
    pub(crate) fn drain(&self) {
        let _depth = DepthGuard::enter(&self.metrics);
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.drain_queue()));
        if let Err(panic_info) = result {
            eprintln!(
                "[LOGGER CRITICAL] Flush cycle panicked: {}. Waiting for the next cycle.",
                panic_message(panic_info.as_ref())
            );
        }
    }

    fn drain_queue(&self) {
        let mut file = self.file.lock();

        let mut drained = 0usize;
        while self.enabled.load(Ordering::Acquire) {
            let Some(entry) = self.queue.pop() else {
                break;
            };
            drained += 1;
            self.process(&mut file, &entry);
        }

        if drained == 0 {
            return;
        }
        if let Err(e) = file.flush() {
            report("flush failed", &e);
        }
        if let Some(ref console) = self.console {
            if let Err(e) = console.flush() {
                report("console flush failed", &e);
            }
        }
    }

    fn process(&self, file: &mut RotatingFileAppender, entry: &LogEntry) {
        let line = render(entry);

        if let Some(ref console) = self.console {
            if let Err(e) = console.echo(&line, entry.level()) {
                report("console echo failed", &e);
            }
        }

        match file.maybe_rotate(entry.timestamp_millis()) {
            Ok(true) => {
                self.metrics.record_rotation();
            }
            Ok(false) => {}
            Err(e) => {
                self.metrics.record_open_failure();
                report("cannot open log file", &e);
            }
        }

        match file.write(&line) {
            Ok(true) => {
                self.metrics.record_written();
            }
            Ok(false) => {
                self.metrics.record_lost();
            }
            Err(e) => {
                self.metrics.record_lost();
                report("write failed", &e);
            }
        }
    }

    /// Release the current file. Waits for a running drain to finish.
    pub(crate) fn close_file(&self) {
        if let Err(e) = self.file.lock().close() {
            report("close failed", &e);
        }
    }
}

fn report(context: &str, err: &LoggerError) {
    eprintln!("[LOGGER ERROR] {}: {}\n    {:?}", context, err, err);
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
