//! Logger metrics for observability
//!
//! Counters describing what happened to submitted entries and how the flush
//! task behaved. The flush depth gauge is what demonstrates the single-flight
//! invariant: `max_flush_depth()` must never exceed 1.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use daylog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_enqueued();
/// metrics.record_written();
///
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.written(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries accepted into the queue
    enqueued: AtomicU64,

    /// Entries rejected by the level threshold
    filtered: AtomicU64,

    /// Lines written to the current file
    written: AtomicU64,

    /// Lines rendered but not persisted (no open file, or a write error)
    lost: AtomicU64,

    /// Timer firings or manual flushes dropped because a flush was running
    skipped_ticks: AtomicU64,

    /// Flush cycles that acquired the single-flight flag
    flush_cycles: AtomicU64,

    /// Files opened by day rotation
    rotations: AtomicU64,

    /// Failed attempts to open a new file
    open_failures: AtomicU64,

    flush_depth: AtomicU64,
    max_flush_depth: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            written: AtomicU64::new(0),
            lost: AtomicU64::new(0),
            skipped_ticks: AtomicU64::new(0),
            flush_cycles: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            open_failures: AtomicU64::new(0),
            flush_depth: AtomicU64::new(0),
            max_flush_depth: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lost(&self) -> u64 {
        self.lost.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn skipped_ticks(&self) -> u64 {
        self.skipped_ticks.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn flush_cycles(&self) -> u64 {
        self.flush_cycles.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn open_failures(&self) -> u64 {
        self.open_failures.load(Ordering::Relaxed)
    }

    /// Number of flush cycles running right now
    #[inline]
    pub fn flush_depth(&self) -> u64 {
        self.flush_depth.load(Ordering::SeqCst)
    }

    /// Highest number of flush cycles ever observed running at once
    #[inline]
    pub fn max_flush_depth(&self) -> u64 {
        self.max_flush_depth.load(Ordering::SeqCst)
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_lost(&self) -> u64 {
        self.lost.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_skipped_tick(&self) -> u64 {
        self.skipped_ticks.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rotation(&self) -> u64 {
        self.rotations.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_open_failure(&self) -> u64 {
        self.open_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Mark the start of a flush cycle
    pub fn enter_flush(&self) {
        self.flush_cycles.fetch_add(1, Ordering::Relaxed);
        let depth = self.flush_depth.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_flush_depth.fetch_max(depth, Ordering::SeqCst);
    }

    /// Mark the end of a flush cycle
    pub fn exit_flush(&self) {
        self.flush_depth.fetch_sub(1, Ordering::SeqCst);
    }

    /// Share of rendered lines that were lost, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been processed.
    pub fn loss_rate(&self) -> f64 {
        let lost = self.lost() as f64;
        let total = self.written() as f64 + lost;
        if total == 0.0 {
            0.0
        } else {
            (lost / total) * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            enqueued: AtomicU64::new(self.enqueued()),
            filtered: AtomicU64::new(self.filtered()),
            written: AtomicU64::new(self.written()),
            lost: AtomicU64::new(self.lost()),
            skipped_ticks: AtomicU64::new(self.skipped_ticks()),
            flush_cycles: AtomicU64::new(self.flush_cycles()),
            rotations: AtomicU64::new(self.rotations()),
            open_failures: AtomicU64::new(self.open_failures()),
            flush_depth: AtomicU64::new(self.flush_depth()),
            max_flush_depth: AtomicU64::new(self.max_flush_depth()),
        }
    }
}
