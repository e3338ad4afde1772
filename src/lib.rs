//! # daylog
//!
//! A non-blocking logging sink that writes day-rotated log files.
//!
//! ## Features
//!
//! - **Never blocks producers**: emit calls filter by level and enqueue; all
//!   formatting and I/O happens on a background flush thread
//! - **Single-flight flushing**: a flush that is still running causes later
//!   timer firings to be dropped, never queued
//! - **Day rotation**: a new `<name>_<yyyy_MM_dd_HH_mm_ss_SSS>.log` file is
//!   opened whenever an entry falls on a new local day
//! - **Console echo**: optional copy of every line on stdout
//!
//! ## Line format
//!
//! ```text
//! 10:30:45.123[1A] INF connected to 0x0A0B\r\n
//! ```
//!
//! Local time, the producing thread's id in upper-case hex, the three-letter
//! level code, then the message parts concatenated without separators.

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        ErrorPart, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        MessagePart, Result, SinkConfig,
    };
}

pub use appenders::{ConsoleEcho, RotatingFileAppender};
pub use core::{
    current_origin_id, ErrorPart, FlushScheduler, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, MessagePart, Result, SinkConfig, DEFAULT_FLUSH_PERIOD,
};
