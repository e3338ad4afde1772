//! Core sink types

pub mod config;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod queue;
pub mod scheduler;
pub(crate) mod sink;
pub mod timestamp;

pub use config::{SinkConfig, DEFAULT_FLUSH_PERIOD};
pub use error::{LoggerError, Result};
pub use formatter::{hex_encode, render, LINE_BREAK};
pub use log_entry::{current_origin_id, ErrorPart, LogEntry, MessagePart};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use queue::SubmissionQueue;
pub use scheduler::FlushScheduler;
