//! Log entry structure
//!
//! An entry is immutable once built. Timestamp and origin are captured on the
//! producer thread at submission time, not when the flush task gets to it.

use super::log_level::LogLevel;
use super::timestamp::now_millis;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ORIGIN_ID: AtomicU64 = AtomicU64::new(1);

// Per-thread origin id, assigned on first use
thread_local! {
    static ORIGIN_ID_CACHE: Cell<u64> = const { Cell::new(0) };
}

/// Numeric id of the calling thread.
///
/// Ids are handed out from a process-wide counter starting at 1 and stay fixed
/// for the lifetime of the thread.
pub fn current_origin_id() -> u64 {
    ORIGIN_ID_CACHE.with(|cache| {
        if cache.get() == 0 {
            cache.set(NEXT_ORIGIN_ID.fetch_add(1, Ordering::Relaxed));
        }
        cache.get()
    })
}

/// An error value carried inside a log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPart {
    description: String,
    offset: Option<usize>,
    frames: Vec<String>,
}

impl ErrorPart {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            offset: None,
            frames: Vec::new(),
        }
    }

    /// Capture an error's message and its `source()` chain.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let mut part = Self::new(err.to_string());
        let mut source = err.source();
        while let Some(cause) = source {
            part.frames.push(format!("caused by: {}", cause));
            source = cause.source();
        }
        part
    }

    /// Position in the input at which a parse-style error occurred.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_frames<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frames.extend(frames.into_iter().map(Into::into));
        self
    }

    /// Append the frames of a captured backtrace, one per line.
    ///
    /// Disabled or unsupported backtraces contribute nothing.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: &Backtrace) -> Self {
        if backtrace.status() == BacktraceStatus::Captured {
            self.frames.extend(backtrace_frames(&backtrace.to_string()));
        }
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

/// Fold std's two-line frames (`N: function` then `at file:line:col`) into
/// one line each.
fn backtrace_frames(rendered: &str) -> Vec<String> {
    let mut frames: Vec<String> = Vec::new();
    for line in rendered.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match frames.last_mut() {
            Some(frame) if line.starts_with("at ") => {
                frame.push(' ');
                frame.push_str(line);
            }
            _ => frames.push(line.to_string()),
        }
    }
    frames
}

/// One piece of a log message.
#[derive(Debug, Clone, PartialEq)]
pub enum MessagePart {
    /// Already-rendered printable value
    Text(String),
    /// Raw bytes, rendered as `0x` + lowercase hex; `None` renders as empty
    Bytes(Option<Vec<u8>>),
    Error(ErrorPart),
}

impl MessagePart {
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        MessagePart::Text(value.to_string())
    }

    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        MessagePart::Text(format!("{:?}", value))
    }

    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        MessagePart::Error(ErrorPart::from_error(err))
    }
}

impl From<&str> for MessagePart {
    fn from(value: &str) -> Self {
        MessagePart::Text(value.to_string())
    }
}

impl From<String> for MessagePart {
    fn from(value: String) -> Self {
        MessagePart::Text(value)
    }
}

impl From<&String> for MessagePart {
    fn from(value: &String) -> Self {
        MessagePart::Text(value.clone())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for MessagePart {
                fn from(value: $ty) -> Self {
                    MessagePart::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl From<Vec<u8>> for MessagePart {
    fn from(value: Vec<u8>) -> Self {
        MessagePart::Bytes(Some(value))
    }
}

impl From<Option<Vec<u8>>> for MessagePart {
    fn from(value: Option<Vec<u8>>) -> Self {
        MessagePart::Bytes(value)
    }
}

impl From<&[u8]> for MessagePart {
    fn from(value: &[u8]) -> Self {
        MessagePart::Bytes(Some(value.to_vec()))
    }
}

impl<const N: usize> From<[u8; N]> for MessagePart {
    fn from(value: [u8; N]) -> Self {
        MessagePart::Bytes(Some(value.to_vec()))
    }
}

impl<const N: usize> From<&[u8; N]> for MessagePart {
    fn from(value: &[u8; N]) -> Self {
        MessagePart::Bytes(Some(value.to_vec()))
    }
}

impl From<ErrorPart> for MessagePart {
    fn from(value: ErrorPart) -> Self {
        MessagePart::Error(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    level: LogLevel,
    timestamp_millis: i64,
    origin_id: u64,
    parts: Vec<MessagePart>,
}

impl LogEntry {
    /// Build an entry stamped with the current time and calling thread.
    pub fn new<I>(level: LogLevel, parts: I) -> Self
    where
        I: IntoIterator<Item = MessagePart>,
    {
        Self {
            level,
            timestamp_millis: now_millis(),
            origin_id: current_origin_id(),
            parts: parts.into_iter().collect(),
        }
    }

    /// Rebuild an entry that originated elsewhere, e.g. a forwarded log line.
    pub fn with_origin(
        level: LogLevel,
        origin_id: u64,
        timestamp_millis: i64,
        part: impl Into<MessagePart>,
    ) -> Self {
        Self {
            level,
            timestamp_millis,
            origin_id,
            parts: vec![part.into()],
        }
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    #[inline]
    pub fn origin_id(&self) -> u64 {
        self.origin_id
    }

    pub fn parts(&self) -> &[MessagePart] {
        &self.parts
    }
}
