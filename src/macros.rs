//! Logging macros for ergonomic message assembly.
//!
//! Each argument after the logger becomes one [`MessagePart`](crate::MessagePart)
//! through its `From` impl, so text, numbers, byte buffers and error parts can
//! be mixed freely. Parts are concatenated without separators.
//!
//! # Examples
//!
//! ```no_run
//! use daylog::prelude::*;
//! use daylog::{info, warning};
//!
//! let logger = Logger::new()?;
//!
//! // Single text part
//! info!(logger, "Server started");
//!
//! // Mixed parts
//! let port = 8080;
//! info!(logger, "listening on port ", port);
//! warning!(logger, "unexpected frame ", vec![0x0au8, 0xff]);
//! # Ok::<(), daylog::LoggerError>(())
//! ```

/// Build a `Vec<MessagePart>` from a list of convertible values.
///
/// # Examples
///
/// ```
/// use daylog::{parts, MessagePart};
///
/// let parts = parts!["retry ", 3, " of ", 5];
/// assert_eq!(parts.len(), 4);
/// assert_eq!(parts[1], MessagePart::Text("3".into()));
/// ```
#[macro_export]
macro_rules! parts {
    () => {
        ::std::vec::Vec::<$crate::MessagePart>::new()
    };
    ($($part:expr),+ $(,)?) => {
        ::std::vec![$($crate::MessagePart::from($part)),+]
    };
}

/// Log at an explicit level.
///
/// # Examples
///
/// ```no_run
/// # use daylog::prelude::*;
/// # let logger = Logger::new()?;
/// use daylog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: ", 500);
/// # Ok::<(), daylog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($part:expr),+ $(,)?) => {
        $logger.log($level, $crate::parts![$($part),+])
    };
}

/// Log an `ERR` message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($part),+)
    };
}

/// Log a `WRN` message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($part),+)
    };
}

/// Log an `INF` message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($part),+)
    };
}

/// Log a `DBG` message.
///
/// # Examples
///
/// ```no_run
/// # use daylog::prelude::*;
/// # let logger = Logger::new()?;
/// # logger.set_level(LogLevel::Debug);
/// use daylog::debug;
/// debug!(logger, "Counter value: ", 10);
/// # Ok::<(), daylog::LoggerError>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($part),+)
    };
}

/// Log a `PNC` message. This only records the entry; it does not panic.
///
/// `PNC` is only admitted when the threshold is `PNC` itself.
#[macro_export]
macro_rules! panic_log {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Panic, $($part),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger, MessagePart};
    use std::time::Duration;
    use tempfile::tempdir;

    fn quiet_logger(dir: &std::path::Path) -> Logger {
        Logger::builder()
            .base_path(dir)
            .level(LogLevel::Panic)
            .flush_period(Duration::from_secs(3600))
            .build()
            .unwrap()
    }

    #[test]
    fn test_parts_macro() {
        let empty = parts![];
        assert!(empty.is_empty());

        let mixed = parts!["id=", 7u8, b"\x01\x02", String::from("!")];
        assert_eq!(
            mixed,
            vec![
                MessagePart::Text("id=".into()),
                MessagePart::Text("7".into()),
                MessagePart::Bytes(Some(vec![1, 2])),
                MessagePart::Text("!".into()),
            ]
        );
    }

    #[test]
    fn test_level_macros_enqueue() {
        let dir = tempdir().unwrap();
        let logger = quiet_logger(dir.path());

        error!(logger, "Error message");
        warning!(logger, "Retry ", 1, " of ", 3);
        info!(logger, "Items: ", 100);
        debug!(logger, "Count: ", 5);
        panic_log!(logger, "Fatal message");
        log!(logger, LogLevel::Info, "explicit");

        assert_eq!(logger.pending(), 6);
        logger.force_close();
    }

    #[test]
    fn test_macros_respect_threshold() {
        let dir = tempdir().unwrap();
        let logger = quiet_logger(dir.path());
        logger.set_level(LogLevel::Warning);

        debug!(logger, "dropped");
        info!(logger, "dropped");
        warning!(logger, "kept");

        assert_eq!(logger.pending(), 1);
        assert_eq!(logger.metrics().filtered(), 2);
        logger.force_close();
    }
}
