//! Error types for the logging sink
//!
//! None of these ever reach a producer thread. The flush task turns them into
//! stderr reports; only construction and configuration surface them to the host.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Log file could not be created
    #[error("Failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Line could not be appended to the current file
    #[error("Failed to write to log file '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Current file could not be flushed or closed cleanly
    #[error("Failed to close log file '{path}': {source}")]
    FileClose {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Background flush thread could not be spawned
    #[error("Failed to start flush scheduler: {0}")]
    SchedulerStart(#[source] std::io::Error),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn file_close(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileClose {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
