//! Log level definitions
//!
//! Level ids are not ordered by intuitive severity: `Panic` carries the highest
//! id and is therefore suppressed by the default `Info` threshold together with
//! `Debug`. Filtering compares ids literally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LogLevel {
    #[serde(rename = "ERR")]
    Error = 0,
    #[serde(rename = "WRN")]
    Warning = 1,
    #[default]
    #[serde(rename = "INF")]
    Info = 2,
    #[serde(rename = "DBG")]
    Debug = 3,
    #[serde(rename = "PNC")]
    Panic = 4,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Panic,
    ];

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a level by id, falling back to `Info` for unknown ids.
    pub const fn from_id(id: u8) -> Self {
        match id {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4 => LogLevel::Panic,
            _ => LogLevel::Info,
        }
    }

    /// Three-letter code used as the line prefix.
    pub const fn code(self) -> &'static str {
        match self {
            LogLevel::Error => "ERR",
            LogLevel::Warning => "WRN",
            LogLevel::Info => "INF",
            LogLevel::Debug => "DBG",
            LogLevel::Panic => "PNC",
        }
    }

    /// Whether an entry at this level passes the given threshold.
    #[inline]
    pub const fn admits(self, threshold: LogLevel) -> bool {
        self.id() <= threshold.id()
    }

    #[cfg(feature = "console")]
    pub fn color(self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Error => Red,
            LogLevel::Warning => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
            LogLevel::Panic => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ERR" | "ERROR" => Ok(LogLevel::Error),
            "WRN" | "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "INF" | "INFO" => Ok(LogLevel::Info),
            "DBG" | "DEBUG" => Ok(LogLevel::Debug),
            "PNC" | "PANIC" => Ok(LogLevel::Panic),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.id()
    }
}
