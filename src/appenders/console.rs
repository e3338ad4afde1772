//! Console echo of rendered lines

use crate::core::{LogLevel, Result};
use std::io::{self, Write};

#[cfg(feature = "console")]
use colored::Colorize;

pub struct ConsoleEcho {
    use_colors: bool,
}

impl ConsoleEcho {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    /// Colors are only applied when built with the `console` feature.
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Print an already-rendered line (CRLF included) to stdout.
    pub fn echo(&self, line: &str, level: LogLevel) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.use_colors {
            out.write_all(colorize(line, level).as_bytes())?;
        } else {
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }
}

impl Default for ConsoleEcho {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "console")]
fn colorize(line: &str, level: LogLevel) -> String {
    let body = line.trim_end_matches(crate::core::formatter::LINE_BREAK);
    let tail = &line[body.len()..];
    format!("{}{}", body.color(level.color()), tail)
}

#[cfg(not(feature = "console"))]
fn colorize(line: &str, _level: LogLevel) -> String {
    line.to_string()
}
