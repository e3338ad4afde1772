//! Day-rotating file appender
//!
//! Rotation is driven by entry timestamps, not the wall clock: the file changes
//! when an entry's local day bucket differs from the one the current file was
//! opened for. Each new file is named after the entry that opened it:
//! `<name>_<yyyy_MM_dd_HH_mm_ss_SSS>.log`.
//!
//! Only the flush task touches an appender, so nothing here is synchronized.

use crate::core::config::LOG_EXTENSION;
use crate::core::error::{LoggerError, Result};
use crate::core::timestamp::{day_number, format_file_stamp};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct RotatingFileAppender {
    base_path: PathBuf,
    name: String,
    writer: Option<BufWriter<File>>,
    current_path: Option<PathBuf>,
    /// Day bucket of the last rotation; `None` until the first entry arrives
    current_day: Option<i64>,
    rotation_count: u64,
}

impl RotatingFileAppender {
    /// Create an appender. No file is opened until the first entry is seen.
    pub fn new(base_path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            name: name.into(),
            writer: None,
            current_path: None,
            current_day: None,
            rotation_count: 0,
        }
    }

    /// Path of the file that an entry with this timestamp would open
    #[must_use]
    pub fn file_path_for(&self, timestamp_millis: i64) -> PathBuf {
        self.base_path.join(format!(
            "{}_{}.{}",
            self.name,
            format_file_stamp(timestamp_millis),
            LOG_EXTENSION
        ))
    }

    /// Switch to a new file if the entry falls on a different local day.
    ///
    /// Returns `Ok(true)` when a new file was opened. A failed open still
    /// records the new day, so the appender stays without a file (and drops
    /// lines) until the next day change instead of retrying for every entry.
    pub fn maybe_rotate(&mut self, timestamp_millis: i64) -> Result<bool> {
        let day = day_number(timestamp_millis);
        if self.current_day == Some(day) {
            return Ok(false);
        }

        if let Err(e) = self.close() {
            eprintln!("[LOGGER WARNING] {}. Continuing with a new file.", e);
        }
        self.current_day = Some(day);
        self.rotation_count += 1;

        let path = self.file_path_for(timestamp_millis);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))?;

        self.writer = Some(BufWriter::new(file));
        self.current_path = Some(path);
        Ok(true)
    }

    /// Append a rendered line to the current file.
    ///
    /// Returns `Ok(false)` when no file is open; the line is dropped silently
    /// because the open failure was already reported.
    pub fn write(&mut self, line: &str) -> Result<bool> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(false);
        };
        writer.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::file_write(display_path(self.current_path.as_deref()), e)
        })?;
        Ok(true)
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::io_operation(
                    "flushing log file",
                    display_path(self.current_path.as_deref()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// Flush and release the current file, if any.
    ///
    /// The day bucket is kept, so entries from the same day keep being dropped
    /// rather than reopening a file.
    pub fn close(&mut self) -> Result<()> {
        let path = self.current_path.take();
        if let Some(mut writer) = self.writer.take() {
            writer
                .flush()
                .map_err(|e| LoggerError::file_close(display_path(path.as_deref()), e))?;
            // Dropping the writer releases the handle
        }
        Ok(())
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    #[must_use]
    pub fn current_day(&self) -> Option<i64> {
        self.current_day
    }

    /// Number of day changes seen, including ones whose open failed
    #[must_use]
    pub fn rotation_count(&self) -> u64 {
        self.rotation_count
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "<no file>".to_string())
}

impl Drop for RotatingFileAppender {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            // Best effort flush - ignore errors during drop
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::fs;
    use tempfile::tempdir;

    fn local_noon(year: i32, month: u32, day: u32) -> i64 {
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid datetime")
            .timestamp_millis()
    }

    fn log_files(dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().and_then(|x| x.to_str()) == Some("log"))
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_no_file_until_first_entry() {
        let dir = tempdir().unwrap();
        let appender = RotatingFileAppender::new(dir.path(), "app");

        assert!(!appender.is_open());
        assert_eq!(appender.current_day(), None);
        assert!(log_files(dir.path()).is_empty());
    }

    #[test]
    fn test_first_entry_opens_named_file() {
        let dir = tempdir().unwrap();
        let mut appender = RotatingFileAppender::new(dir.path(), "app");
        let ts = local_noon(2025, 1, 8) + 45_123;

        assert!(appender.maybe_rotate(ts).unwrap());
        let expected = dir.path().join("app_2025_01_08_12_00_45_123.log");
        assert_eq!(appender.current_path(), Some(expected.as_path()));
        assert!(expected.exists());
        assert_eq!(appender.current_day(), Some(day_number(ts)));
    }

    #[test]
    fn test_same_day_does_not_rotate() {
        let dir = tempdir().unwrap();
        let mut appender = RotatingFileAppender::new(dir.path(), "app");
        let noon = local_noon(2025, 3, 1);

        assert!(appender.maybe_rotate(noon).unwrap());
        assert!(!appender.maybe_rotate(noon + 1).unwrap());
        assert!(!appender.maybe_rotate(noon + 3 * 60 * 60 * 1000).unwrap());

        assert_eq!(appender.rotation_count(), 1);
        assert_eq!(log_files(dir.path()).len(), 1);
    }

    #[test]
    fn test_new_day_rotates_and_routes_lines() {
        let dir = tempdir().unwrap();
        let mut appender = RotatingFileAppender::new(dir.path(), "app");

        appender.maybe_rotate(local_noon(2025, 3, 1)).unwrap();
        assert!(appender.write("first\r\n").unwrap());

        assert!(appender.maybe_rotate(local_noon(2025, 3, 2)).unwrap());
        assert!(appender.write("second\r\n").unwrap());
        appender.flush().unwrap();

        let files = log_files(dir.path());
        assert_eq!(files.len(), 2);
        assert_eq!(fs::read_to_string(&files[0]).unwrap(), "first\r\n");
        assert_eq!(fs::read_to_string(&files[1]).unwrap(), "second\r\n");
        assert_eq!(appender.rotation_count(), 2);
    }

    #[test]
    fn test_open_failure_drops_lines_until_next_day() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let mut appender = RotatingFileAppender::new(&missing, "app");
        let day1 = local_noon(2025, 3, 1);

        let err = appender.maybe_rotate(day1).unwrap_err();
        assert!(matches!(err, LoggerError::FileOpen { .. }));
        assert!(!appender.is_open());
        assert!(!appender.write("lost\r\n").unwrap());

        // Same day: no retry
        assert!(!appender.maybe_rotate(day1 + 1000).unwrap());

        // Directory appears, next day opens normally
        fs::create_dir(&missing).unwrap();
        assert!(appender.maybe_rotate(local_noon(2025, 3, 2)).unwrap());
        assert!(appender.write("kept\r\n").unwrap());
        appender.close().unwrap();

        let files = log_files(&missing);
        assert_eq!(files.len(), 1);
        assert_eq!(fs::read_to_string(&files[0]).unwrap(), "kept\r\n");
    }

    #[test]
    fn test_close_releases_file_and_drops_writes() {
        let dir = tempdir().unwrap();
        let mut appender = RotatingFileAppender::new(dir.path(), "app");
        let noon = local_noon(2025, 3, 1);

        appender.maybe_rotate(noon).unwrap();
        appender.write("before\r\n").unwrap();
        appender.close().unwrap();

        assert!(!appender.is_open());
        assert!(!appender.maybe_rotate(noon + 1).unwrap());
        assert!(!appender.write("after\r\n").unwrap());

        let files = log_files(dir.path());
        assert_eq!(fs::read_to_string(&files[0]).unwrap(), "before\r\n");
    }
}
