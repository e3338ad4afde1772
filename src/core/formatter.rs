//! Line rendering
//!
//! Every entry becomes exactly one CRLF-terminated string:
//!
//! `HH:MM:SS.mmm[<ORIGIN_HEX>] <LVL> <parts...>\r\n`
//!
//! Rendering never fails. Values that cannot be shown degrade to empty or
//! placeholder text.

use super::log_entry::{ErrorPart, LogEntry, MessagePart};
use super::timestamp::format_line_time;
use std::fmt::Write;

pub const LINE_BREAK: &str = "\r\n";

/// Render an entry to its output line, including the trailing CRLF.
pub fn render(entry: &LogEntry) -> String {
    let mut line = String::with_capacity(64);
    line.push_str(&format_line_time(entry.timestamp_millis()));
    // Writing into a String cannot fail
    let _ = write!(line, "[{:X}] {} ", entry.origin_id(), entry.level().code());

    for part in entry.parts() {
        render_part(&mut line, part);
    }

    line.push_str(LINE_BREAK);
    line
}

fn render_part(out: &mut String, part: &MessagePart) {
    match part {
        MessagePart::Text(text) => out.push_str(text),
        MessagePart::Bytes(bytes) => {
            out.push_str("0x");
            out.push_str(&hex_encode(bytes.as_deref()));
        }
        MessagePart::Error(error) => render_error(out, error),
    }
}

fn render_error(out: &mut String, error: &ErrorPart) {
    out.push_str(error.description());
    if let Some(offset) = error.offset() {
        let _ = write!(out, ", offset:{}", offset);
    }
    for frame in error.frames() {
        out.push_str(LINE_BREAK);
        out.push_str(frame);
    }
}

/// Lowercase hex, two digits per byte. Empty or absent input gives `""`.
pub fn hex_encode(bytes: Option<&[u8]>) -> String {
    let Some(bytes) = bytes else {
        return String::new();
    };
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(hex, "{:02x}", byte);
    }
    hex
}
