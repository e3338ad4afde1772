//! Property-based tests for daylog using proptest

use daylog::core::formatter::{hex_encode, render};
use daylog::core::queue::SubmissionQueue;
use daylog::core::timestamp::{day_number, MILLIS_PER_DAY};
use daylog::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Error),
        Just(LogLevel::Warning),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Panic),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Unknown ids fall back to INF, known ids round-trip
    #[test]
    fn test_from_id_total(id in any::<u8>()) {
        let level = LogLevel::from_id(id);
        if id <= 4 {
            prop_assert_eq!(level.id(), id);
        } else {
            prop_assert_eq!(level, LogLevel::Info);
        }
    }

    /// Filtering compares ids literally
    #[test]
    fn test_filter_matches_id_order(level in any_level(), threshold in any_level()) {
        prop_assert_eq!(level.admits(threshold), level.id() <= threshold.id());
    }

    /// Codes parse back to the same level
    #[test]
    fn test_code_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.code().parse().unwrap();
        prop_assert_eq!(parsed, level);
        prop_assert_eq!(level.to_string().len(), 3);
    }
}

// ============================================================================
// Rendering Tests
// ============================================================================

proptest! {
    #[test]
    fn test_hex_encoding_shape(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let hex = hex_encode(Some(bytes.as_slice()));
        prop_assert_eq!(hex.len(), bytes.len() * 2);
        prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

        let decoded: Vec<u8> = (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
            .collect();
        prop_assert_eq!(decoded, bytes);
    }

    /// Text without line breaks always renders to exactly one line
    #[test]
    fn test_render_single_line(
        level in any_level(),
        origin in 1u64..u64::MAX,
        texts in prop::collection::vec("[^\r\n]{0,20}", 0..5),
    ) {
        let ts = 1_736_332_245_123i64;
        let entry = LogEntry::with_origin(level, origin, ts, texts.concat());

        let line = render(&entry);
        let expected_prefix = format!("[{:X}] {} ", origin, level.code());
        prop_assert!(line.ends_with("\r\n"));
        prop_assert_eq!(line.matches("\r\n").count(), 1);
        prop_assert!(line.contains(&expected_prefix));
    }
}

// ============================================================================
// Timestamp Tests
// ============================================================================

proptest! {
    /// Day buckets never go backwards and move by at most one per day
    #[test]
    fn test_day_number_monotonic(ts in 0i64..4_102_444_800_000, delta in 0i64..MILLIS_PER_DAY) {
        let a = day_number(ts);
        let b = day_number(ts + delta);
        prop_assert!(b >= a);
        prop_assert!(b - a <= 1);
    }
}

// ============================================================================
// Queue Tests
// ============================================================================

proptest! {
    #[test]
    fn test_queue_is_fifo(values in prop::collection::vec(any::<u32>(), 0..200)) {
        let queue = SubmissionQueue::new();
        for (i, v) in values.iter().enumerate() {
            queue.push(LogEntry::with_origin(LogLevel::Info, 1, i as i64, *v));
        }
        prop_assert_eq!(queue.len(), values.len());

        for (i, v) in values.iter().enumerate() {
            let entry = queue.pop().unwrap();
            prop_assert_eq!(entry.timestamp_millis(), i as i64);
            prop_assert_eq!(entry.parts(), &[MessagePart::from(*v)][..]);
        }
        prop_assert!(queue.is_empty());
    }
}
