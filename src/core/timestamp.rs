//! Timestamp utilities
//!
//! Entries carry epoch milliseconds. Everything rendered for humans (line
//! prefixes, file names, day buckets) is expressed in the local timezone.

use chrono::{DateTime, Local, Utc};

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// `HH:MM:SS.mmm`
const LINE_TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// `yyyy_MM_dd_HH_mm_ss_SSS`
const FILE_STAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S_%3f";

const LINE_TIME_PLACEHOLDER: &str = "??:??:??.???";

/// Current time as epoch milliseconds
#[inline]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn to_local(timestamp_millis: i64) -> Option<DateTime<Local>> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis).map(|utc| utc.with_timezone(&Local))
}

/// Local UTC offset in effect at the given instant, in milliseconds.
///
/// Falls back to zero for timestamps outside the representable range.
pub fn local_offset_millis(timestamp_millis: i64) -> i64 {
    to_local(timestamp_millis)
        .map(|local| i64::from(local.offset().local_minus_utc()) * 1000)
        .unwrap_or(0)
}

/// Local calendar day bucket used for file rotation.
pub fn day_number(timestamp_millis: i64) -> i64 {
    (timestamp_millis + local_offset_millis(timestamp_millis)).div_euclid(MILLIS_PER_DAY)
}

/// Line prefix time, e.g. `10:30:45.123`
pub fn format_line_time(timestamp_millis: i64) -> String {
    match to_local(timestamp_millis) {
        Some(local) => local.format(LINE_TIME_FORMAT).to_string(),
        None => LINE_TIME_PLACEHOLDER.to_string(),
    }
}

/// File name stamp, e.g. `2025_01_08_10_30_45_123`
pub fn format_file_stamp(timestamp_millis: i64) -> String {
    match to_local(timestamp_millis) {
        Some(local) => local.format(FILE_STAMP_FORMAT).to_string(),
        None => format!("{}", timestamp_millis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_millis() -> i64 {
        // 2025-01-08 10:30:45.123 local time
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            .timestamp_millis()
            + 123
    }

    #[test]
    fn test_line_time_format() {
        assert_eq!(format_line_time(fixed_millis()), "10:30:45.123");
    }

    #[test]
    fn test_line_time_pads_millis() {
        assert_eq!(format_line_time(fixed_millis() - 120), "10:30:45.003");
    }

    #[test]
    fn test_file_stamp_format() {
        assert_eq!(format_file_stamp(fixed_millis()), "2025_01_08_10_30_45_123");
    }

    #[test]
    fn test_out_of_range_degrades() {
        assert_eq!(format_line_time(i64::MAX), LINE_TIME_PLACEHOLDER);
        assert_eq!(local_offset_millis(i64::MAX), 0);
    }

    #[test]
    fn test_day_number_is_stable_within_a_local_day() {
        let start_of_day = Local
            .with_ymd_and_hms(2025, 1, 8, 0, 0, 0)
            .single()
            .expect("valid datetime")
            .timestamp_millis();
        let end_of_day = Local
            .with_ymd_and_hms(2025, 1, 8, 23, 59, 59)
            .single()
            .expect("valid datetime")
            .timestamp_millis()
            + 999;

        assert_eq!(day_number(start_of_day), day_number(end_of_day));
        assert_eq!(day_number(end_of_day + 1), day_number(start_of_day) + 1);
        assert_eq!(day_number(start_of_day - 1), day_number(start_of_day) - 1);
    }

    #[test]
    fn test_day_number_before_epoch() {
        // Euclidean division keeps pre-epoch buckets contiguous
        let t = -MILLIS_PER_DAY * 3 - local_offset_millis(-MILLIS_PER_DAY * 3);
        assert_eq!(day_number(t), -3);
    }
}
