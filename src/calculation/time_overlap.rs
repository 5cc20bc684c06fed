//! Time-of-day arithmetic primitives.
//!
//! All calculations run on minutes from midnight over timezone-naive
//! civil times. A shift whose end is not after its start is taken to
//! cross midnight into the next day.

use chrono::{NaiveTime, Timelike};

use crate::config::limits::{NIGHT_END_HOUR, NIGHT_START_HOUR};
use crate::error::{EngineError, EngineResult};

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses a "HH:MM" string into minutes from midnight.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] if the string is not a valid
/// 24-hour "HH:MM" time.
///
/// # Example
///
/// ```
/// use dk_engine::calculation::time_to_minutes;
///
/// assert_eq!(time_to_minutes("08:30").unwrap(), 510);
/// assert!(time_to_minutes("24:00").is_err());
/// ```
pub fn time_to_minutes(value: &str) -> EngineResult<i64> {
    let time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EngineError::InvalidTime {
        value: value.to_string(),
    })?;
    Ok(minutes_from_midnight(time))
}

/// Formats minutes from midnight as "HH:MM", wrapping modulo 24 hours.
///
/// Negative inputs wrap backwards: -60 formats as "23:00".
pub fn minutes_to_time(minutes: i64) -> String {
    let wrapped = ((minutes % MINUTES_PER_DAY) + MINUTES_PER_DAY) % MINUTES_PER_DAY;
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Converts a time of day to minutes from midnight. Seconds are ignored.
pub fn minutes_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Duration of a shift in minutes, where an end at or before the start
/// means the shift crosses midnight.
///
/// Equal start and end yield a full 24 hours at this level; callers
/// that treat equal times as an empty shift guard before calling.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use dk_engine::calculation::shift_duration_minutes;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// assert_eq!(shift_duration_minutes(t(8, 0), t(17, 0)), 540);
/// assert_eq!(shift_duration_minutes(t(22, 0), t(6, 0)), 480);
/// ```
pub fn shift_duration_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let start_min = minutes_from_midnight(start);
    let end_min = minutes_from_midnight(end);
    if end_min > start_min {
        end_min - start_min
    } else {
        MINUTES_PER_DAY - start_min + end_min
    }
}

/// Length of the intersection of two half-open minute intervals.
pub fn overlap_minutes(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> i64 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0)
}

/// Minutes of a shift that fall inside the night window, 22:00-06:00
/// (DK 117 str. 2 d.).
///
/// A midnight-crossing shift is split into its evening and morning
/// segments and each is intersected with the matching half of the
/// window. Equal start and end count as an empty shift, not a full day.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use dk_engine::calculation::night_minutes;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// // The whole night window
/// assert_eq!(night_minutes(t(22, 0), t(6, 0)), 480);
/// // A day shift touches none of it
/// assert_eq!(night_minutes(t(8, 0), t(17, 0)), 0);
/// ```
pub fn night_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let start_min = minutes_from_midnight(start);
    let end_min = minutes_from_midnight(end);
    if start_min == end_min {
        return 0;
    }

    let night_start = i64::from(NIGHT_START_HOUR) * 60;
    let night_end = i64::from(NIGHT_END_HOUR) * 60;

    if end_min > start_min {
        overlap_minutes(start_min, end_min, night_start, MINUTES_PER_DAY)
            + overlap_minutes(start_min, end_min, 0, night_end)
    } else {
        // Evening segment up to midnight, morning segment from midnight.
        overlap_minutes(start_min, MINUTES_PER_DAY, night_start, MINUTES_PER_DAY)
            + overlap_minutes(0, end_min, 0, night_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("08:30").unwrap(), 510);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_time_to_minutes_rejects_garbage() {
        assert!(time_to_minutes("24:00").is_err());
        assert!(time_to_minutes("8h30").is_err());
        assert!(time_to_minutes("").is_err());
        assert!(time_to_minutes("12:60").is_err());
    }

    #[test]
    fn test_minutes_to_time_wraps() {
        assert_eq!(minutes_to_time(0), "00:00");
        assert_eq!(minutes_to_time(510), "08:30");
        assert_eq!(minutes_to_time(1440), "00:00");
        assert_eq!(minutes_to_time(1500), "01:00");
        assert_eq!(minutes_to_time(-60), "23:00");
    }

    #[test]
    fn test_shift_duration_same_day() {
        assert_eq!(shift_duration_minutes(time(8, 0), time(17, 0)), 540);
        assert_eq!(shift_duration_minutes(time(0, 0), time(23, 59)), 1439);
    }

    #[test]
    fn test_shift_duration_crosses_midnight() {
        assert_eq!(shift_duration_minutes(time(22, 0), time(6, 0)), 480);
        assert_eq!(shift_duration_minutes(time(23, 30), time(0, 30)), 60);
    }

    #[test]
    fn test_shift_duration_equal_times_is_full_day() {
        assert_eq!(shift_duration_minutes(time(9, 0), time(9, 0)), 1440);
    }

    #[test]
    fn test_overlap_minutes() {
        assert_eq!(overlap_minutes(0, 100, 50, 150), 50);
        assert_eq!(overlap_minutes(0, 100, 100, 200), 0);
        assert_eq!(overlap_minutes(0, 100, 200, 300), 0);
        assert_eq!(overlap_minutes(50, 60, 0, 100), 10);
    }

    #[test]
    fn test_night_minutes_full_window() {
        assert_eq!(night_minutes(time(22, 0), time(6, 0)), 480);
    }

    #[test]
    fn test_night_minutes_day_shift() {
        assert_eq!(night_minutes(time(8, 0), time(17, 0)), 0);
    }

    #[test]
    fn test_night_minutes_evening_only() {
        assert_eq!(night_minutes(time(20, 0), time(23, 0)), 60);
    }

    #[test]
    fn test_night_minutes_morning_only() {
        assert_eq!(night_minutes(time(4, 0), time(12, 0)), 120);
    }

    #[test]
    fn test_night_minutes_crossing_partial() {
        // 23:00-05:00: one hour before midnight, five after
        assert_eq!(night_minutes(time(23, 0), time(5, 0)), 360);
        // 21:00-07:00 covers the whole window
        assert_eq!(night_minutes(time(21, 0), time(7, 0)), 480);
    }

    #[test]
    fn test_night_minutes_equal_times_is_zero() {
        assert_eq!(night_minutes(time(0, 0), time(0, 0)), 0);
        assert_eq!(night_minutes(time(23, 0), time(23, 0)), 0);
    }

    proptest! {
        #[test]
        fn prop_night_minutes_bounded(
            sh in 0u32..24, sm in 0u32..60,
            eh in 0u32..24, em in 0u32..60,
        ) {
            let n = night_minutes(time(sh, sm), time(eh, em));
            prop_assert!((0..=480).contains(&n));
        }

        #[test]
        fn prop_duration_and_reverse_complement(
            sh in 0u32..24, sm in 0u32..60,
            eh in 0u32..24, em in 0u32..60,
        ) {
            let start = time(sh, sm);
            let end = time(eh, em);
            prop_assume!(start != end);
            let forward = shift_duration_minutes(start, end);
            let backward = shift_duration_minutes(end, start);
            prop_assert_eq!(forward + backward, MINUTES_PER_DAY);
        }

        #[test]
        fn prop_minutes_round_trip(m in 0i64..1440) {
            prop_assert_eq!(time_to_minutes(&minutes_to_time(m)).unwrap(), m);
        }
    }
}
