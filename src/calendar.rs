//! Calendar utilities for work-time accounting.
//!
//! Work-day counting, pre-holiday reduction counting and month
//! enumeration over timezone-naive civil dates. Standard Gregorian
//! leap-year rules come from `chrono`.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::{self, get_holidays, is_pre_holiday};
use crate::error::{EngineError, EngineResult};

/// Parses a "YYYY-MM-DD" date string.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] if the string is malformed or
/// does not name a real calendar date.
///
/// # Example
///
/// ```
/// use dk_engine::calendar::parse_date;
///
/// assert!(parse_date("2026-01-05").is_ok());
/// assert!(parse_date("2026-02-30").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Returns true if the date falls on Monday through Friday.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dk_engine::calendar::is_weekday;
///
/// // 2026-01-05 is a Monday
/// assert!(is_weekday(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
/// // 2026-01-10 is a Saturday
/// assert!(!is_weekday(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()));
/// ```
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the first Sunday of the given month.
///
/// Used for Mother's Day (May) and Father's Day (June).
pub fn get_first_sunday_of_month(year: i32, month: u32) -> NaiveDate {
    config::first_sunday_of_month(year, month)
}

/// Counts the work days (Monday-Friday, holidays excluded) in a month.
///
/// A holiday landing on a Saturday or Sunday does not reduce the count,
/// since it was never counted as a work day.
pub fn get_work_days_in_month(year: i32, month: u32) -> u32 {
    let holidays = get_holidays(year);

    get_month_days(year, month)
        .into_iter()
        .filter(|day| is_weekday(*day) && !holidays.contains(day))
        .count() as u32
}

/// Counts the pre-holiday work days belonging to a month.
///
/// Each such day shortens the work day by one hour for full-time staff
/// (DK 112 str. 6 d.). A pre-holiday day can fall in the month before its
/// holiday (Dec 31 before Jan 1); the reduction belongs to the month the
/// pre-holiday day itself is in.
pub fn get_pre_holiday_reduction_hours(year: i32, month: u32) -> u32 {
    get_month_days(year, month)
        .into_iter()
        .filter(|day| is_pre_holiday(*day))
        .count() as u32
}

/// Returns every day of the month, in order.
pub fn get_month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let count = get_days_in_month_count(year, month);
    (1..=count)
        .map(|day| {
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap_or_else(|| panic!("invalid day {day} of {year}-{month:02}"))
        })
        .collect()
}

/// Returns the number of days in the month.
pub fn get_days_in_month_count(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| panic!("invalid month {year}-{month:02}"));
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .unwrap_or_else(|| panic!("invalid month {year}-{month:02}"));
    next_month.signed_duration_since(first).num_days() as u32
}
