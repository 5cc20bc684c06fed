//! Statutory limits of the Lithuanian Labour Code (DK).
//!
//! Each constant cites the DK article it implements. These are fixed
//! national reference data: the engine consumes them but never mutates
//! or persists them.

/// Max shift length in hours, lunch break excluded (DK 114 str. 2 d.).
pub const MAX_HOURS_PER_SHIFT: i64 = 12;

/// Max average work time over any 7 consecutive days, overtime included,
/// in hours (DK 114 str. 1 d.).
pub const MAX_AVG_HOURS_PER_7_DAYS: i64 = 48;

/// Max work time over any 7 consecutive days with overtime AND additional
/// work, in hours (DK 114 str. 2 d.).
pub const MAX_HOURS_WITH_ADDITIONAL_7_DAYS: i64 = 60;

/// Max consecutive work days within 7 consecutive days (DK 114 str. 4 d.).
pub const MAX_CONSECUTIVE_WORK_DAYS: u32 = 6;

/// Min uninterrupted rest between shifts, in hours (DK 122 str. 2 d. 3 p.).
pub const MIN_REST_BETWEEN_SHIFTS_HOURS: i64 = 11;

/// Min uninterrupted weekly rest, in hours (DK 122 str. 2 d. 3 p.).
pub const MIN_WEEKLY_REST_HOURS: i64 = 35;

/// Min lunch break, in minutes (DK 122 str. 2 d. 2 p.).
pub const MIN_LUNCH_BREAK_MINUTES: i64 = 30;

/// Max lunch break, in minutes (DK 122 str. 2 d. 2 p.).
pub const MAX_LUNCH_BREAK_MINUTES: i64 = 120;

/// Max work time before the lunch break, in hours (DK 122 str. 2 d. 2 p.).
pub const MAX_WORK_BEFORE_LUNCH_HOURS: i64 = 5;

/// Hour at which night time starts (DK 117 str.).
pub const NIGHT_START_HOUR: u32 = 22;

/// Hour at which night time ends (DK 117 str.).
pub const NIGHT_END_HOUR: u32 = 6;

/// Max average night work per day over 3 months, in hours (DK 117 str.).
pub const MAX_NIGHT_AVG_HOURS_PER_DAY: i64 = 8;

/// Max overtime per 7-day period, in hours (DK 119 str.).
pub const MAX_OVERTIME_PER_7_DAYS: i64 = 8;

/// Max overtime per 7 days with the employee's written consent, in hours
/// (DK 119 str.).
pub const MAX_OVERTIME_WITH_CONSENT_7_DAYS: i64 = 12;

/// Max overtime per year, in hours (DK 119 str.).
pub const MAX_OVERTIME_PER_YEAR: i64 = 180;

/// Pre-holiday work day shortening, in hours (DK 112 str. 6 d.).
pub const PRE_HOLIDAY_REDUCTION_HOURS: i64 = 1;

/// Standard weekly work-time norm, in hours (DK 112 str.).
pub const DEFAULT_WEEKLY_NORM: i64 = 40;

/// Default lunch break, in minutes.
pub const DEFAULT_LUNCH_BREAK_MINUTES: i64 = 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_night_window_is_eight_hours() {
        let width = (24 - NIGHT_START_HOUR) + NIGHT_END_HOUR;
        assert_eq!(width, 8);
    }

    #[test]
    fn test_shift_cap_below_weekly_caps() {
        assert!(MAX_HOURS_PER_SHIFT < MAX_AVG_HOURS_PER_7_DAYS);
        assert!(MAX_AVG_HOURS_PER_7_DAYS < MAX_HOURS_WITH_ADDITIONAL_7_DAYS);
    }

    #[test]
    fn test_lunch_bounds_ordered() {
        assert!(MIN_LUNCH_BREAK_MINUTES < DEFAULT_LUNCH_BREAK_MINUTES);
        assert!(DEFAULT_LUNCH_BREAK_MINUTES < MAX_LUNCH_BREAK_MINUTES);
    }
}
