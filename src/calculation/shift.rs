//! Shift duration and inter-shift rest calculations.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::calculation::time_overlap::{minutes_from_midnight, shift_duration_minutes};
use crate::models::ScheduleEntry;

/// Worked minutes of a schedule entry: shift length minus the lunch
/// break.
///
/// Returns 0 for anything that is not a work entry with both shift
/// times, and for a shift whose start equals its end. A lunch break
/// longer than the shift itself produces a negative result, which the
/// callers carry through into the balance.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use uuid::Uuid;
/// use dk_engine::calculation::calculate_shift_duration;
/// use dk_engine::models::{EntryType, ScheduleEntry};
///
/// let entry = ScheduleEntry {
///     id: Uuid::new_v4(),
///     darbuotojo_id: Uuid::new_v4(),
///     data: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     tipas: EntryType::Darbas,
///     pamainos_pradzia: NaiveTime::from_hms_opt(8, 0, 0),
///     pamainos_pabaiga: NaiveTime::from_hms_opt(17, 0, 0),
///     pietu_pertrauka_min: 60,
///     neatvykimo_kodas: None,
///     pastaba: None,
/// };
/// assert_eq!(calculate_shift_duration(&entry), 480);
/// ```
pub fn calculate_shift_duration(entry: &ScheduleEntry) -> i64 {
    let (Some(start), Some(end)) = (entry.pamainos_pradzia, entry.pamainos_pabaiga) else {
        return 0;
    };
    if !entry.tipas.is_darbas() {
        return 0;
    }
    if start == end {
        return 0;
    }

    let worked = shift_duration_minutes(start, end) - entry.pietu_pertrauka_min;
    if worked < 0 {
        tracing::warn!(
            entry_id = %entry.id,
            data = %entry.data,
            lunch_minutes = entry.pietu_pertrauka_min,
            "lunch break exceeds shift length"
        );
    }
    worked
}

/// Rest minutes between the end of one shift and the start of the next,
/// as a plain datetime difference. Negative when the shifts overlap.
pub fn calculate_rest_between_shifts(
    prev_end: NaiveTime,
    prev_end_date: NaiveDate,
    curr_start: NaiveTime,
    curr_start_date: NaiveDate,
) -> i64 {
    let end = NaiveDateTime::new(prev_end_date, prev_end);
    let start = NaiveDateTime::new(curr_start_date, curr_start);
    start.signed_duration_since(end).num_minutes()
}

/// Rest minutes between two work entries, accounting for the previous
/// shift crossing midnight.
///
/// Returns `None` unless both entries are work entries with shift
/// times. A previous shift whose end is at or before its start ends on
/// the day after its entry date.
pub fn calculate_rest_between_entries(
    prev: &ScheduleEntry,
    curr: &ScheduleEntry,
) -> Option<i64> {
    if !prev.has_shift_times() || !curr.has_shift_times() {
        return None;
    }

    let prev_start = prev.pamainos_pradzia?;
    let prev_end = prev.pamainos_pabaiga?;
    let curr_start = curr.pamainos_pradzia?;

    let prev_end_date =
        if minutes_from_midnight(prev_end) <= minutes_from_midnight(prev_start) {
            prev.data.checked_add_days(Days::new(1))?
        } else {
            prev.data
        };

    Some(calculate_rest_between_shifts(
        prev_end,
        prev_end_date,
        curr_start,
        curr.data,
    ))
}
