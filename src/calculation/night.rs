//! Night-work minutes and night-worker classification (DK 117 str.).

use rust_decimal::Decimal;

use crate::calculation::time_overlap::night_minutes;
use crate::models::ScheduleEntry;

/// A shift counting as a night shift for classification: at least three
/// hours inside the night window (DK 117 str. 3 d.).
const NIGHT_SHIFT_THRESHOLD_MINUTES: i64 = 180;

/// Share of total work time that makes an employee a night worker.
const NIGHT_WORK_SHARE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Night minutes of a schedule entry, 22:00-06:00.
///
/// Zero for anything that is not a work entry with both shift times.
pub fn calculate_night_minutes(entry: &ScheduleEntry) -> i64 {
    if !entry.has_shift_times() {
        return 0;
    }
    match (entry.pamainos_pradzia, entry.pamainos_pabaiga) {
        (Some(start), Some(end)) => night_minutes(start, end),
        _ => 0,
    }
}

/// Classifies an employee as a night worker over a set of entries.
///
/// An employee is a night worker when more than half of their work
/// shifts include at least three night hours, or when at least a
/// quarter of their total worked time falls in the night window
/// (DK 117 str. 3 d.). An empty or shift-free schedule is never a
/// night worker.
pub fn is_night_worker(entries: &[ScheduleEntry]) -> bool {
    let shifts: Vec<&ScheduleEntry> =
        entries.iter().filter(|e| e.has_shift_times()).collect();
    if shifts.is_empty() {
        return false;
    }

    let night_shift_count = shifts
        .iter()
        .filter(|e| calculate_night_minutes(e) >= NIGHT_SHIFT_THRESHOLD_MINUTES)
        .count();
    if night_shift_count * 2 > shifts.len() {
        return true;
    }

    let total_worked: i64 = shifts
        .iter()
        .map(|e| super::calculate_shift_duration(e))
        .sum();
    if total_worked <= 0 {
        return false;
    }
    let total_night: i64 = shifts.iter().map(|e| calculate_night_minutes(e)).sum();

    Decimal::from(total_night) / Decimal::from(total_worked) >= NIGHT_WORK_SHARE
}

/// Average night minutes per day, counting only the days that have any
/// night minutes at all. Zero when no entry touches the night window.
pub fn calculate_average_night_minutes_per_day(entries: &[ScheduleEntry]) -> Decimal {
    let night_per_entry: Vec<i64> = entries
        .iter()
        .map(calculate_night_minutes)
        .filter(|&n| n > 0)
        .collect();
    if night_per_entry.is_empty() {
        return Decimal::ZERO;
    }

    let total: i64 = night_per_entry.iter().sum();
    Decimal::from(total) / Decimal::from(night_per_entry.len() as i64)
}
