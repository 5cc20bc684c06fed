//! The eight DK limit checks over an employee's schedule.
//!
//! | Kodas   | Tikrinimas                         | DK straipsnis        |
//! |---------|------------------------------------|----------------------|
//! | ALERT_1 | Pamaina > 12h (be pietų)           | DK 114 str. 2 d.     |
//! | ALERT_2 | Per 7 d. > 48h                     | DK 114 str. 1 d.     |
//! | ALERT_3 | Su papildomu darbu per 7 d. > 60h  | DK 114 str. 2 d.     |
//! | ALERT_4 | > 6 darbo dienos iš eilės          | DK 114 str. 4 d.     |
//! | ALERT_5 | 2 pamainos iš eilės (be poilsio)   | DK 122 str. 2 d.     |
//! | ALERT_6 | Poilsis tarp pamainų < 11h         | DK 122 str. 2 d. 3 p.|
//! | ALERT_7 | Savaitinis poilsis < 35h           | DK 122 str. 2 d. 3 p.|
//! | ALERT_8 | Nakties vidurkis > 8h/d.           | DK 117 str.          |
//!
//! Every limit is a strict comparison: working exactly at the boundary
//! raises nothing.

use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculation::{
    calculate_average_night_minutes_per_day, calculate_rest_between_entries,
    calculate_shift_duration, minutes_from_midnight,
};
use crate::config::limits::{
    MAX_AVG_HOURS_PER_7_DAYS, MAX_CONSECUTIVE_WORK_DAYS, MAX_HOURS_PER_SHIFT,
    MAX_HOURS_WITH_ADDITIONAL_7_DAYS, MAX_NIGHT_AVG_HOURS_PER_DAY, MIN_REST_BETWEEN_SHIFTS_HOURS,
    MIN_WEEKLY_REST_HOURS,
};
use crate::models::{AlertCode, Employee, ScheduleEntry, Severity, ValidationAlert};

/// Runs all eight checks over the entries of one employee.
///
/// Entries are sorted by date internally, so callers may pass them in
/// any order. Alerts from a single rule are deduplicated per window
/// start date.
pub fn validate_schedule(entries: &[ScheduleEntry], employee: &Employee) -> Vec<ValidationAlert> {
    let mut sorted: Vec<&ScheduleEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.data);

    let mut alerts = Vec::new();
    alerts.extend(validate_shift_length(&sorted, employee));
    alerts.extend(validate_weekly_hours(&sorted, employee));
    alerts.extend(validate_weekly_hours_with_additional(&sorted, employee));
    alerts.extend(validate_consecutive_work_days(&sorted, employee));
    alerts.extend(validate_rest_between_shifts(&sorted, employee));
    alerts.extend(validate_weekly_rest(&sorted, employee));
    alerts.extend(validate_night_average(entries, employee));

    tracing::debug!(
        darbuotojas = %employee.id,
        entries = entries.len(),
        alerts = alerts.len(),
        "schedule validated"
    );

    alerts
}

fn hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

/// ALERT_1: shift longer than 12 hours, lunch excluded (DK 114 str. 2 d.).
fn validate_shift_length(entries: &[&ScheduleEntry], employee: &Employee) -> Vec<ValidationAlert> {
    let max_minutes = MAX_HOURS_PER_SHIFT * 60;
    let mut alerts = Vec::new();

    for entry in entries {
        let duration = calculate_shift_duration(entry);
        if duration > max_minutes {
            alerts.push(ValidationAlert {
                tipas: Severity::Klaida,
                kodas: AlertCode::Alert1,
                pranesimas: format!(
                    "Pamainos trukmė ({:.1} val.) viršija {MAX_HOURS_PER_SHIFT} val. ribą",
                    hours(duration)
                ),
                dk_straipsnis: "DK 114 str. 2 d.".to_string(),
                data: Some(entry.data),
                darbuotojo_id: employee.id,
            });
        }
    }

    alerts
}

/// Sliding 7-day totals anchored at every entry date, deduplicated by
/// the window start. Shared by ALERT_2 and ALERT_3.
fn weekly_windows_over(
    entries: &[&ScheduleEntry],
    max_minutes: i64,
    mut on_violation: impl FnMut(NaiveDate, i64) -> ValidationAlert,
) -> Vec<ValidationAlert> {
    let mut reported: HashSet<NaiveDate> = HashSet::new();
    let mut alerts = Vec::new();

    for anchor in entries {
        let Some(window_end) = anchor.data.checked_add_days(Days::new(6)) else {
            continue;
        };
        let total: i64 = entries
            .iter()
            .filter(|e| e.data >= anchor.data && e.data <= window_end)
            .map(|e| calculate_shift_duration(e))
            .sum();
        if total > max_minutes && reported.insert(anchor.data) {
            alerts.push(on_violation(anchor.data, total));
        }
    }

    alerts
}

/// ALERT_2: more than 48 hours in any 7-day window (DK 114 str. 1 d.).
fn validate_weekly_hours(entries: &[&ScheduleEntry], employee: &Employee) -> Vec<ValidationAlert> {
    weekly_windows_over(entries, MAX_AVG_HOURS_PER_7_DAYS * 60, |data, total| {
        ValidationAlert {
            tipas: Severity::Klaida,
            kodas: AlertCode::Alert2,
            pranesimas: format!(
                "Per 7 dienų laikotarpį nuo {data} dirbta {:.1} val. (max {MAX_AVG_HOURS_PER_7_DAYS} val.)",
                hours(total)
            ),
            dk_straipsnis: "DK 114 str. 1 d.".to_string(),
            data: Some(data),
            darbuotojo_id: employee.id,
        }
    })
}

/// ALERT_3: more than 60 hours in any 7-day window counting additional
/// work (DK 114 str. 2 d.).
fn validate_weekly_hours_with_additional(
    entries: &[&ScheduleEntry],
    employee: &Employee,
) -> Vec<ValidationAlert> {
    weekly_windows_over(
        entries,
        MAX_HOURS_WITH_ADDITIONAL_7_DAYS * 60,
        |data, total| ValidationAlert {
            tipas: Severity::Klaida,
            kodas: AlertCode::Alert3,
            pranesimas: format!(
                "Per 7 dienų laikotarpį nuo {data} su papildomu darbu dirbta {:.1} val. (max {MAX_HOURS_WITH_ADDITIONAL_7_DAYS} val.)",
                hours(total)
            ),
            dk_straipsnis: "DK 114 str. 2 d.".to_string(),
            data: Some(data),
            darbuotojo_id: employee.id,
        },
    )
}

/// ALERT_4: more than 6 consecutive work days (DK 114 str. 4 d.).
///
/// A work day is a DARBAS entry with a positive worked duration. The
/// streak continues only across calendar-adjacent entries; any other
/// entry type breaks it.
fn validate_consecutive_work_days(
    entries: &[&ScheduleEntry],
    employee: &Employee,
) -> Vec<ValidationAlert> {
    let mut alerts = Vec::new();
    let mut consecutive = 0u32;
    let mut streak_start: Option<NaiveDate> = None;

    for (i, entry) in entries.iter().enumerate() {
        let is_work = entry.tipas.is_darbas() && calculate_shift_duration(entry) > 0;

        if is_work {
            if consecutive == 0 {
                streak_start = Some(entry.data);
            }

            if i > 0 {
                let diff = entry
                    .data
                    .signed_duration_since(entries[i - 1].data)
                    .num_days();
                if diff == 1 {
                    consecutive += 1;
                } else {
                    consecutive = 1;
                    streak_start = Some(entry.data);
                }
            } else {
                consecutive = 1;
            }

            if consecutive > MAX_CONSECUTIVE_WORK_DAYS {
                let nuo = streak_start.unwrap_or(entry.data);
                alerts.push(ValidationAlert {
                    tipas: Severity::Klaida,
                    kodas: AlertCode::Alert4,
                    pranesimas: format!(
                        "{consecutive} darbo dienos iš eilės nuo {nuo} (max {MAX_CONSECUTIVE_WORK_DAYS})"
                    ),
                    dk_straipsnis: "DK 114 str. 4 d.".to_string(),
                    data: Some(entry.data),
                    darbuotojo_id: employee.id,
                });
            }
        } else {
            consecutive = 0;
            streak_start = None;
        }
    }

    alerts
}

/// ALERT_5 and ALERT_6: rest between consecutive shifts.
///
/// ALERT_5 fires when there is no rest at all (shifts touch or
/// overlap); ALERT_6 when rest exists but is shorter than 11 hours
/// (DK 122 str. 2 d. 3 p.).
fn validate_rest_between_shifts(
    entries: &[&ScheduleEntry],
    employee: &Employee,
) -> Vec<ValidationAlert> {
    let min_rest = MIN_REST_BETWEEN_SHIFTS_HOURS * 60;
    let work_entries: Vec<&&ScheduleEntry> =
        entries.iter().filter(|e| e.has_shift_times()).collect();
    let mut alerts = Vec::new();

    for pair in work_entries.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let Some(rest) = calculate_rest_between_entries(prev, curr) else {
            continue;
        };

        if rest <= 0 {
            alerts.push(ValidationAlert {
                tipas: Severity::Klaida,
                kodas: AlertCode::Alert5,
                pranesimas: format!(
                    "Dvi pamainos iš eilės be poilsio: {} ir {}",
                    prev.data, curr.data
                ),
                dk_straipsnis: "DK 122 str. 2 d.".to_string(),
                data: Some(curr.data),
                darbuotojo_id: employee.id,
            });
        } else if rest < min_rest {
            alerts.push(ValidationAlert {
                tipas: Severity::Klaida,
                kodas: AlertCode::Alert6,
                pranesimas: format!(
                    "Poilsis tarp pamainų tik {:.1} val. (min. {MIN_REST_BETWEEN_SHIFTS_HOURS} val.): {} → {}",
                    hours(rest),
                    prev.data,
                    curr.data
                ),
                dk_straipsnis: "DK 122 str. 2 d. 3 p.".to_string(),
                data: Some(curr.data),
                darbuotojo_id: employee.id,
            });
        }
    }

    alerts
}

/// A work interval on the absolute civil-minute axis.
struct WorkInterval {
    start: i64,
    end: i64,
}

fn absolute_minutes(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) * 24 * 60
}

/// ALERT_7: longest uninterrupted rest in any 7-day window below 35
/// hours (DK 122 str. 2 d. 3 p.).
///
/// Shifts are projected onto an absolute minute axis, midnight-crossing
/// shifts ending on the following day. Within each window the longest
/// gap is the largest of: the lead before the first shift, the gaps
/// between shifts, and the tail after the last shift.
fn validate_weekly_rest(entries: &[&ScheduleEntry], employee: &Employee) -> Vec<ValidationAlert> {
    let min_weekly_rest = MIN_WEEKLY_REST_HOURS * 60;
    let mut alerts = Vec::new();

    if entries.len() < 7 {
        return alerts;
    }

    let mut work_intervals: Vec<WorkInterval> = entries
        .iter()
        .filter(|e| e.has_shift_times())
        .filter_map(|e| {
            let start_time = e.pamainos_pradzia?;
            let end_time = e.pamainos_pabaiga?;
            let day = absolute_minutes(e.data);
            let start = day + minutes_from_midnight(start_time);
            let mut end = day + minutes_from_midnight(end_time);
            if minutes_from_midnight(end_time) <= minutes_from_midnight(start_time) {
                end += 24 * 60;
            }
            Some(WorkInterval { start, end })
        })
        .collect();
    work_intervals.sort_by_key(|w| w.start);

    if work_intervals.is_empty() {
        return alerts;
    }

    let mut reported: HashSet<NaiveDate> = HashSet::new();

    for anchor in &entries[..entries.len() - 6] {
        let window_start = absolute_minutes(anchor.data);
        let window_end = window_start + 7 * 24 * 60;

        let in_window: Vec<&WorkInterval> = work_intervals
            .iter()
            .filter(|w| w.start < window_end && w.end > window_start)
            .collect();
        if in_window.is_empty() {
            continue;
        }

        let mut max_rest = in_window[0].start - window_start;
        for pair in in_window.windows(2) {
            max_rest = max_rest.max(pair[1].start - pair[0].end);
        }
        max_rest = max_rest.max(window_end - in_window[in_window.len() - 1].end);

        if max_rest < min_weekly_rest && reported.insert(anchor.data) {
            alerts.push(ValidationAlert {
                tipas: Severity::Ispejimas,
                kodas: AlertCode::Alert7,
                pranesimas: format!(
                    "Ilgiausias savaitinis poilsis tik {:.1} val. per 7 d. nuo {} (min. {MIN_WEEKLY_REST_HOURS} val.)",
                    hours(max_rest),
                    anchor.data
                ),
                dk_straipsnis: "DK 122 str. 2 d. 3 p.".to_string(),
                data: Some(anchor.data),
                darbuotojo_id: employee.id,
            });
        }
    }

    alerts
}

/// ALERT_8: average night work above 8 hours per night-work day
/// (DK 117 str.). The night window itself is 8 hours, so a per-day
/// average can reach the limit but not exceed it.
fn validate_night_average(entries: &[ScheduleEntry], employee: &Employee) -> Vec<ValidationAlert> {
    let avg_minutes = calculate_average_night_minutes_per_day(entries);

    if avg_minutes > Decimal::from(MAX_NIGHT_AVG_HOURS_PER_DAY * 60) {
        vec![ValidationAlert {
            tipas: Severity::Ispejimas,
            kodas: AlertCode::Alert8,
            pranesimas: format!(
                "Nakties darbo vidurkis {:.1} val./d. viršija {MAX_NIGHT_AVG_HOURS_PER_DAY} val./d. ribą",
                (avg_minutes / Decimal::from(60)).to_f64().unwrap_or(0.0)
            ),
            dk_straipsnis: "DK 117 str.".to_string(),
            data: None,
            darbuotojo_id: employee.id,
        }]
    } else {
        Vec::new()
    }
}
