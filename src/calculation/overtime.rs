//! Overtime and under-worked norm over an accounting period
//! (DK 119 str.).

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::norm::calculate_period_norm;
use crate::calculation::shift::calculate_shift_duration;
use crate::models::{Employee, ScheduleEntry};

/// Overtime position of an employee at the end of an accounting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeResult {
    /// The period norm in minutes.
    pub laikotarpio_norma: Decimal,
    /// Actually worked minutes in the period.
    pub faktiskai_dirbta: i64,
    /// Minutes worked above the norm, zero if under.
    pub virsvalandziai: Decimal,
    /// Minutes short of the norm, zero if over.
    pub neisdirbta_norma: Decimal,
}

/// Settles worked time against the norm of the accounting period
/// spanning `period_start` through `period_end` inclusive.
///
/// The norm covers every calendar month the two dates touch. Worked
/// time sums over all entries passed in; callers supply the entries of
/// the period being settled. Under aggregated accounting (DK 115 str.)
/// overtime exists only once the whole period is settled; at most one
/// of `virsvalandziai` and `neisdirbta_norma` is non-zero.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use dk_engine::calculation::calculate_overtime_for_period;
///
/// let employee = dk_engine::models::Employee {
///     id: uuid::Uuid::new_v4(),
///     vardas: "Jonas".into(),
///     pavarde: "Jonaitis".into(),
///     pareigos: "Operatorius".into(),
///     etatas: Decimal::ONE,
///     savaitine_norma: Decimal::from(40),
///     darbo_sutarties_pradzia: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     sumine_apskaita: true,
///     apskaitinis_laikotarpis_menesiai: 1,
/// };
/// let result = calculate_overtime_for_period(
///     &[],
///     &employee,
///     chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     chrono::NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// );
/// assert_eq!(result.neisdirbta_norma, Decimal::from(10_080));
/// ```
pub fn calculate_overtime_for_period(
    entries: &[ScheduleEntry],
    employee: &Employee,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> OvertimeResult {
    let months = ((period_end.year() - period_start.year()) * 12
        + period_end.month() as i32
        - period_start.month() as i32
        + 1)
        .max(0) as u32;

    let laikotarpio_norma = calculate_period_norm(
        period_start.year(),
        period_start.month(),
        months,
        employee.savaitine_norma,
        employee.etatas,
    );

    let faktiskai_dirbta: i64 = entries.iter().map(calculate_shift_duration).sum();
    let diff = Decimal::from(faktiskai_dirbta) - laikotarpio_norma;

    OvertimeResult {
        laikotarpio_norma,
        faktiskai_dirbta,
        virsvalandziai: diff.max(Decimal::ZERO),
        neisdirbta_norma: (-diff).max(Decimal::ZERO),
    }
}

/// Worked minutes over the 7-day window starting at `window_start`.
///
/// Feeds the 48-hour and 60-hour weekly caps (DK 114 str.).
pub fn calculate_hours_in_7_days(entries: &[ScheduleEntry], window_start: NaiveDate) -> i64 {
    let Some(window_end) = window_start.checked_add_days(Days::new(6)) else {
        return 0;
    };
    entries
        .iter()
        .filter(|e| e.data >= window_start && e.data <= window_end)
        .map(calculate_shift_duration)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryType;
    use chrono::NaiveTime;
    use uuid::Uuid;

    fn make_employee() -> Employee {
        Employee {
            id: Uuid::new_v4(),
            vardas: "Jonas".to_string(),
            pavarde: "Jonaitis".to_string(),
            pareigos: "Operatorius".to_string(),
            etatas: Decimal::ONE,
            savaitine_norma: Decimal::from(40),
            darbo_sutarties_pradzia: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            sumine_apskaita: true,
            apskaitinis_laikotarpis_menesiai: 1,
        }
    }

    fn work_entry(date: NaiveDate, hours: u32) -> ScheduleEntry {
        ScheduleEntry {
            id: Uuid::new_v4(),
            darbuotojo_id: Uuid::new_v4(),
            data: date,
            tipas: EntryType::Darbas,
            pamainos_pradzia: NaiveTime::from_hms_opt(8, 0, 0),
            pamainos_pabaiga: NaiveTime::from_hms_opt(8 + hours, 0, 0),
            pietu_pertrauka_min: 0,
            neatvykimo_kodas: None,
            pastaba: None,
        }
    }

    fn full_month_of_work(year: i32, month: u32, hours: u32) -> Vec<ScheduleEntry> {
        crate::calendar::get_month_days(year, month)
            .into_iter()
            .filter(|d| {
                crate::calendar::is_weekday(*d) && !crate::config::is_holiday(*d)
            })
            .map(|d| work_entry(d, hours))
            .collect()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_exact_norm_has_no_overtime() {
        // 21 work days of 8 hours in January 2026 hits the norm exactly.
        let entries = full_month_of_work(2026, 1, 8);
        let result = calculate_overtime_for_period(
            &entries,
            &make_employee(),
            date(2026, 1, 1),
            date(2026, 1, 31),
        );
        assert_eq!(result.laikotarpio_norma, Decimal::from(10_080));
        assert_eq!(result.faktiskai_dirbta, 10_080);
        assert_eq!(result.virsvalandziai, Decimal::ZERO);
        assert_eq!(result.neisdirbta_norma, Decimal::ZERO);
    }

    #[test]
    fn test_overtime_above_norm() {
        // 9-hour days: one extra hour per work day.
        let entries = full_month_of_work(2026, 1, 9);
        let result = calculate_overtime_for_period(
            &entries,
            &make_employee(),
            date(2026, 1, 1),
            date(2026, 1, 31),
        );
        assert_eq!(result.virsvalandziai, Decimal::from(21 * 60));
        assert_eq!(result.neisdirbta_norma, Decimal::ZERO);
    }

    #[test]
    fn test_under_worked_norm() {
        let entries = full_month_of_work(2026, 1, 7);
        let result = calculate_overtime_for_period(
            &entries,
            &make_employee(),
            date(2026, 1, 1),
            date(2026, 1, 31),
        );
        assert_eq!(result.virsvalandziai, Decimal::ZERO);
        assert_eq!(result.neisdirbta_norma, Decimal::from(21 * 60));
    }

    #[test]
    fn test_multi_month_period_spans_year_boundary() {
        let result = calculate_overtime_for_period(
            &[],
            &make_employee(),
            date(2026, 12, 1),
            date(2027, 1, 31),
        );
        assert_eq!(result.laikotarpio_norma, Decimal::from(19_560));
    }

    #[test]
    fn test_mid_month_dates_still_span_whole_months() {
        // The norm is monthly; any day inside a month pulls the whole
        // month into the period.
        let result = calculate_overtime_for_period(
            &[],
            &make_employee(),
            date(2026, 1, 15),
            date(2026, 2, 10),
        );
        assert_eq!(result.laikotarpio_norma, Decimal::from(10_080 + 9_120));
    }

    #[test]
    fn test_hours_in_7_days() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let entries: Vec<ScheduleEntry> = (0..8)
            .map(|offset| {
                work_entry(start.checked_add_days(Days::new(offset)).unwrap(), 8)
            })
            .collect();
        // Only the first seven days fall inside the window.
        assert_eq!(calculate_hours_in_7_days(&entries, start), 7 * 480);
    }
}
