//! Monthly work-time balance: worked time against the norm, night and
//! weekend/holiday work, and the absence summary.
//!
//! Overtime is settled here only for a one-month accounting period;
//! longer periods settle in the overtime calculator at period end
//! (DK 115 str.).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::night::calculate_night_minutes;
use crate::calculation::norm::calculate_monthly_norm;
use crate::calculation::shift::calculate_shift_duration;
use crate::calendar::is_weekday;
use crate::config::is_holiday;
use crate::models::{Employee, ScheduleEntry};

/// Per-code absence summary for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeatvykimoSuvestine {
    /// Timesheet marking code.
    pub kodas: String,
    /// Absence time in minutes: one pro-rated day norm per day.
    pub valandos: Decimal,
    /// Days absent under this code.
    pub dienos: u32,
}

/// The settled work-time picture of one employee month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBalance {
    /// The employee norm for the month, in minutes.
    pub menesio_norma: Decimal,
    /// Worked minutes across the entries.
    pub faktiskai_dirbta: i64,
    /// Minutes inside the 22:00-06:00 night window.
    pub nakties_valandos: i64,
    /// Minutes worked on Saturdays and Sundays.
    pub darbas_poilsio_dienomis: i64,
    /// Minutes worked on public holidays. A holiday falling on a
    /// weekend counts in both buckets.
    pub darbas_svenciu: i64,
    /// Overtime minutes. Non-zero only for a one-month accounting
    /// period.
    pub virsvalandziai: Decimal,
    /// Worked minus norm. Negative when under the norm.
    pub skirtumas: Decimal,
    /// Absence minutes and days, grouped by marking code in first-seen
    /// order.
    pub neatvykimai: Vec<NeatvykimoSuvestine>,
}

/// Settles one employee month over the month's entries.
///
/// Worked time, night minutes and the weekend/holiday buckets sum over
/// every entry passed in; callers supply the entries of the month the
/// norm is computed for. Each absence day contributes the employee's
/// pro-rated day norm (`dienos_norma * etatas`) to its code's summary.
pub fn calculate_monthly_balance(
    entries: &[ScheduleEntry],
    employee: &Employee,
    year: i32,
    month: u32,
) -> MonthlyBalance {
    let norm = calculate_monthly_norm(year, month, employee.savaitine_norma, employee.etatas);
    let menesio_norma = norm.norma_darbuotojui;

    let mut faktiskai_dirbta = 0i64;
    let mut nakties_valandos = 0i64;
    let mut darbas_poilsio_dienomis = 0i64;
    let mut darbas_svenciu = 0i64;

    for entry in entries {
        let shift_duration = calculate_shift_duration(entry);
        faktiskai_dirbta += shift_duration;
        nakties_valandos += calculate_night_minutes(entry);

        if entry.tipas.is_darbas() && shift_duration > 0 {
            if !is_weekday(entry.data) {
                darbas_poilsio_dienomis += shift_duration;
            }
            if is_holiday(entry.data) {
                darbas_svenciu += shift_duration;
            }
        }
    }

    let skirtumas = Decimal::from(faktiskai_dirbta) - menesio_norma;
    let virsvalandziai = if employee.apskaitinis_laikotarpis_menesiai == 1 {
        skirtumas.max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let day_norm = norm.dienos_norma * employee.etatas;
    let mut neatvykimai: Vec<NeatvykimoSuvestine> = Vec::new();
    for entry in entries.iter().filter(|e| e.tipas.is_neatvykimas()) {
        let kodas = entry.tipas.as_str();
        match neatvykimai.iter_mut().find(|n| n.kodas == kodas) {
            Some(summary) => {
                summary.dienos += 1;
                summary.valandos += day_norm;
            }
            None => neatvykimai.push(NeatvykimoSuvestine {
                kodas: kodas.to_string(),
                valandos: day_norm,
                dienos: 1,
            }),
        }
    }

    tracing::debug!(
        %year,
        %month,
        darbuotojas = %employee.id,
        norma = %menesio_norma,
        dirbta = faktiskai_dirbta,
        "monthly balance settled"
    );

    MonthlyBalance {
        menesio_norma,
        faktiskai_dirbta,
        nakties_valandos,
        darbas_poilsio_dienomis,
        darbas_svenciu,
        virsvalandziai,
        skirtumas,
        neatvykimai,
    }
}
