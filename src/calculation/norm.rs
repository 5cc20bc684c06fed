//! Monthly and accounting-period work-time norms (DK 111-112 str.).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{get_pre_holiday_reduction_hours, get_work_days_in_month};
use crate::config::limits::PRE_HOLIDAY_REDUCTION_HOURS;

/// The work-time norm of one calendar month, in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyNorm {
    /// Work days in the month (Monday-Friday, holidays excluded).
    pub darbo_dienu_sk: u32,
    /// Norm of a single work day in minutes, from the weekly norm.
    pub dienos_norma: Decimal,
    /// Pre-holiday shortening in minutes. Zero for part-time employees,
    /// whose schedules are assumed already shortened.
    pub priessventiniu_sutrumpinimai: Decimal,
    /// Full norm before the employment fraction is applied.
    pub bendra_norma: Decimal,
    /// The norm this employee must work: full norm scaled by etatas,
    /// minus the pre-holiday shortening when it applies.
    pub norma_darbuotojui: Decimal,
}

/// Computes the work-time norm of a month for a given weekly norm and
/// employment fraction.
///
/// The day norm is the weekly norm spread over five days, in minutes.
/// Every pre-holiday work day shortens the month by one hour, but only
/// for full-time employees (DK 112 str. 6 d.).
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use dk_engine::calculation::calculate_monthly_norm;
///
/// let norm = calculate_monthly_norm(2026, 1, Decimal::from(40), Decimal::ONE);
/// assert_eq!(norm.darbo_dienu_sk, 21);
/// assert_eq!(norm.norma_darbuotojui, Decimal::from(10_080));
/// ```
pub fn calculate_monthly_norm(
    year: i32,
    month: u32,
    weekly_norm: Decimal,
    etatas: Decimal,
) -> MonthlyNorm {
    let darbo_dienu_sk = get_work_days_in_month(year, month);
    let dienos_norma = weekly_norm / Decimal::from(5) * Decimal::from(60);

    let priessventiniu_sutrumpinimai = if etatas == Decimal::ONE {
        Decimal::from(
            i64::from(get_pre_holiday_reduction_hours(year, month)) * PRE_HOLIDAY_REDUCTION_HOURS,
        ) * Decimal::from(60)
    } else {
        Decimal::ZERO
    };

    let bendra_norma =
        Decimal::from(darbo_dienu_sk) * dienos_norma - priessventiniu_sutrumpinimai;
    let norma_darbuotojui =
        Decimal::from(darbo_dienu_sk) * dienos_norma * etatas - priessventiniu_sutrumpinimai;

    MonthlyNorm {
        darbo_dienu_sk,
        dienos_norma,
        priessventiniu_sutrumpinimai,
        bendra_norma,
        norma_darbuotojui,
    }
}

/// Sums the employee norm over an accounting period starting at the
/// given month, rolling over the year boundary as needed.
pub fn calculate_period_norm(
    start_year: i32,
    start_month: u32,
    months: u32,
    weekly_norm: Decimal,
    etatas: Decimal,
) -> Decimal {
    let mut year = start_year;
    let mut month = start_month;
    let mut total = Decimal::ZERO;

    for _ in 0..months {
        total += calculate_monthly_norm(year, month, weekly_norm, etatas).norma_darbuotojui;
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    total
}
