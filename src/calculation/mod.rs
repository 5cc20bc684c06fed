//! Work-time calculators: durations, night work, norms, overtime and
//! the monthly balance.

mod balance;
mod night;
mod norm;
mod overtime;
mod shift;
mod time_overlap;

pub use balance::{MonthlyBalance, NeatvykimoSuvestine, calculate_monthly_balance};
pub use night::{
    calculate_average_night_minutes_per_day, calculate_night_minutes, is_night_worker,
};
pub use norm::{MonthlyNorm, calculate_monthly_norm, calculate_period_norm};
pub use overtime::{OvertimeResult, calculate_hours_in_7_days, calculate_overtime_for_period};
pub use shift::{
    calculate_rest_between_entries, calculate_rest_between_shifts, calculate_shift_duration,
};
pub use time_overlap::{
    MINUTES_PER_DAY, minutes_from_midnight, minutes_to_time, night_minutes, overlap_minutes,
    shift_duration_minutes, time_to_minutes,
};
