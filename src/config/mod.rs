//! Static reference data for the work-time accounting engine.
//!
//! Statutory limit constants, the timesheet marking-code table and the
//! Lithuanian holiday calendar. All of it is immutable national reference
//! data bundled with the engine; nothing here is read from disk or
//! exposed for mutation.

pub mod limits;

mod holidays;
mod work_codes;

pub use holidays::{
    STATIC_HOLIDAYS, StaticHoliday, get_easter_sunday, get_holidays, holiday_name, is_holiday,
    is_pre_holiday,
};
pub use work_codes::{
    ABSENCE_AS_WORK_CODES, DEVIATION_CODES, WORK_CODES, WorkCode, WorkCodeCategory,
    get_codes_by_category, get_work_code,
};

pub(crate) use holidays::first_sunday_of_month;
