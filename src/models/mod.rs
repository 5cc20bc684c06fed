//! Domain models: employees, schedule entries and validation alerts.

mod alert;
mod employee;
mod schedule_entry;

pub use alert::{
    AlertCode, Severity, ValidationAlert, group_by_darbuotojas, ispejimai, klaidos,
};
pub use employee::{ETATAS_VALUES, Employee};
pub use schedule_entry::{EntryType, ScheduleEntry};
