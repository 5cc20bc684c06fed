//! Work-time accounting engine for the Lithuanian Labour Code (DK)
//!
//! This crate computes work-time norms, shift durations, night work,
//! overtime and monthly balances for schedules kept under aggregated
//! work-time accounting (suminė darbo laiko apskaita), and validates
//! schedules against the eight DK limits on work and rest time.

#![warn(missing_docs)]

pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod validation;
