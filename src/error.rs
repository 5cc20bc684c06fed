//! Error types for the work-time accounting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur at the engine's data boundary. The
//! calculators themselves are pure functions over validated inputs and do
//! not fail; errors arise only when parsing or validating host-supplied
//! data (times, dates, employee fields).

use thiserror::Error;

/// The main error type for the work-time accounting engine.
///
/// # Example
///
/// ```
/// use dk_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     value: "25:99".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time value '25:99': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time string could not be parsed as "HH:MM".
    #[error("Invalid time value '{value}': expected HH:MM")]
    InvalidTime {
        /// The offending value.
        value: String,
    },

    /// A date string could not be parsed as "YYYY-MM-DD", or the
    /// year/month/day components do not form a real calendar date.
    #[error("Invalid date value '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The offending value.
        value: String,
    },

    /// An employee record contained a field outside its DK-mandated range.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A schedule entry was structurally invalid.
    #[error("Invalid schedule entry '{entry_id}': {message}")]
    InvalidEntry {
        /// The ID of the invalid entry.
        entry_id: String,
        /// A description of what made the entry invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_displays_value() {
        let error = EngineError::InvalidTime {
            value: "8:0:0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time value '8:0:0': expected HH:MM"
        );
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = EngineError::InvalidDate {
            value: "2026-02-30".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date value '2026-02-30': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "etatas".to_string(),
            message: "must be one of 0.25, 0.50, 0.75, 1.00".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'etatas': must be one of 0.25, 0.50, 0.75, 1.00"
        );
    }

    #[test]
    fn test_invalid_entry_displays_id_and_message() {
        let error = EngineError::InvalidEntry {
            entry_id: "entry_001".to_string(),
            message: "work entry without shift times".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid schedule entry 'entry_001': work entry without shift times"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_time() -> EngineResult<()> {
            Err(EngineError::InvalidTime {
                value: "xx".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_time()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
