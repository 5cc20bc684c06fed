//! Employee model and field validation.
//!
//! Fields mirror what DK work-time accounting needs:
//! - `etatas`: employment fraction, 0.25 / 0.50 / 0.75 / 1.00
//! - `savaitine_norma`: weekly norm in hours, standard 40 (DK 112 str.)
//! - `sumine_apskaita`: aggregated work-time accounting (DK 115 str.)
//! - `apskaitinis_laikotarpis_menesiai`: accounting period, 1-12 months
//!   (DK 115 str. 2 d.)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// The four permitted employment fractions.
pub const ETATAS_VALUES: &[Decimal] = &[
    Decimal::from_parts(25, 0, 0, false, 2),
    Decimal::from_parts(50, 0, 0, false, 2),
    Decimal::from_parts(75, 0, 0, false, 2),
    Decimal::from_parts(100, 0, 0, false, 2),
];

/// An employee subject to DK work-time accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// First name.
    pub vardas: String,
    /// Last name.
    pub pavarde: String,
    /// Position title.
    pub pareigos: String,
    /// Employment fraction: 0.25, 0.50, 0.75 or 1.00.
    pub etatas: Decimal,
    /// Weekly work-time norm in hours, 1-40.
    #[serde(default = "default_weekly_norm")]
    pub savaitine_norma: Decimal,
    /// Employment contract start date. Not used by the calculators.
    pub darbo_sutarties_pradzia: NaiveDate,
    /// Aggregated work-time accounting flag. Informational for the
    /// calculators; the period length drives behavior.
    #[serde(default = "default_true")]
    pub sumine_apskaita: bool,
    /// Accounting period length in months, 1-12.
    #[serde(default = "default_period_months")]
    pub apskaitinis_laikotarpis_menesiai: u32,
}

fn default_weekly_norm() -> Decimal {
    Decimal::from(crate::config::limits::DEFAULT_WEEKLY_NORM)
}

fn default_true() -> bool {
    true
}

fn default_period_months() -> u32 {
    1
}

impl Employee {
    /// Returns true for a full-time employee (etatas 1.00).
    ///
    /// Only full-time employees receive the pre-holiday one-hour
    /// shortening; fractional schedules are assumed already shortened.
    pub fn is_full_time(&self) -> bool {
        self.etatas == Decimal::ONE
    }

    /// Validates the DK-mandated field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] naming the first field
    /// outside its permitted range.
    pub fn validate(&self) -> EngineResult<()> {
        if !ETATAS_VALUES.contains(&self.etatas) {
            return Err(EngineError::InvalidEmployee {
                field: "etatas".to_string(),
                message: "must be one of 0.25, 0.50, 0.75, 1.00".to_string(),
            });
        }

        if self.savaitine_norma < Decimal::ONE || self.savaitine_norma > Decimal::from(40) {
            return Err(EngineError::InvalidEmployee {
                field: "savaitineNorma".to_string(),
                message: "must be between 1 and 40 hours".to_string(),
            });
        }

        if !(1..=12).contains(&self.apskaitinis_laikotarpis_menesiai) {
            return Err(EngineError::InvalidEmployee {
                field: "apskaitinisLaikotarpisMenesiai".to_string(),
                message: "must be between 1 and 12 months".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

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

    #[test]
    fn test_valid_employee_passes() {
        assert!(make_employee().validate().is_ok());
    }

    #[test]
    fn test_all_etatas_values_pass() {
        for etatas in ETATAS_VALUES {
            let mut e = make_employee();
            e.etatas = *etatas;
            assert!(e.validate().is_ok(), "etatas {etatas}");
        }
    }

    #[test]
    fn test_invalid_etatas_rejected() {
        let mut e = make_employee();
        e.etatas = dec("0.3");
        let err = e.validate().unwrap_err();
        assert!(err.to_string().contains("etatas"));
    }

    #[test]
    fn test_weekly_norm_bounds() {
        let mut e = make_employee();
        e.savaitine_norma = Decimal::ZERO;
        assert!(e.validate().is_err());

        e.savaitine_norma = Decimal::from(41);
        assert!(e.validate().is_err());

        e.savaitine_norma = Decimal::from(20);
        assert!(e.validate().is_ok());
    }

    #[test]
    fn test_period_months_bounds() {
        let mut e = make_employee();
        e.apskaitinis_laikotarpis_menesiai = 0;
        assert!(e.validate().is_err());

        e.apskaitinis_laikotarpis_menesiai = 13;
        assert!(e.validate().is_err());

        e.apskaitinis_laikotarpis_menesiai = 12;
        assert!(e.validate().is_ok());
    }

    #[test]
    fn test_is_full_time() {
        let mut e = make_employee();
        assert!(e.is_full_time());
        e.etatas = dec("0.5");
        assert!(!e.is_full_time());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = format!(
            r#"{{
                "id": "{}",
                "vardas": "Ona",
                "pavarde": "Onaitė",
                "pareigos": "Budėtoja",
                "etatas": "0.50",
                "darboSutartiesPradzia": "2024-06-01"
            }}"#,
            Uuid::new_v4()
        );
        let e: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(e.savaitine_norma, Decimal::from(40));
        assert!(e.sumine_apskaita);
        assert_eq!(e.apskaitinis_laikotarpis_menesiai, 1);
        assert_eq!(e.etatas, dec("0.50"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let e = make_employee();
        let json = serde_json::to_string(&e).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
