//! Schedule validation alert model.
//!
//! Produced by the eight DK limit checks:
//! - ALERT_1: shift > 12h
//! - ALERT_2: 7-day total > 48h
//! - ALERT_3: 7-day total with additional work > 60h
//! - ALERT_4: more than 6 consecutive work days
//! - ALERT_5: two shifts back to back (no rest)
//! - ALERT_6: rest between shifts < 11h
//! - ALERT_7: weekly uninterrupted rest < 35h
//! - ALERT_8: night average > 8h/day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Blocking violation.
    #[serde(rename = "KLAIDA")]
    Klaida,
    /// Informational warning.
    #[serde(rename = "ISPEJIMAS")]
    Ispejimas,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Klaida => write!(f, "KLAIDA"),
            Severity::Ispejimas => write!(f, "ISPEJIMAS"),
        }
    }
}

/// The eight validation rule codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertCode {
    /// Shift longer than 12 hours.
    #[serde(rename = "ALERT_1")]
    Alert1,
    /// More than 48 hours worked in a 7-day window.
    #[serde(rename = "ALERT_2")]
    Alert2,
    /// More than 60 hours in a 7-day window with additional work.
    #[serde(rename = "ALERT_3")]
    Alert3,
    /// More than 6 consecutive work days.
    #[serde(rename = "ALERT_4")]
    Alert4,
    /// Two consecutive shifts without rest.
    #[serde(rename = "ALERT_5")]
    Alert5,
    /// Rest between shifts shorter than 11 hours.
    #[serde(rename = "ALERT_6")]
    Alert6,
    /// Weekly uninterrupted rest shorter than 35 hours.
    #[serde(rename = "ALERT_7")]
    Alert7,
    /// Night-work average above 8 hours per day.
    #[serde(rename = "ALERT_8")]
    Alert8,
}

impl std::fmt::Display for AlertCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = match self {
            AlertCode::Alert1 => 1,
            AlertCode::Alert2 => 2,
            AlertCode::Alert3 => 3,
            AlertCode::Alert4 => 4,
            AlertCode::Alert5 => 5,
            AlertCode::Alert6 => 6,
            AlertCode::Alert7 => 7,
            AlertCode::Alert8 => 8,
        };
        write!(f, "ALERT_{n}")
    }
}

/// One validation finding: severity, rule code, Lithuanian message and
/// the DK article backing the rule. Produced fresh on every validation
/// run, never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationAlert {
    /// KLAIDA (blocking) or ISPEJIMAS (informational).
    pub tipas: Severity,
    /// The rule code, ALERT_1 through ALERT_8.
    pub kodas: AlertCode,
    /// Lithuanian message text.
    pub pranesimas: String,
    /// DK article reference (e.g. "DK 114 str. 2 d.").
    pub dk_straipsnis: String,
    /// The date the violation is tied to, when one applies.
    #[serde(default)]
    pub data: Option<NaiveDate>,
    /// The employee the violation applies to.
    pub darbuotojo_id: Uuid,
}

/// Filters the blocking errors.
pub fn klaidos(alerts: &[ValidationAlert]) -> Vec<&ValidationAlert> {
    alerts
        .iter()
        .filter(|a| a.tipas == Severity::Klaida)
        .collect()
}

/// Filters the informational warnings.
pub fn ispejimai(alerts: &[ValidationAlert]) -> Vec<&ValidationAlert> {
    alerts
        .iter()
        .filter(|a| a.tipas == Severity::Ispejimas)
        .collect()
}

/// Groups alerts by employee id.
pub fn group_by_darbuotojas(
    alerts: &[ValidationAlert],
) -> HashMap<Uuid, Vec<&ValidationAlert>> {
    let mut grouped: HashMap<Uuid, Vec<&ValidationAlert>> = HashMap::new();
    for alert in alerts {
        grouped.entry(alert.darbuotojo_id).or_default().push(alert);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_alert(tipas: Severity, kodas: AlertCode, darbuotojo_id: Uuid) -> ValidationAlert {
        ValidationAlert {
            tipas,
            kodas,
            pranesimas: "testas".to_string(),
            dk_straipsnis: "DK 114 str.".to_string(),
            data: NaiveDate::from_ymd_opt(2026, 1, 5),
            darbuotojo_id,
        }
    }

    #[test]
    fn test_severity_serialization() {
        assert_eq!(serde_json::to_string(&Severity::Klaida).unwrap(), "\"KLAIDA\"");
        assert_eq!(
            serde_json::to_string(&Severity::Ispejimas).unwrap(),
            "\"ISPEJIMAS\""
        );
    }

    #[test]
    fn test_alert_code_serialization() {
        assert_eq!(serde_json::to_string(&AlertCode::Alert7).unwrap(), "\"ALERT_7\"");
        let parsed: AlertCode = serde_json::from_str("\"ALERT_3\"").unwrap();
        assert_eq!(parsed, AlertCode::Alert3);
    }

    #[test]
    fn test_alert_code_display() {
        assert_eq!(AlertCode::Alert1.to_string(), "ALERT_1");
        assert_eq!(AlertCode::Alert8.to_string(), "ALERT_8");
    }

    #[test]
    fn test_klaidos_and_ispejimai_filters() {
        let id = Uuid::new_v4();
        let alerts = vec![
            make_alert(Severity::Klaida, AlertCode::Alert1, id),
            make_alert(Severity::Ispejimas, AlertCode::Alert7, id),
            make_alert(Severity::Klaida, AlertCode::Alert5, id),
        ];

        assert_eq!(klaidos(&alerts).len(), 2);
        assert_eq!(ispejimai(&alerts).len(), 1);
        assert_eq!(ispejimai(&alerts)[0].kodas, AlertCode::Alert7);
    }

    #[test]
    fn test_group_by_darbuotojas() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let alerts = vec![
            make_alert(Severity::Klaida, AlertCode::Alert1, a),
            make_alert(Severity::Klaida, AlertCode::Alert2, b),
            make_alert(Severity::Klaida, AlertCode::Alert4, a),
        ];

        let grouped = group_by_darbuotojas(&alerts);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&a].len(), 2);
        assert_eq!(grouped[&b].len(), 1);
    }

    #[test]
    fn test_alert_serialization_round_trip() {
        let alert = make_alert(Severity::Ispejimas, AlertCode::Alert8, Uuid::new_v4());
        let json = serde_json::to_string(&alert).unwrap();
        assert!(json.contains("\"kodas\":\"ALERT_8\""));
        assert!(json.contains("\"dkStraipsnis\""));
        let back: ValidationAlert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert, back);
    }
}
