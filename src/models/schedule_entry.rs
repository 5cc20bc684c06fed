//! Schedule entry model and entry-type enumeration.
//!
//! One entry per employee per calendar day. Shift times are present only
//! for work entries; absence entries carry their code as the entry type.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// The type tag of a schedule entry: work, rest, holiday, or one of the
/// 25 absence codes from the timesheet marking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Work day with a shift.
    #[serde(rename = "DARBAS")]
    Darbas,
    /// Rest day.
    #[serde(rename = "POILSIS")]
    Poilsis,
    /// Public holiday.
    #[serde(rename = "SVENTE")]
    Svente,
    /// Kasmetinės atostogos.
    A,
    /// Mokymosi atostogos.
    MA,
    /// Nemokamos atostogos.
    NA,
    /// Kūrybinės atostogos.
    KA,
    /// Nėštumo ir gimdymo atostogos.
    G,
    /// Atostogos vaikui prižiūrėti.
    PV,
    /// Tėvystės atostogos.
    TA,
    /// Nedarbingumas dėl ligos ar traumų.
    L,
    /// Neapmokamas nedarbingumas.
    N,
    /// Nedarbingumas ligoniams slaugyti.
    NS,
    /// Tarnybinės komandiruotės.
    K,
    /// Kvalifikacijos kėlimas.
    KV,
    /// Kraujo davimo dienos donorams.
    D,
    /// Papildomas poilsis auginantiems vaikus.
    M,
    /// Privalomų medicininių apžiūrų laikas.
    MD,
    /// Laikas naujo darbo paieškoms.
    ID,
    /// Pravaikštos.
    PB,
    /// Neatvykimas dėl šeimyninių aplinkybių.
    ND,
    /// Neatvykimas kitais teisės aktų nustatytais laikotarpiais.
    NP,
    /// Nušalinimas nuo darbo.
    NN,
    /// Streikas.
    ST,
    /// Stažuotės.
    #[serde(rename = "SŽ")]
    SZ,
    /// Valstybinių/visuomeninių pareigų vykdymas.
    PR,
    /// Karinė tarnyba.
    KT,
    /// Mokomosios karinės pratybos.
    KM,
}

impl EntryType {
    /// All valid entry types, in the timesheet order.
    pub const ALL: &'static [EntryType] = &[
        EntryType::Darbas,
        EntryType::Poilsis,
        EntryType::Svente,
        EntryType::A,
        EntryType::MA,
        EntryType::NA,
        EntryType::KA,
        EntryType::G,
        EntryType::PV,
        EntryType::TA,
        EntryType::L,
        EntryType::N,
        EntryType::NS,
        EntryType::K,
        EntryType::KV,
        EntryType::D,
        EntryType::M,
        EntryType::MD,
        EntryType::ID,
        EntryType::PB,
        EntryType::ND,
        EntryType::NP,
        EntryType::NN,
        EntryType::ST,
        EntryType::SZ,
        EntryType::PR,
        EntryType::KT,
        EntryType::KM,
    ];

    /// The uppercase code used on the wire and on the timesheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Darbas => "DARBAS",
            EntryType::Poilsis => "POILSIS",
            EntryType::Svente => "SVENTE",
            EntryType::A => "A",
            EntryType::MA => "MA",
            EntryType::NA => "NA",
            EntryType::KA => "KA",
            EntryType::G => "G",
            EntryType::PV => "PV",
            EntryType::TA => "TA",
            EntryType::L => "L",
            EntryType::N => "N",
            EntryType::NS => "NS",
            EntryType::K => "K",
            EntryType::KV => "KV",
            EntryType::D => "D",
            EntryType::M => "M",
            EntryType::MD => "MD",
            EntryType::ID => "ID",
            EntryType::PB => "PB",
            EntryType::ND => "ND",
            EntryType::NP => "NP",
            EntryType::NN => "NN",
            EntryType::ST => "ST",
            EntryType::SZ => "SŽ",
            EntryType::PR => "PR",
            EntryType::KT => "KT",
            EntryType::KM => "KM",
        }
    }

    /// Parses an entry-type code.
    pub fn from_code(code: &str) -> Option<EntryType> {
        EntryType::ALL.iter().copied().find(|t| t.as_str() == code)
    }

    /// Returns true for the work type.
    pub fn is_darbas(&self) -> bool {
        matches!(self, EntryType::Darbas)
    }

    /// Returns true for the rest type.
    pub fn is_poilsis(&self) -> bool {
        matches!(self, EntryType::Poilsis)
    }

    /// Returns true for the holiday type.
    pub fn is_svente(&self) -> bool {
        matches!(self, EntryType::Svente)
    }

    /// Returns true for any of the 25 absence codes.
    pub fn is_neatvykimas(&self) -> bool {
        !self.is_darbas() && !self.is_poilsis() && !self.is_svente()
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde codec for optional shift times in "HH:MM" format.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => serializer.serialize_some(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|s| NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// One schedule entry: a shift, a rest day, a holiday or an absence,
/// tied to a single employee and calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The employee this entry belongs to.
    pub darbuotojo_id: Uuid,
    /// The calendar day.
    pub data: NaiveDate,
    /// Entry type: DARBAS, POILSIS, SVENTE or an absence code.
    pub tipas: EntryType,
    /// Shift start, set only for work entries.
    #[serde(default, with = "hhmm")]
    pub pamainos_pradzia: Option<NaiveTime>,
    /// Shift end, set only for work entries.
    #[serde(default, with = "hhmm")]
    pub pamainos_pabaiga: Option<NaiveTime>,
    /// Lunch break in minutes, 0-120 (DK 122 str. 2 d. 2 p.).
    #[serde(default = "default_lunch_break")]
    pub pietu_pertrauka_min: i64,
    /// Auxiliary absence annotation.
    #[serde(default)]
    pub neatvykimo_kodas: Option<String>,
    /// Free-text note.
    #[serde(default)]
    pub pastaba: Option<String>,
}

fn default_lunch_break() -> i64 {
    crate::config::limits::DEFAULT_LUNCH_BREAK_MINUTES
}

impl ScheduleEntry {
    /// Returns true if this is a work entry with both shift times set.
    pub fn has_shift_times(&self) -> bool {
        self.tipas.is_darbas()
            && self.pamainos_pradzia.is_some()
            && self.pamainos_pabaiga.is_some()
    }

    /// Validates the structural rules of an entry.
    ///
    /// Work entries must carry both shift times, non-work entries must
    /// carry neither, and the lunch break must stay within the DK
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] describing the first
    /// violated rule.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tipas.is_darbas()
            && (self.pamainos_pradzia.is_none() || self.pamainos_pabaiga.is_none())
        {
            return Err(EngineError::InvalidEntry {
                entry_id: self.id.to_string(),
                message: "work entry without shift times".to_string(),
            });
        }

        if !self.tipas.is_darbas()
            && (self.pamainos_pradzia.is_some() || self.pamainos_pabaiga.is_some())
        {
            return Err(EngineError::InvalidEntry {
                entry_id: self.id.to_string(),
                message: format!("shift times on a {} entry", self.tipas),
            });
        }

        if !(0..=crate::config::limits::MAX_LUNCH_BREAK_MINUTES)
            .contains(&self.pietu_pertrauka_min)
        {
            return Err(EngineError::InvalidEntry {
                entry_id: self.id.to_string(),
                message: format!(
                    "lunch break of {} minutes outside 0-{}",
                    self.pietu_pertrauka_min,
                    crate::config::limits::MAX_LUNCH_BREAK_MINUTES
                ),
            });
        }

        Ok(())
    }
}
