//! Timesheet marking codes (žiniaraščio sutartiniai žymėjimai).
//!
//! Static reference data: each code carries its Lithuanian name and the
//! DK article it derives from. Loaded once, looked up by code, never
//! mutated.
//!
//! Categories:
//! - `Darbas` - work-time markings (shift kinds, overtime, on-call duty)
//! - `Neatvykimas` - absence reasons (leave, sickness, secondment, ...)
//! - `Poilsis` - rest and holiday days

use serde::{Deserialize, Serialize};

/// The category a timesheet code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkCodeCategory {
    /// Work-time markings.
    Darbas,
    /// Absence reasons.
    Neatvykimas,
    /// Rest and holiday days.
    Poilsis,
}

/// A single timesheet marking code with its statute citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkCode {
    /// The conventional marking (e.g. "DN", "A", "P").
    pub kodas: &'static str,
    /// Full Lithuanian name.
    pub pavadinimas: &'static str,
    /// DK article reference.
    pub dk_straipsnis: &'static str,
    /// Category: work, absence or rest.
    pub kategorija: WorkCodeCategory,
}

/// The full marking table.
pub const WORK_CODES: &[WorkCode] = &[
    // Work codes
    WorkCode {
        kodas: "DN",
        pavadinimas: "Darbas naktį",
        dk_straipsnis: "DK 117 str.",
        kategorija: WorkCodeCategory::Darbas,
    },
    WorkCode {
        kodas: "VD",
        pavadinimas: "Viršvalandinis darbas",
        dk_straipsnis: "DK 119 str.",
        kategorija: WorkCodeCategory::Darbas,
    },
    WorkCode {
        kodas: "DP",
        pavadinimas: "Darbas poilsio ir švenčių dienomis",
        dk_straipsnis: "DK 123 str. 2 d., 124 str. 2 d.",
        kategorija: WorkCodeCategory::Darbas,
    },
    WorkCode {
        kodas: "PD",
        pavadinimas: "Papildomo darbo laikas",
        dk_straipsnis: "DK 35 str. 4 d.",
        kategorija: WorkCodeCategory::Darbas,
    },
    WorkCode {
        kodas: "BN",
        pavadinimas: "Pasyvus budėjimas (namuose)",
        dk_straipsnis: "DK 118 str. 2 d.",
        kategorija: WorkCodeCategory::Darbas,
    },
    WorkCode {
        kodas: "BĮ",
        pavadinimas: "Aktyvus budėjimas darbe (darbovietėje)",
        dk_straipsnis: "DK 118 str. 1 d.",
        kategorija: WorkCodeCategory::Darbas,
    },
    // Rest codes
    WorkCode {
        kodas: "V",
        pavadinimas: "Papildomas poilsio laikas (už viršvalandžius/poilsio/švenčių d.)",
        dk_straipsnis: "DK 107 str. 4 d.",
        kategorija: WorkCodeCategory::Poilsis,
    },
    WorkCode {
        kodas: "P",
        pavadinimas: "Poilsio dienos",
        dk_straipsnis: "DK 124 str. 1 d.",
        kategorija: WorkCodeCategory::Poilsis,
    },
    WorkCode {
        kodas: "S",
        pavadinimas: "Švenčių dienos",
        dk_straipsnis: "DK 123 str. 1 d.",
        kategorija: WorkCodeCategory::Poilsis,
    },
    // Absence codes
    WorkCode {
        kodas: "A",
        pavadinimas: "Kasmetinės atostogos",
        dk_straipsnis: "DK 126 str. 1 d.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "MA",
        pavadinimas: "Mokymosi atostogos",
        dk_straipsnis: "DK 135 str.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "NA",
        pavadinimas: "Nemokamos atostogos",
        dk_straipsnis: "DK 137 str. 1 d.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "KA",
        pavadinimas: "Kūrybinės atostogos",
        dk_straipsnis: "DK 136 str.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "G",
        pavadinimas: "Nėštumo ir gimdymo atostogos",
        dk_straipsnis: "DK 132 str.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "PV",
        pavadinimas: "Atostogos vaikui prižiūrėti (iki 3 m.)",
        dk_straipsnis: "DK 134 str.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "TA",
        pavadinimas: "Tėvystės atostogos",
        dk_straipsnis: "DK 133 str.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "L",
        pavadinimas: "Nedarbingumas dėl ligos ar traumų",
        dk_straipsnis: "DK 111 str. 2 d. 9 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "N",
        pavadinimas: "Neapmokamas nedarbingumas",
        dk_straipsnis: "DK 111 str. 2 d. 9 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "NS",
        pavadinimas: "Nedarbingumas ligoniams slaugyti",
        dk_straipsnis: "DK 111 str. 2 d. 9 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "K",
        pavadinimas: "Tarnybinės komandiruotės",
        dk_straipsnis: "DK 107 str. 1 d.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "KV",
        pavadinimas: "Kvalifikacijos kėlimas",
        dk_straipsnis: "DK 111 str. 2 d. 5 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "D",
        pavadinimas: "Kraujo davimo dienos donorams",
        dk_straipsnis: "DK 111 str. 2 d. 9 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "M",
        pavadinimas: "Papildomas poilsis (neįgalus vaikas iki 18 m. / 2+ vaikai iki 12 m.)",
        dk_straipsnis: "DK 138 str. 3 d.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "MD",
        pavadinimas: "Privalomų medicininių apžiūrų laikas",
        dk_straipsnis: "DK 111 str. 2 d. 6 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "ID",
        pavadinimas: "Laikas naujo darbo paieškoms",
        dk_straipsnis: "DK 64 str. 6 d.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "PB",
        pavadinimas: "Pravaikštos (neatvykimas be svarbios priežasties)",
        dk_straipsnis: "DK 111 str. 2 d. 8 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "ND",
        pavadinimas: "Neatvykimas dėl šeimyninių aplinkybių",
        dk_straipsnis: "DK 137 str. 3 d.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "NP",
        pavadinimas: "Neatvykimas kitais norminių teisės aktų nustatytais laikotarpiais",
        dk_straipsnis: "DK 111 str. 2 d. 9 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "NN",
        pavadinimas: "Nušalinimas nuo darbo",
        dk_straipsnis: "DK 49 str. 3 d.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "ST",
        pavadinimas: "Streikas",
        dk_straipsnis: "DK 244 str.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "SŽ",
        pavadinimas: "Stažuotės",
        dk_straipsnis: "DK 111 str. 2 d. 9 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "PR",
        pavadinimas: "Valstybinių/visuomeninių/piliečio pareigų vykdymas",
        dk_straipsnis: "DK 137 str. 4 d.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "KT",
        pavadinimas: "Karinė tarnyba",
        dk_straipsnis: "DK 111 str. 2 d. 9 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
    WorkCode {
        kodas: "KM",
        pavadinimas: "Mokomosios karinės pratybos",
        dk_straipsnis: "DK 111 str. 2 d. 9 p.",
        kategorija: WorkCodeCategory::Neatvykimas,
    },
];

/// Deviation codes used on the timesheet's deviations row.
pub const DEVIATION_CODES: &[&str] = &["VD", "DP", "DN", "PD", "BN", "BĮ"];

/// Absence codes counted as work time on the timesheet's fourth row
/// (DK 111 str.).
pub const ABSENCE_AS_WORK_CODES: &[&str] = &["K", "KV", "MD", "D", "M", "PR", "SŽ"];

/// Looks up a marking code.
///
/// # Example
///
/// ```
/// use dk_engine::config::get_work_code;
///
/// let code = get_work_code("DN").unwrap();
/// assert_eq!(code.pavadinimas, "Darbas naktį");
/// ```
pub fn get_work_code(kodas: &str) -> Option<&'static WorkCode> {
    WORK_CODES.iter().find(|wc| wc.kodas == kodas)
}

/// Returns all codes of the given category.
pub fn get_codes_by_category(kategorija: WorkCodeCategory) -> Vec<&'static WorkCode> {
    WORK_CODES
        .iter()
        .filter(|wc| wc.kategorija == kategorija)
        .collect()
}
