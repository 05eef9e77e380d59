//! The static medicine table: country -> ailment -> medicine names.
//!
//! The table is built once, lazily, and is read-only afterwards. Country
//! declaration order matters: the parser scans keys in this order and the
//! supported-countries suggestion line is joined in this order. Medicine
//! names are stored verbatim, casing and punctuation included.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::util::capitalize_first;

/// Ailments and their over-the-counter medicines for one country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    pub ailments: Vec<AilmentEntry>,
}

/// One ailment and the display-ordered medicines recommended for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AilmentEntry {
    pub name: String,
    pub medicines: Vec<String>,
}

/// Read-only lookup table keyed by (country, ailment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicineTable {
    countries: Vec<CountryEntry>,
}

static BUILTIN: Lazy<MedicineTable> = Lazy::new(|| MedicineTable::from_entries(BUILTIN_DATA));

type RawEntry = (&'static str, &'static [(&'static str, &'static [&'static str])]);

const BUILTIN_DATA: &[RawEntry] = &[
    (
        "USA",
        &[
            ("headache", &["Tylenol", "Advil", "Aleve"]),
            ("cold", &["DayQuil", "NyQuil", "Sudafed"]),
            ("heartburn", &["Tums", "Rolaids", "Prilosec OTC"]),
            ("allergy", &["Claritin", "Zyrtec", "Benadryl"]),
            ("fever", &["Tylenol", "Advil", "Motrin"]),
            ("cough", &["Robitussin", "Delsym", "Mucinex"]),
        ],
    ),
    (
        "UK",
        &[
            ("headache", &["Paracetamol", "Nurofen", "Anadin"]),
            ("cold", &["Lemsip", "Sudafed", "Benylin"]),
            ("heartburn", &["Gaviscon", "Rennie", "Omeprazole"]),
            ("allergy", &["Piriton", "Clarityn", "Benadryl"]),
            ("fever", &["Paracetamol", "Ibuprofen", "Aspirin"]),
            ("cough", &["Covonia", "Benylin", "Buttercup Syrup"]),
        ],
    ),
    (
        "India",
        &[
            ("headache", &["Crocin", "Dolo 650", "Saridon"]),
            ("cold", &["Sinarest", "D-Cold Total", "Vicks Action 500"]),
            ("heartburn", &["Digene", "Eno", "Pantocid DSR"]),
            ("allergy", &["Cetirizine", "Allegra", "Avil"]),
            ("fever", &["Dolo 650", "Paracetamol", "Calpol"]),
            ("cough", &["Benadryl", "Alex", "Coughsure"]),
        ],
    ),
    (
        "Canada",
        &[
            ("headache", &["Tylenol", "Advil", "Aleve"]),
            ("cold", &["Buckley’s", "NyQuil", "DayQuil"]),
            ("heartburn", &["Tums", "Zantac", "Rolaids"]),
            ("allergy", &["Reactine", "Claritin", "Benadryl"]),
            ("fever", &["Advil", "Tylenol", "Motrin"]),
            ("cough", &["Buckley’s", "Robitussin", "Delsym"]),
        ],
    ),
    (
        "Australia",
        &[
            ("headache", &["Panadol", "Nurofen", "Aspirin"]),
            ("cold", &["Codral", "Lemsip", "Sudafed"]),
            ("heartburn", &["Gaviscon", "Rennie", "Mylanta"]),
            ("allergy", &["Telfast", "Claratyne", "Zyrtec"]),
            ("fever", &["Panadol", "Nurofen", "Aspirin"]),
            ("cough", &["Benadryl", "Duro-Tuss", "Dimetapp"]),
        ],
    ),
    (
        "Germany",
        &[
            ("headache", &["Aspirin", "Ibuprofen", "Paracetamol"]),
            ("cold", &["Grippostad", "ACC", "Wick MediNait"]),
            ("heartburn", &["Talcid", "Maaloxan", "Pantoprazole"]),
            ("allergy", &["Cetirizine", "Loratadin", "Fenistil"]),
            ("fever", &["Paracetamol", "Ibuprofen", "Aspirin"]),
            ("cough", &["Prospan", "Bronchipret", "Mucosolvan"]),
        ],
    ),
];

impl MedicineTable {
    /// The shipped dataset, constructed on first use and shared afterwards.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a table from country entries. Declaration order is preserved.
    #[must_use]
    pub const fn new(countries: Vec<CountryEntry>) -> Self {
        Self { countries }
    }

    fn from_entries(data: &[RawEntry]) -> Self {
        let countries = data
            .iter()
            .map(|(name, ailments)| CountryEntry {
                name: (*name).to_string(),
                ailments: ailments
                    .iter()
                    .map(|(ailment, medicines)| AilmentEntry {
                        name: (*ailment).to_string(),
                        medicines: medicines.iter().map(|m| (*m).to_string()).collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { countries }
    }

    /// Look up the medicines for a (country, ailment) pair.
    ///
    /// The country goes through [`capitalize_first`] before the key match,
    /// so only the "Firstletter-capital, rest-lowercase" spelling of a key
    /// can match. All-caps keys such as `USA` and `UK` therefore never
    /// resolve, even when the parser extracted them from the input.
    #[must_use]
    pub fn lookup(&self, country: &str, ailment: &str) -> Option<&[String]> {
        let key = capitalize_first(country);
        let entry = self.countries.iter().find(|c| c.name == key)?;
        entry
            .ailments
            .iter()
            .find(|a| a.name == ailment)
            .map(|a| a.medicines.as_slice())
    }

    /// Country keys in declaration order.
    #[must_use]
    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.name.as_str())
    }

    /// Union of ailment keys across all countries, first-seen order.
    #[must_use]
    pub fn ailment_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for country in &self.countries {
            for ailment in &country.ailments {
                if !names.contains(&ailment.name.as_str()) {
                    names.push(ailment.name.as_str());
                }
            }
        }
        names
    }
}
