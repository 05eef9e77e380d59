//! Keyword extraction over the table's keys.
//!
//! There is no tokenization here: the whole input is lowercased once and
//! every key is checked with a plain substring containment scan, countries
//! first in declaration order, then the ailment union in first-seen order.

use serde::{Deserialize, Serialize};

use crate::table::MedicineTable;

/// What the parser managed to extract from one line of input.
///
/// Both fields hold canonical table keys, not the matched input fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub country: Option<String>,
    pub ailment: Option<String>,
}

impl ParsedQuery {
    /// True when both a country and an ailment were extracted.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.country.is_some() && self.ailment.is_some()
    }
}

/// Scans free text for known country and ailment keywords.
#[derive(Debug, Clone, Copy)]
pub struct KeywordParser<'a> {
    table: &'a MedicineTable,
}

impl<'a> KeywordParser<'a> {
    #[must_use]
    pub const fn new(table: &'a MedicineTable) -> Self {
        Self { table }
    }

    /// Extract `(country, ailment)` from one line of input.
    ///
    /// When several country keywords are present the first one in table
    /// declaration order wins. Ailment keys are stored lowercase already and
    /// are matched as-is against the lowered input.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParsedQuery {
        let lowered = input.to_lowercase();

        let country = self
            .table
            .country_names()
            .find(|name| lowered.contains(&name.to_lowercase()))
            .map(str::to_string);

        let ailment = self
            .table
            .ailment_names()
            .into_iter()
            .find(|name| lowered.contains(name))
            .map(str::to_string);

        ParsedQuery { country, ailment }
    }
}
