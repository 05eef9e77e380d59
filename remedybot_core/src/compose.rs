//! Turns a parse result into the text shown to the user.

use crate::parse::ParsedQuery;
use crate::table::MedicineTable;
use crate::util::capitalize_first;

const NOT_UNDERSTOOD: &str = "Sorry, I couldn't understand your input.";
const NO_MATCH: &str = "Sorry, I couldn't find a match.";

// Fixed wording, deliberately not derived from the table.
const COMMON_ILLNESSES: &str =
    "Common illnesses include: headache, cold, heartburn, allergy, fever, cough.";

/// Renders recommendation sentences and fallback suggestions.
#[derive(Debug, Clone, Copy)]
pub struct ResponseComposer<'a> {
    table: &'a MedicineTable,
}

impl<'a> ResponseComposer<'a> {
    #[must_use]
    pub const fn new(table: &'a MedicineTable) -> Self {
        Self { table }
    }

    /// Compose the reply for one parsed query.
    ///
    /// A missing country or ailment yields the not-understood message plus
    /// suggestions. A complete query that still misses the table (the
    /// capitalization rule makes `USA` and `UK` unreachable) yields the
    /// no-match message; with both parts present the suggestion list is
    /// empty, leaving the headline alone.
    #[must_use]
    pub fn compose(&self, query: &ParsedQuery) -> String {
        let (Some(country), Some(ailment)) = (query.country.as_deref(), query.ailment.as_deref())
        else {
            return self.with_suggestions(NOT_UNDERSTOOD, query);
        };

        self.table.lookup(country, ailment).map_or_else(
            || self.with_suggestions(NO_MATCH, query),
            |medicines| {
                format!(
                    "For {ailment} in {}, you can consider these over-the-counter medicines: {}.",
                    capitalize_first(country),
                    medicines.join(", ")
                )
            },
        )
    }

    /// Fallback hint lines, in order: supported countries when the country
    /// is missing, then the fixed common-illnesses line when the ailment is.
    #[must_use]
    pub fn suggest_alternatives(&self, country: Option<&str>, ailment: Option<&str>) -> Vec<String> {
        let mut suggestions = Vec::new();
        if country.is_none() {
            let countries: Vec<&str> = self.table.country_names().collect();
            suggestions.push(format!("Supported countries: {}", countries.join(", ")));
        }
        if ailment.is_none() {
            suggestions.push(COMMON_ILLNESSES.to_string());
        }
        suggestions
    }

    fn with_suggestions(&self, headline: &str, query: &ParsedQuery) -> String {
        let mut lines = vec![headline.to_string()];
        lines.extend(self.suggest_alternatives(query.country.as_deref(), query.ailment.as_deref()));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> ResponseComposer<'static> {
        ResponseComposer::new(MedicineTable::builtin())
    }

    fn query(country: Option<&str>, ailment: Option<&str>) -> ParsedQuery {
        ParsedQuery {
            country: country.map(str::to_string),
            ailment: ailment.map(str::to_string),
        }
    }

    #[test]
    fn successful_lookup_formats_the_sentence() {
        let reply = composer().compose(&query(Some("India"), Some("headache")));
        assert_eq!(
            reply,
            "For headache in India, you can consider these over-the-counter medicines: Crocin, Dolo 650, Saridon."
        );
    }

    #[test]
    fn medicines_keep_declared_order_and_spelling() {
        let reply = composer().compose(&query(Some("Canada"), Some("cough")));
        assert_eq!(
            reply,
            "For cough in Canada, you can consider these over-the-counter medicines: Buckley’s, Robitussin, Delsym."
        );
    }

    #[test]
    fn country_is_capitalized_in_the_sentence() {
        let reply = composer().compose(&query(Some("germany"), Some("fever")));
        assert_eq!(
            reply,
            "For fever in Germany, you can consider these over-the-counter medicines: Paracetamol, Ibuprofen, Aspirin."
        );
    }

    #[test]
    fn all_caps_country_yields_no_match_headline_only() {
        let reply = composer().compose(&query(Some("USA"), Some("headache")));
        assert_eq!(reply, "Sorry, I couldn't find a match.");
    }

    #[test]
    fn missing_country_suggests_supported_countries() {
        let reply = composer().compose(&query(None, Some("headache")));
        assert_eq!(
            reply,
            "Sorry, I couldn't understand your input.\n\
             Supported countries: USA, UK, India, Canada, Australia, Germany"
        );
    }

    #[test]
    fn missing_ailment_suggests_common_illnesses() {
        let reply = composer().compose(&query(Some("USA"), None));
        assert_eq!(
            reply,
            "Sorry, I couldn't understand your input.\n\
             Common illnesses include: headache, cold, heartburn, allergy, fever, cough."
        );
    }

    #[test]
    fn missing_both_suggests_countries_then_illnesses() {
        let reply = composer().compose(&query(None, None));
        assert_eq!(
            reply,
            "Sorry, I couldn't understand your input.\n\
             Supported countries: USA, UK, India, Canada, Australia, Germany\n\
             Common illnesses include: headache, cold, heartburn, allergy, fever, cough."
        );
    }

    #[test]
    fn suggestions_are_empty_when_both_parts_present() {
        let suggestions = composer().suggest_alternatives(Some("India"), Some("cold"));
        assert!(suggestions.is_empty());
    }
}
