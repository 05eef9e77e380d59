//! Small string helpers shared across the crate.

/// Capitalize a name the way the table lookup expects it: first character
/// uppercased, every following character lowercased.
///
/// Note that multi-letter uppercase names do not survive this transform
/// (`"USA"` becomes `"Usa"`), so they can never equal their own stored form.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out = String::with_capacity(s.len());
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_lowercase_name() {
        assert_eq!(capitalize_first("india"), "India");
    }

    #[test]
    fn lowercases_the_rest() {
        assert_eq!(capitalize_first("USA"), "Usa");
        assert_eq!(capitalize_first("gErMaNy"), "Germany");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(capitalize_first(""), "");
    }
}
