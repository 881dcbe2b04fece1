//! Text normalization used on both sides of every comparison.

/// Lowercase `text` and strip surrounding whitespace.
///
/// Drug names, synonyms, titles and abstracts must all pass through this
/// function; a substring test between differently normalized strings fails
/// silently.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("Gentamicin "), "gentamicin");
        assert_eq!(normalize("Gentamicin"), "gentamicin");
        assert_eq!(normalize("  IBUPROFEN\t"), "ibuprofen");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn lowercases_non_ascii() {
        assert_eq!(normalize("ÉTHANOL"), "éthanol");
    }
}
