//! # Key Normalization
//!
//! Product names are typed by people: "Café", "cafe ", "CAFÉ" all mean the same
//! shelf item. Every lookup in stockz goes through [`normalize`], so the store
//! and the search filter share exactly one notion of equality.
//!
//! ## Pipeline
//!
//! 1. Trim surrounding whitespace.
//! 2. Lowercase.
//! 3. Canonical decomposition (NFD): `é` becomes `e` + U+0301.
//! 4. Drop combining diacritical marks (U+0300..=U+036F).
//! 5. Trim again, since dropping a trailing mark can expose whitespace.
//!
//! The result is a fixed point: `normalize(normalize(x)) == normalize(x)`.
//!
//! Only the Combining Diacritical Marks block is stripped. Marks from other
//! scripts (Hebrew points, Devanagari signs...) are kept, matching what the
//! stock page has always done.

use unicode_normalization::UnicodeNormalization;

/// Canonical form of a product name or search term.
pub fn normalize(text: &str) -> String {
    let decomposed: String = text
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect();

    decomposed.trim().to_string()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize("  Arroz  "), "arroz");
        assert_eq!(normalize("FEIJÃO"), "feijao");
    }

    #[test]
    fn test_strips_accents() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("Pão de Açúcar"), "pao de acucar");
        assert_eq!(normalize("Crème Brûlée"), "creme brulee");
    }

    #[test]
    fn test_already_decomposed_input() {
        // "e" followed by a combining acute accent
        assert_eq!(normalize("cafe\u{0301}"), "cafe");
    }

    #[test]
    fn test_trailing_mark_after_space() {
        assert_eq!(normalize("arroz \u{0301}"), "arroz");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_eq!(normalize("Leite  Integral"), "leite  integral");
    }

    #[test]
    fn test_marks_outside_the_block_are_kept() {
        // Devanagari vowel sign AA is a mark, but not a Latin diacritic
        assert_eq!(normalize("का"), "का");
    }

    proptest! {
        #[test]
        fn test_normalize_is_idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_normalize_is_idempotent_on_accented_latin(s in "[ a-zA-ZÀ-ÿ\u{0300}-\u{036F}]{0,24}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_normalized_has_no_latin_diacritics(s in "\\PC*") {
            prop_assert!(!normalize(&s).chars().any(is_combining_diacritic));
        }
    }
}
