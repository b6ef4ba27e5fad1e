use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Produce the matching key for a human-entered country string.
///
/// Decomposes to NFD, drops non-spacing marks, recomposes to NFC, lower-cases with the
/// simple one-to-one mapping, and trims surrounding whitespace, in that order. Scripts
/// without combining marks (CJK, for example) only go through lower-casing and trimming.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfd()
        .filter(|c| !is_nonspacing_mark(*c))
        .nfc()
        .map(simple_lowercase)
        .collect();

    folded.trim().to_string()
}

fn is_nonspacing_mark(c: char) -> bool {
    c.general_category() == GeneralCategory::NonspacingMark
}

// `char::to_lowercase` expands U+0130 to "i\u{307}"; the simple mapping keeps the base letter.
// Final sigma folds to medial sigma so "ΕΛΛΑΣ" and "ελλας" share a key.
fn simple_lowercase(c: char) -> char {
    match c.to_lowercase().next().unwrap_or(c) {
        'ς' => 'σ',
        lower => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_accents_case_and_padding() {
        assert_eq!(normalize("  FRANÇAIS  "), "francais");
        assert_eq!(normalize("Côte d'Ivoire"), "cote d'ivoire");
        assert_eq!(normalize("România"), "romania");
        assert_eq!(normalize("Österreich"), "osterreich");
    }

    #[test]
    fn accepts_empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn leaves_scripts_without_marks_untouched() {
        assert_eq!(normalize("中国"), "中国");
        assert_eq!(normalize("  日本 "), "日本");
    }

    #[test]
    fn strips_marks_from_decomposed_input() {
        // "e" followed by a combining acute accent
        assert_eq!(normalize("Re\u{301}union"), "reunion");
        assert_eq!(normalize("E\u{301}IRE"), "eire");
    }

    #[test]
    fn lowercases_greek_and_cyrillic() {
        assert_eq!(normalize("ΕΛΛΆΔΑ"), "ελλαδα");
        assert_eq!(normalize("България"), "българия");
    }

    #[test]
    fn final_sigma_matches_capital_spelling() {
        assert_eq!(normalize("ΕΛΛΑΣ"), "ελλασ");
        assert_eq!(normalize("ελλας"), normalize("ΕΛΛΑΣ"));
    }

    #[test]
    fn dotted_capital_i_folds_to_plain_i() {
        assert_eq!(normalize("İtalya"), "italya");
    }

    #[test]
    fn keeps_control_characters() {
        assert_eq!(normalize("a\u{7}b"), "a\u{7}b");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(input in any::<String>()) {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_never_returns_padded_keys(input in "\\PC*") {
            let key = normalize(&input);
            prop_assert_eq!(key.trim(), key.as_str());
        }
    }
}
