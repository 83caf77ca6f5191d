use unicode_normalization::char::decompose_canonical;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use super::CharFilter;
use crate::analysis::normalized::NormalizedText;

/// A char filter that removes accents.
///
/// Each char is replaced by its canonical decomposition (NFD) and every
/// nonspacing mark (general category `Mn`) is dropped. Case is preserved.
#[derive(Clone, Debug, Default)]
pub struct AccentFoldingCharFilter;

impl AccentFoldingCharFilter {
    pub fn new() -> Self {
        AccentFoldingCharFilter
    }
}

impl CharFilter for AccentFoldingCharFilter {
    fn filter(&self, input: &str) -> NormalizedText {
        normalize(input)
    }

    fn name(&self) -> &'static str {
        "accent_folding"
    }
}

/// Whether `c` is a nonspacing combining mark.
pub fn is_nonspacing_mark(c: char) -> bool {
    matches!(c.general_category(), GeneralCategory::NonspacingMark)
}

/// Decompose `text` and drop nonspacing marks, keeping a map back to the original chars.
pub fn normalize(text: &str) -> NormalizedText {
    let mut normalized = NormalizedText::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        decompose_canonical(c, |d| {
            if !is_nonspacing_mark(d) {
                normalized.push(d, index);
            }
        });
    }
    normalized
}

/// Accent-stripped form of `text`, without the index mapping.
pub fn strip_accents(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    for c in text.chars() {
        decompose_canonical(c, |d| {
            if !is_nonspacing_mark(d) {
                stripped.push(d);
            }
        });
    }
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composed_accent() {
        // "café" where 'é' is composed (U+00E9)
        let normalized = normalize("caf\u{00e9}");
        assert_eq!(normalized.as_str(), "cafe");
        assert_eq!(normalized.mapping(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_decomposed_accent() {
        // "café" where 'é' is decomposed (U+0065 U+0301)
        let normalized = normalize("cafe\u{0301}");
        assert_eq!(normalized.as_str(), "cafe");
        assert_eq!(normalized.mapping(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_mark_between_chars_keeps_later_indices() {
        let normalized = normalize("a\u{0300}b");
        assert_eq!(normalized.as_str(), "ab");
        assert_eq!(normalized.mapping(), &[0, 2]);
    }

    #[test]
    fn test_empty() {
        let normalized = normalize("");
        assert!(normalized.is_empty());
        assert!(normalized.mapping().is_empty());
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(strip_accents("ÉCOLE Òl"), "ECOLE Ol");
    }

    #[test]
    fn test_no_decomposition() {
        let normalized = normalize("ø漢ß");
        assert_eq!(normalized.as_str(), "ø漢ß");
        assert_eq!(normalized.mapping(), &[0, 1, 2]);
    }

    #[test]
    fn test_hangul_expands() {
        let normalized = normalize("한");
        assert!(normalized.len() > 1);
        assert!(normalized.mapping().iter().all(|&i| i == 0));
    }

    #[test]
    fn test_idempotent() {
        let once = strip_accents("Ayiti se yon peyi ki bèl anpil");
        let twice = normalize(&once);
        assert_eq!(twice.as_str(), once);
        let identity: Vec<usize> = (0..once.chars().count()).collect();
        assert_eq!(twice.mapping(), identity.as_slice());
    }

    #[test]
    fn test_mapping_invariants() {
        let text = "Ñandú, crème brûlée, e\u{0301}te\u{0301}";
        let normalized = normalize(text);
        assert_eq!(normalized.mapping().len(), normalized.as_str().chars().count());
        assert!(normalized.mapping().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(normalized.as_str(), strip_accents(text));

        // Every original char that keeps a non-mark char is reachable from the mapping.
        for (index, c) in text.chars().enumerate() {
            let mut keeps_base = false;
            decompose_canonical(c, |d| keeps_base |= !is_nonspacing_mark(d));
            assert_eq!(
                normalized.mapping().contains(&index),
                keeps_base,
                "char {c:?} at {index}"
            );
        }
    }

    #[test]
    fn test_filter_trait() {
        let filter = AccentFoldingCharFilter::new();
        assert_eq!(filter.name(), "accent_folding");
        assert_eq!(filter.filter("bèl").as_str(), "bel");
    }
}
