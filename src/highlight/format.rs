//! Inline formatting used when rendering dictionary text.

use std::sync::LazyLock;

use regex::Regex;

static ASTERISK_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*(.+?)\*").expect("Asterisk emphasis pattern should be valid")
});

/// Convert `*word*` into `<em>word</em>`.
///
/// Emphasis does not span lines. An unpaired asterisk is left as is.
pub fn italicize_asterisks(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    ASTERISK_EMPHASIS
        .replace_all(text, "<em>$1</em>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_italicize() {
        assert_eq!(
            italicize_asterisks("Ex: *Li bèl* anpil, *wi*."),
            "Ex: <em>Li bèl</em> anpil, <em>wi</em>."
        );
    }

    #[test]
    fn test_unpaired_and_empty() {
        assert_eq!(italicize_asterisks("2 * 3"), "2 * 3");
        assert_eq!(italicize_asterisks("**"), "**");
        assert_eq!(italicize_asterisks(""), "");
    }

    #[test]
    fn test_does_not_cross_lines() {
        assert_eq!(italicize_asterisks("*a\nb*"), "*a\nb*");
    }
}
