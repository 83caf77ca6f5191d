//! Match spans in original-text coordinates.

use std::ops::Range;
use std::str::CharIndices;

use serde::{Deserialize, Serialize};

/// A single match occurrence.
///
/// `start` and `end` are char (code point) indices into the original text,
/// end exclusive. Spans produced by one search are ordered and never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl MatchSpan {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        MatchSpan { start, end }
    }

    /// Number of chars covered by this span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this span overlaps with another span.
    pub fn overlaps(&self, other: &MatchSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The span as a char range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The span as a byte range into `text`.
    ///
    /// Indices past the end of `text` are clamped to its length.
    pub fn byte_range(&self, text: &str) -> Range<usize> {
        let start = byte_offset(text, self.start);
        let end = byte_offset(text, self.end).max(start);
        start..end
    }

    /// The covered substring of `text`.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.byte_range(text)]
    }
}

impl From<Range<usize>> for MatchSpan {
    fn from(range: Range<usize>) -> Self {
        MatchSpan::new(range.start, range.end)
    }
}

/// Byte offset of the char at `char_index`, or the text length when past the end.
pub(crate) fn byte_offset(text: &str, char_index: usize) -> usize {
    CharCursor::new(text).seek(char_index)
}

/// Forward-only conversion from char indices to byte offsets.
///
/// Seeking ordered char indices walks the text once.
pub(crate) struct CharCursor<'a> {
    chars: CharIndices<'a>,
    position: usize,
}

impl<'a> CharCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        CharCursor {
            chars: text.char_indices(),
            position: 0,
        }
    }

    /// Byte offset of the char at `char_index`, clamped to the text length.
    ///
    /// Indices behind the current position resolve to the current offset.
    pub(crate) fn seek(&mut self, char_index: usize) -> usize {
        while self.position < char_index {
            if self.chars.next().is_none() {
                self.position = char_index;
                break;
            }
            self.position += 1;
        }
        self.chars.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_cursor_walks_forward() {
        let text = "bèl fi";
        let mut cursor = CharCursor::new(text);
        assert_eq!(cursor.seek(0), 0);
        assert_eq!(cursor.seek(2), 3);
        assert_eq!(cursor.seek(4), 5);
        assert_eq!(cursor.seek(6), text.len());
        assert_eq!(cursor.seek(10), text.len());
    }

    #[test]
    fn test_span_basics() {
        let span = MatchSpan::new(4, 7);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(span.range(), 4..7);
        assert!(span.overlaps(&MatchSpan::new(6, 9)));
        assert!(!span.overlaps(&MatchSpan::new(7, 9)));
    }

    #[test]
    fn test_slice_uses_char_indices() {
        let text = "bèl café";
        let span = MatchSpan::new(4, 8);
        assert_eq!(span.slice(text), "café");
        assert_eq!(MatchSpan::new(0, 3).slice(text), "bèl");
        assert_eq!(MatchSpan::new(6, 20).slice(text), "fé");
    }
}
