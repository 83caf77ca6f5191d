//! Canonical text with a back-mapping to the original characters.

use std::ops::Range;

/// A canonicalized string that remembers where each of its characters came from.
///
/// `mapping[i]` is the char index in the original text that produced the
/// `i`-th char of the canonical text. The mapping is non-decreasing and has
/// exactly one entry per canonical char. A parallel table of byte offsets lets
/// byte ranges reported by `regex` be converted back to char indices without
/// rescanning the string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    mapping: Vec<usize>,
    byte_offsets: Vec<usize>,
}

impl NormalizedText {
    /// Create an empty normalized text with room for `capacity` chars.
    pub fn with_capacity(capacity: usize) -> Self {
        NormalizedText {
            text: String::with_capacity(capacity),
            mapping: Vec::with_capacity(capacity),
            byte_offsets: Vec::with_capacity(capacity),
        }
    }

    /// Build a normalized text that is the original text itself.
    ///
    /// Every char maps to its own index. Used when comparison happens in the
    /// original domain, so both domains share the same span translation.
    pub fn identity(text: &str) -> Self {
        let mut normalized = NormalizedText::with_capacity(text.len());
        for (index, c) in text.chars().enumerate() {
            normalized.push(c, index);
        }
        normalized
    }

    /// Append a canonical char produced by the original char at `original_index`.
    pub(crate) fn push(&mut self, c: char, original_index: usize) {
        debug_assert!(self.mapping.last().is_none_or(|&last| last <= original_index));
        self.byte_offsets.push(self.text.len());
        self.text.push(c);
        self.mapping.push(original_index);
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Canonical char index to original char index.
    pub fn mapping(&self) -> &[usize] {
        &self.mapping
    }

    /// Number of canonical chars.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Convert a byte offset in the canonical text into a char index.
    ///
    /// `byte_offset` must lie on a char boundary; the end of the text maps to
    /// `len()`.
    pub fn char_index(&self, byte_offset: usize) -> usize {
        match self.byte_offsets.binary_search(&byte_offset) {
            Ok(index) => index,
            Err(index) => index,
        }
    }

    /// Translate a canonical char range into a range of original char indices.
    ///
    /// Returns `None` for empty or out-of-bounds ranges. The end is exclusive
    /// and lands just after the original char that produced the last
    /// canonical char of the range.
    pub fn original_range(&self, range: Range<usize>) -> Option<Range<usize>> {
        if range.start >= range.end || range.end > self.mapping.len() {
            return None;
        }
        let start = self.mapping[range.start];
        let end = self.mapping[range.end - 1] + 1;
        Some(start..end)
    }

    /// Translate a canonical byte range (as reported by `regex`) into original char indices.
    pub fn original_range_from_bytes(&self, range: Range<usize>) -> Option<Range<usize>> {
        self.original_range(self.char_index(range.start)..self.char_index(range.end))
    }
}
