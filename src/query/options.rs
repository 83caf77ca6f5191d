//! Per-request match options.

use serde::{Deserialize, Serialize};

/// How a query is compared against text.
///
/// Constructed once per search request and shared by every field and entry
/// of that request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Require the match to be flanked by word boundaries.
    pub whole_word: bool,
    /// Compare accented characters as written instead of folding accents away.
    pub match_accents: bool,
    /// Search definition examples along with their glosses.
    pub include_examples: bool,
}

impl MatchOptions {
    /// Create options with every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whole-word matching.
    pub fn whole_word(mut self, whole_word: bool) -> Self {
        self.whole_word = whole_word;
        self
    }

    /// Set accent-sensitive matching.
    pub fn match_accents(mut self, match_accents: bool) -> Self {
        self.match_accents = match_accents;
        self
    }

    /// Set whether examples are searched with definitions.
    pub fn include_examples(mut self, include_examples: bool) -> Self {
        self.include_examples = include_examples;
        self
    }
}
