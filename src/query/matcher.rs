//! Literal, case-insensitive text matching with optional accent folding.
//!
//! The query is escaped and compiled into a single [`Regex`]. When accents
//! are folded, the text is first run through the accent folding char filter
//! and the spans found in the canonical text are translated back through its
//! index mapping. When accents are matched, the identity char filter is used
//! instead, so both domains report spans in original char indices.
//!
//! Whole-word matching checks every candidate against word boundaries in the
//! domain being scanned. A word char is any alphanumeric char or `_`.
//!
//! # Examples
//!
//! ```
//! use dictsearch::query::{MatchOptions, MatchSpan, find_matches};
//!
//! let spans = find_matches("Mwen renmen kafé", "cafe", MatchOptions::new());
//! assert!(spans.is_empty());
//!
//! let spans = find_matches("café crème", "cafe", MatchOptions::new());
//! assert_eq!(spans, vec![MatchSpan::new(0, 4)]);
//! ```

use std::borrow::Cow;
use std::ops::Range;

use log::warn;
use regex::{Regex, RegexBuilder};

use crate::analysis::char_filter::accent_folding::{AccentFoldingCharFilter, strip_accents};
use crate::analysis::char_filter::{CharFilter, IdentityCharFilter};
use crate::error::{DictError, Result};
use crate::query::options::MatchOptions;
use crate::query::span::MatchSpan;

/// Compiled size limit for query patterns.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A query compiled for repeated matching.
///
/// Built once per request and reused for every text that request looks at.
/// A matcher with no pattern (empty query, or a pattern that failed to
/// compile) never matches anything.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    regex: Option<Regex>,
    options: MatchOptions,
}

impl TextMatcher {
    /// Compile `query` under `options`.
    ///
    /// Pattern construction failures are logged and degrade to a matcher
    /// that never matches.
    pub fn new(query: &str, options: MatchOptions) -> Self {
        Self::with_size_limit(query, options, DEFAULT_SIZE_LIMIT)
    }

    /// Compile `query` with an explicit compiled size limit.
    pub fn with_size_limit(query: &str, options: MatchOptions, size_limit: usize) -> Self {
        match Self::try_with_size_limit(query, options, size_limit) {
            Ok(matcher) => matcher,
            Err(e) => {
                warn!("Falling back to no matches for query {query:?}: {e}");
                TextMatcher {
                    regex: None,
                    options,
                }
            }
        }
    }

    fn try_with_size_limit(query: &str, options: MatchOptions, size_limit: usize) -> Result<Self> {
        let needle = if options.match_accents {
            query.to_string()
        } else {
            strip_accents(query)
        };

        if needle.is_empty() {
            return Ok(TextMatcher {
                regex: None,
                options,
            });
        }

        let regex = RegexBuilder::new(&regex::escape(&needle))
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()
            .map_err(|e| DictError::query(format!("Invalid pattern: {e}")))?;

        Ok(TextMatcher {
            regex: Some(regex),
            options,
        })
    }

    /// The options this matcher was compiled with.
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Whether this matcher can never match (empty query or failed pattern).
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    /// The char filter producing the domain this matcher scans.
    pub fn char_filter(&self) -> &'static dyn CharFilter {
        if self.options.match_accents {
            &IdentityCharFilter
        } else {
            &AccentFoldingCharFilter
        }
    }

    /// Check whether `text` contains at least one match.
    pub fn is_match(&self, text: &str) -> bool {
        let Some(regex) = &self.regex else {
            return false;
        };
        let haystack = if self.options.match_accents {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(strip_accents(text))
        };
        self.find_from(regex, &haystack, 0).is_some()
    }

    /// Find every match in `text`, left to right and non-overlapping.
    pub fn find_matches(&self, text: &str) -> Vec<MatchSpan> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };

        let domain = self.char_filter().filter(text);
        let haystack = domain.as_str();

        let mut spans: Vec<MatchSpan> = Vec::new();
        let mut from = 0;
        while let Some(found) = self.find_from(regex, haystack, from) {
            from = found.end;
            let Some(range) = domain.original_range_from_bytes(found) else {
                continue;
            };
            match spans.last_mut() {
                // Two canonical matches can end and start inside the same
                // expanded original char; they share it.
                Some(last) if range.start < last.end => last.end = last.end.max(range.end),
                _ => spans.push(MatchSpan::from(range)),
            }
        }
        spans
    }

    /// Leftmost accepted match starting at or after byte `from`.
    fn find_from(&self, regex: &Regex, haystack: &str, mut from: usize) -> Option<Range<usize>> {
        while from <= haystack.len() {
            let found = regex.find_at(haystack, from)?;
            if !self.options.whole_word
                || (is_word_boundary(haystack, found.start())
                    && is_word_boundary(haystack, found.end()))
            {
                return Some(found.range());
            }
            // Rejected: retry one char past its start.
            from = found.start()
                + haystack[found.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }
        None
    }
}

/// Word chars for whole-word matching.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether byte offset `at` sits between a word char and a non-word char,
/// counting the text edges as non-word.
fn is_word_boundary(haystack: &str, at: usize) -> bool {
    let before = haystack[..at].chars().next_back().is_some_and(is_word_char);
    let after = haystack[at..].chars().next().is_some_and(is_word_char);
    before != after
}

/// Find all matches of `query` in `text`.
pub fn find_matches(text: &str, query: &str, options: MatchOptions) -> Vec<MatchSpan> {
    TextMatcher::new(query, options).find_matches(text)
}

/// Check whether `query` matches anywhere in `text`.
pub fn matches(text: &str, query: &str, options: MatchOptions) -> bool {
    TextMatcher::new(query, options).is_match(text)
}
