//! Query matching over plain text.
//!
//! A query is always literal text. It is compiled once into a
//! [`matcher::TextMatcher`] that answers "does this text match" for
//! filtering and "where does it match" for highlighting, using the same
//! normalization for both.

pub mod matcher;
pub mod options;
pub mod span;

// Re-export commonly used types
pub use matcher::{TextMatcher, find_matches, matches};
pub use options::MatchOptions;
pub use span::MatchSpan;
