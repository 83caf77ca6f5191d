//! # dictsearch
//!
//! Dictionary lookup over in-memory entries with accent-insensitive,
//! whole-word-aware matching and highlight spans.
//!
//! ## Features
//!
//! - Accent folding with a map back to original character positions
//! - Literal, case-insensitive matching with optional word boundaries
//! - Highlight spans shared by filtering and rendering
//! - Headword, variant and definition search with part-of-speech and source filters
//! - Parallel evaluation over large entry sets

pub mod analysis;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod highlight;
pub mod query;

pub mod prelude {
    pub use crate::analysis::{NormalizedText, normalize, strip_accents};
    pub use crate::dictionary::{
        Definition, DictionarySearcher, Entry, SearchConfig, SearchHit, SearchRequest,
        SearchableField,
    };
    pub use crate::error::{DictError, Result};
    pub use crate::highlight::{HighlightConfig, Highlighter};
    pub use crate::query::{MatchOptions, MatchSpan, TextMatcher, find_matches, matches};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
