//! Dictionary entries and the search orchestration over them.
//!
//! Entries are supplied already loaded; this module never persists or
//! mutates them. A search compiles the request once, evaluates every entry
//! against it and returns the included entries in input order, each with its
//! sources grouped for display and the match spans of every displayed text.

pub mod entry;
pub mod facet;
pub mod field;
pub mod loader;
pub mod request;
pub mod searcher;

// Re-export commonly used types
pub use entry::{Definition, Entry, EntryId, Source, SourceGroups, Variant, VariantId, VariantSources};
pub use facet::{FacetCount, FacetCounts, distinct_parts_of_speech, distinct_sources};
pub use field::SearchableField;
pub use loader::{load_entries, parse_entries};
pub use request::{SearchRequest, ValidatedRequest};
pub use searcher::{
    DefinitionHighlights, DictionarySearcher, EntryHighlights, SearchConfig, SearchHit, search,
};
