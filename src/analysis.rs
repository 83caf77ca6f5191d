//! Text analysis for accent-insensitive matching.
//!
//! This module provides the canonicalization step shared by filtering and
//! highlighting: text is decomposed, nonspacing marks are dropped, and every
//! retained character remembers the original character it came from.

pub mod char_filter;
pub mod normalized;

// Re-export commonly used types
pub use char_filter::accent_folding::{AccentFoldingCharFilter, normalize, strip_accents};
pub use char_filter::CharFilter;
pub use normalized::NormalizedText;
