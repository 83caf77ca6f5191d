//! Char filter implementations for text normalization.
//!
//! A char filter pre-processes a string before it is compared against a
//! query. Unlike a plain string transformation, a char filter also reports
//! where every output character came from, so matches found in the filtered
//! text can be reported in the coordinates of the original text.
//!
//! # Available Filters
//!
//! - [`accent_folding::AccentFoldingCharFilter`] - Canonical decomposition with nonspacing marks removed
//! - [`IdentityCharFilter`] - No change, used when accents must match
//!
//! # Examples
//!
//! ```
//! use dictsearch::analysis::char_filter::CharFilter;
//! use dictsearch::analysis::char_filter::accent_folding::AccentFoldingCharFilter;
//!
//! let filter = AccentFoldingCharFilter::new();
//! let normalized = filter.filter("Kreyòl");
//! assert_eq!(normalized.as_str(), "Kreyol");
//! assert_eq!(normalized.mapping(), &[0, 1, 2, 3, 4, 5]);
//! ```

use crate::analysis::normalized::NormalizedText;

/// Trait for character filters that canonicalize text before matching.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// The returned [`NormalizedText`] carries the filtered text along with
    /// the original char index of every retained char.
    fn filter(&self, input: &str) -> NormalizedText;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// A char filter that leaves the text untouched.
#[derive(Clone, Debug, Default)]
pub struct IdentityCharFilter;

impl CharFilter for IdentityCharFilter {
    fn filter(&self, input: &str) -> NormalizedText {
        NormalizedText::identity(input)
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

pub mod accent_folding;
