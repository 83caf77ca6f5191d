//! Dictionary entry records.
//!
//! An [`Entry`] owns its variants, definitions and sources. A source that
//! belongs to a variant refers to it by [`VariantId`] instead of holding a
//! reference, so the record stays a plain tree.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Identifier of a dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

/// Identifier of a variant, unique within its entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u64);

/// An alternative spelling or form of a headword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub text: String,
}

/// A gloss with an optional usage example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub gloss: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Definition {
    pub fn new<S: Into<String>>(gloss: S) -> Self {
        Definition {
            gloss: gloss.into(),
            example: None,
        }
    }

    pub fn with_example<S: Into<String>>(mut self, example: S) -> Self {
        self.example = Some(example.into());
        self
    }

    /// The text searched for this definition.
    ///
    /// With `include_examples`, the example follows the gloss separated by a
    /// single space.
    pub fn searchable_text(&self, include_examples: bool) -> Cow<'_, str> {
        match &self.example {
            Some(example) if include_examples && !example.is_empty() => {
                Cow::Owned(format!("{} {}", self.gloss, example))
            }
            _ => Cow::Borrowed(&self.gloss),
        }
    }
}

/// A bibliographic or field source attesting an entry or one of its variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub label: String,
    /// The variant this source attests, or `None` for the entry itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
}

/// A dictionary entry as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub headword: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Entry {
    /// Create an entry with only a headword.
    pub fn new<S: Into<String>>(id: u64, headword: S) -> Self {
        Entry {
            id: EntryId(id),
            headword: headword.into(),
            variants: Vec::new(),
            definitions: Vec::new(),
            parts_of_speech: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn with_variant<S: Into<String>>(mut self, id: u64, text: S) -> Self {
        self.variants.push(Variant {
            id: VariantId(id),
            text: text.into(),
        });
        self
    }

    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn with_part_of_speech<S: Into<String>>(mut self, pos: S) -> Self {
        self.parts_of_speech.push(pos.into());
        self
    }

    /// Add an entry-level source.
    pub fn with_source<S: Into<String>>(mut self, label: S) -> Self {
        self.sources.push(Source {
            label: label.into(),
            variant_id: None,
        });
        self
    }

    /// Add a source attached to the variant `variant_id`.
    pub fn with_variant_source<S: Into<String>>(mut self, variant_id: u64, label: S) -> Self {
        self.sources.push(Source {
            label: label.into(),
            variant_id: Some(VariantId(variant_id)),
        });
        self
    }

    pub fn variant(&self, id: VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Whether one of the entry's parts of speech equals `pos` exactly.
    pub fn has_part_of_speech(&self, pos: &str) -> bool {
        self.parts_of_speech.iter().any(|p| p == pos)
    }

    /// Whether an entry-level or variant-level source label equals `label` exactly.
    pub fn has_source(&self, label: &str) -> bool {
        self.sources.iter().any(|s| s.label == label)
    }

    /// Group the sources for display.
    ///
    /// Sources without a variant, or naming a variant this entry does not
    /// have, are entry-level. Variant groups follow variant order and omit
    /// variants without sources.
    pub fn source_groups(&self) -> SourceGroups {
        let mut groups = SourceGroups::default();

        for variant in &self.variants {
            let sources: Vec<String> = self
                .sources
                .iter()
                .filter(|s| s.variant_id == Some(variant.id))
                .map(|s| s.label.clone())
                .collect();
            if !sources.is_empty() {
                groups.by_variant.push(VariantSources {
                    variant_id: variant.id,
                    variant: variant.text.clone(),
                    sources,
                });
            }
        }

        groups.entry_level = self
            .sources
            .iter()
            .filter(|s| s.variant_id.is_none_or(|id| self.variant(id).is_none()))
            .map(|s| s.label.clone())
            .collect();

        groups
    }
}

/// Sources of one entry, partitioned for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceGroups {
    pub entry_level: Vec<String>,
    pub by_variant: Vec<VariantSources>,
}

/// Sources attached to one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSources {
    pub variant_id: VariantId,
    pub variant: String,
    pub sources: Vec<String>,
}
