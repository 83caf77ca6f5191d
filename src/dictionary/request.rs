//! Flat search request parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::dictionary::field::SearchableField;
use crate::error::Result;
use crate::query::options::MatchOptions;

/// Search parameters as they arrive from the caller.
///
/// Every field is optional when deserializing. `field` defaults to
/// `headword`; `search` and `q` are accepted for `query`.
///
/// # Example
///
/// ```
/// use dictsearch::dictionary::{SearchRequest, SearchableField};
///
/// let request: SearchRequest =
///     serde_json::from_str(r#"{"q": "kreyol", "field": "definitions", "include_examples": true}"#)
///         .unwrap();
/// let validated = request.validate().unwrap();
/// assert_eq!(validated.field, SearchableField::DefinitionWithExamples);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    #[serde(alias = "search", alias = "q")]
    pub query: String,
    pub field: String,
    pub whole_word: bool,
    pub match_accents: bool,
    pub include_examples: bool,
    pub part_of_speech: String,
    pub source: String,
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest {
            query: String::new(),
            field: SearchableField::Headword.as_str().to_string(),
            whole_word: false,
            match_accents: false,
            include_examples: false,
            part_of_speech: String::new(),
            source: String::new(),
        }
    }
}

impl SearchRequest {
    /// Create a headword request for `query`.
    pub fn new<S: Into<String>>(query: S) -> Self {
        SearchRequest {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = field.into();
        self
    }

    pub fn whole_word(mut self, whole_word: bool) -> Self {
        self.whole_word = whole_word;
        self
    }

    pub fn match_accents(mut self, match_accents: bool) -> Self {
        self.match_accents = match_accents;
        self
    }

    pub fn include_examples(mut self, include_examples: bool) -> Self {
        self.include_examples = include_examples;
        self
    }

    pub fn part_of_speech<S: Into<String>>(mut self, pos: S) -> Self {
        self.part_of_speech = pos.into();
        self
    }

    pub fn source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = source.into();
        self
    }

    /// The match options carried by this request.
    pub fn options(&self) -> MatchOptions {
        MatchOptions::new()
            .whole_word(self.whole_word)
            .match_accents(self.match_accents)
            .include_examples(self.include_examples)
    }

    /// Check the request and resolve it into typed parameters.
    ///
    /// Fails with [`crate::error::DictError::UnsupportedField`] when `field`
    /// is not a known field name. Surrounding whitespace is trimmed from the
    /// query and both filters; blank values mean "not given".
    pub fn validate(&self) -> Result<ValidatedRequest> {
        let options = self.options();
        let field = SearchableField::resolve(self.field.trim(), options.include_examples)?;
        Ok(ValidatedRequest {
            query: self.query.trim().to_string(),
            field,
            options,
            part_of_speech: non_blank(&self.part_of_speech),
            source: non_blank(&self.source),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// A request whose field name has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Trimmed query; empty means no text filter.
    pub query: String,
    pub field: SearchableField,
    pub options: MatchOptions,
    pub part_of_speech: Option<String>,
    pub source: Option<String>,
}

impl ValidatedRequest {
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}
