//! Search orchestration over in-memory entries.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dictionary::entry::{Definition, Entry, SourceGroups};
use crate::dictionary::field::SearchableField;
use crate::dictionary::request::{SearchRequest, ValidatedRequest};
use crate::error::Result;
use crate::query::matcher::TextMatcher;
use crate::query::span::MatchSpan;

/// Configuration for the searcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Evaluate entries on the rayon thread pool.
    pub parallel: bool,
    /// Minimum number of entries before evaluation goes parallel.
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            parallel: true,
            parallel_threshold: 256,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}

/// Match spans of one definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionHighlights {
    pub gloss: Vec<MatchSpan>,
    pub example: Vec<MatchSpan>,
}

impl DefinitionHighlights {
    /// Collect the spans of `matcher` over the gloss and example of `definition`.
    ///
    /// When the matcher searches examples, spans come from the joined
    /// searchable text and are split at the join, so a match crossing from
    /// gloss into example is highlighted on both sides.
    pub fn collect(definition: &Definition, matcher: &TextMatcher) -> Self {
        if !matcher.options().include_examples {
            return DefinitionHighlights {
                gloss: matcher.find_matches(&definition.gloss),
                example: definition
                    .example
                    .as_deref()
                    .map(|e| matcher.find_matches(e))
                    .unwrap_or_default(),
            };
        }

        let gloss_len = definition.gloss.chars().count();
        // The example starts after the single joining space.
        let example_start = gloss_len + 1;
        let mut highlights = DefinitionHighlights::default();
        for span in matcher.find_matches(&definition.searchable_text(true)) {
            if span.start < gloss_len {
                highlights
                    .gloss
                    .push(MatchSpan::new(span.start, span.end.min(gloss_len)));
            }
            if span.end > example_start {
                highlights.example.push(MatchSpan::new(
                    span.start.max(example_start) - example_start,
                    span.end - example_start,
                ));
            }
        }
        highlights
    }
}

/// Match spans for every displayed text of an entry.
///
/// `variants` and `definitions` are parallel to the entry's own lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryHighlights {
    pub headword: Vec<MatchSpan>,
    pub variants: Vec<Vec<MatchSpan>>,
    pub definitions: Vec<DefinitionHighlights>,
}

impl EntryHighlights {
    /// Collect the spans of `matcher` over every text of `entry`.
    pub fn collect(entry: &Entry, matcher: &TextMatcher) -> Self {
        EntryHighlights {
            headword: matcher.find_matches(&entry.headword),
            variants: entry
                .variants
                .iter()
                .map(|v| matcher.find_matches(&v.text))
                .collect(),
            definitions: entry
                .definitions
                .iter()
                .map(|d| DefinitionHighlights::collect(d, matcher))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.headword.is_empty()
            && self.variants.iter().all(Vec::is_empty)
            && self
                .definitions
                .iter()
                .all(|d| d.gloss.is_empty() && d.example.is_empty())
    }
}

/// One included entry with its display annotations.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub entry: &'a Entry,
    pub sources: SourceGroups,
    pub highlights: EntryHighlights,
}

/// Filters entries by text, part of speech and source.
#[derive(Debug, Clone, Default)]
pub struct DictionarySearcher {
    config: SearchConfig,
}

impl DictionarySearcher {
    /// Create a new searcher.
    pub fn new(config: SearchConfig) -> Self {
        DictionarySearcher { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run `request` over `entries`.
    ///
    /// Hits come back in the order the entries were supplied. Fails only
    /// when the request names an unsupported field.
    pub fn search<'a>(&self, entries: &'a [Entry], request: &SearchRequest) -> Result<Vec<SearchHit<'a>>> {
        let request = request.validate()?;
        Ok(self.search_validated(entries, &request))
    }

    /// Run an already validated request over `entries`.
    pub fn search_validated<'a>(&self, entries: &'a [Entry], request: &ValidatedRequest) -> Vec<SearchHit<'a>> {
        let matcher = request
            .has_query()
            .then(|| TextMatcher::new(&request.query, request.options));
        let evaluate_entry = |entry: &'a Entry| evaluate(entry, request, matcher.as_ref());

        let parallel = self.config.parallel && entries.len() >= self.config.parallel_threshold;
        let hits: Vec<SearchHit<'a>> = if parallel {
            entries.par_iter().filter_map(evaluate_entry).collect()
        } else {
            entries.iter().filter_map(evaluate_entry).collect()
        };

        debug!(
            "Search {:?} in {} (pos: {:?}, source: {:?}): {} of {} entries{}",
            request.query,
            request.field,
            request.part_of_speech,
            request.source,
            hits.len(),
            entries.len(),
            if parallel { " (parallel)" } else { "" }
        );

        hits
    }
}

/// Run `request` over `entries` with the default configuration.
pub fn search<'a>(entries: &'a [Entry], request: &SearchRequest) -> Result<Vec<SearchHit<'a>>> {
    DictionarySearcher::default().search(entries, request)
}

/// Whether the field `field` of `entry` matches.
pub fn field_matches(entry: &Entry, field: SearchableField, matcher: &TextMatcher) -> bool {
    match field {
        SearchableField::Headword => matcher.is_match(&entry.headword),
        SearchableField::Variant => entry.variants.iter().any(|v| matcher.is_match(&v.text)),
        SearchableField::Definition => entry.definitions.iter().any(|d| matcher.is_match(&d.gloss)),
        SearchableField::DefinitionWithExamples => entry
            .definitions
            .iter()
            .any(|d| matcher.is_match(&d.searchable_text(true))),
    }
}

fn evaluate<'a>(
    entry: &'a Entry,
    request: &ValidatedRequest,
    matcher: Option<&TextMatcher>,
) -> Option<SearchHit<'a>> {
    if let Some(pos) = &request.part_of_speech
        && !entry.has_part_of_speech(pos)
    {
        return None;
    }
    if let Some(source) = &request.source
        && !entry.has_source(source)
    {
        return None;
    }
    if let Some(matcher) = matcher
        && !field_matches(entry, request.field, matcher)
    {
        return None;
    }

    let highlights = matcher
        .map(|m| EntryHighlights::collect(entry, m))
        .unwrap_or_default();

    Some(SearchHit {
        entry,
        sources: entry.source_groups(),
        highlights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DictError;
    use crate::query::options::MatchOptions;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new(1, "kreyòl")
                .with_variant(1, "kreyol")
                .with_part_of_speech("n")
                .with_source("FieldNotes")
                .with_definition(Definition::new("Creole language").with_example("Li pale kreyòl.")),
            Entry::new(2, "bèl")
                .with_variant(1, "bel")
                .with_part_of_speech("adj")
                .with_variant_source(1, "Valdman")
                .with_definition(Definition::new("beautiful").with_example("Yon bèl kay.")),
            Entry::new(3, "kay")
                .with_part_of_speech("n")
                .with_source("Valdman")
                .with_definition(Definition::new("house").with_example("Kay la bèl.")),
        ]
    }

    fn ids(hits: &[SearchHit<'_>]) -> Vec<u64> {
        hits.iter().map(|h| h.entry.id.0).collect()
    }

    #[test]
    fn test_headword_accent_insensitive() {
        let entries = entries();
        let hits = search(&entries, &SearchRequest::new("kreyol")).unwrap();
        assert_eq!(ids(&hits), vec![1]);
        assert_eq!(hits[0].highlights.headword, vec![MatchSpan::new(0, 6)]);
    }

    #[test]
    fn test_headword_accent_sensitive() {
        let entries = entries();
        let hits = search(&entries, &SearchRequest::new("kreyol").match_accents(true)).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_variant_field() {
        let entries = entries();
        let hits = search(&entries, &SearchRequest::new("bel").field("variant").whole_word(true)).unwrap();
        assert_eq!(ids(&hits), vec![2]);
        assert_eq!(hits[0].highlights.variants, vec![vec![MatchSpan::new(0, 3)]]);
    }

    #[test]
    fn test_definitions_with_and_without_examples() {
        let entries = entries();
        let request = SearchRequest::new("bel").field("definitions").whole_word(true);
        assert!(search(&entries, &request).unwrap().is_empty());

        let hits = search(&entries, &request.include_examples(true)).unwrap();
        assert_eq!(ids(&hits), vec![2, 3]);
        assert_eq!(hits[1].highlights.definitions[0].example, vec![MatchSpan::new(7, 10)]);
    }

    #[test]
    fn test_no_query_applies_filters_only() {
        let entries = entries();
        assert_eq!(ids(&search(&entries, &SearchRequest::new("")).unwrap()), vec![1, 2, 3]);
        assert_eq!(
            ids(&search(&entries, &SearchRequest::new("").part_of_speech("n")).unwrap()),
            vec![1, 3]
        );
        let hits = search(&entries, &SearchRequest::new("   ").source("Valdman")).unwrap();
        assert_eq!(ids(&hits), vec![2, 3]);
        assert!(hits.iter().all(|h| h.highlights.is_empty()));
    }

    #[test]
    fn test_source_filter_is_exact() {
        let entries = entries();
        assert!(search(&entries, &SearchRequest::new("").source("Valdm")).unwrap().is_empty());
        assert!(search(&entries, &SearchRequest::new("").source("fieldnotes")).unwrap().is_empty());
    }

    #[test]
    fn test_filter_composition() {
        let entries = vec![Entry::new(7, "kreyol").with_source("FieldNotes")];
        let request = SearchRequest::new("kreyol").field("headword");
        assert_eq!(ids(&search(&entries, &request).unwrap()), vec![7]);
        assert!(search(&entries, &request.clone().source("OtherSource")).unwrap().is_empty());
        assert_eq!(
            ids(&search(&entries, &request.source("FieldNotes")).unwrap()),
            vec![7]
        );
    }

    #[test]
    fn test_source_groups_attached() {
        let entries = entries();
        let hits = search(&entries, &SearchRequest::new("bel")).unwrap();
        assert_eq!(hits[0].sources.by_variant[0].sources, vec!["Valdman"]);
        assert!(hits[0].sources.entry_level.is_empty());
    }

    #[test]
    fn test_unsupported_field() {
        let entries = entries();
        let err = search(&entries, &SearchRequest::new("kay").field("content")).unwrap_err();
        assert!(matches!(err, DictError::UnsupportedField(_)));
    }

    #[test]
    fn test_parallel_preserves_order() {
        let entries: Vec<Entry> = (0..1000)
            .map(|i| {
                let headword = if i % 3 == 0 { format!("bèl {i}") } else { format!("kay {i}") };
                Entry::new(i, headword)
            })
            .collect();

        let request = SearchRequest::new("bel");
        let sequential = DictionarySearcher::new(SearchConfig::new().parallel(false))
            .search(&entries, &request)
            .unwrap();
        let parallel = DictionarySearcher::new(SearchConfig::new().parallel_threshold(1))
            .search(&entries, &request)
            .unwrap();

        assert_eq!(ids(&sequential), ids(&parallel));
        assert_eq!(sequential.len(), 334);
        assert!(ids(&parallel).windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_match_across_gloss_and_example_is_highlighted() {
        let entries = vec![
            Entry::new(1, "bèl")
                .with_definition(Definition::new("beautiful, pretty").with_example("Yon bèl fi.")),
        ];
        let request = SearchRequest::new("pretty yon")
            .field("definitions")
            .include_examples(true);

        let hits = search(&entries, &request).unwrap();
        assert_eq!(hits.len(), 1);
        let definition = &hits[0].highlights.definitions[0];
        assert_eq!(definition.gloss, vec![MatchSpan::new(11, 17)]);
        assert_eq!(definition.example, vec![MatchSpan::new(0, 3)]);
        assert!(!hits[0].highlights.is_empty());
    }

    #[test]
    fn test_definition_highlights_split_at_join() {
        let definition = Definition::new("pretty").with_example("Yon bèl fi. Pretty");
        let matcher = TextMatcher::new("pretty", MatchOptions::new().include_examples(true));
        let highlights = DefinitionHighlights::collect(&definition, &matcher);
        assert_eq!(highlights.gloss, vec![MatchSpan::new(0, 6)]);
        assert_eq!(highlights.example, vec![MatchSpan::new(12, 18)]);

        // Without examples searched, gloss and example are matched on their own.
        let matcher = TextMatcher::new("pretty yon", MatchOptions::new());
        let highlights = DefinitionHighlights::collect(&definition, &matcher);
        assert!(highlights.gloss.is_empty());
        assert!(highlights.example.is_empty());
    }
}
