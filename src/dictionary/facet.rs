//! Distinct part-of-speech and source values, for populating filter choices.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::dictionary::entry::Entry;

/// Distinct parts of speech across `entries`, sorted.
pub fn distinct_parts_of_speech(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.parts_of_speech.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct source labels (entry- and variant-level) across `entries`, sorted.
pub fn distinct_sources(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.sources.iter().map(|s| s.label.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Number of entries carrying a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub label: String,
    pub count: u64,
}

impl FacetCount {
    pub fn new(label: String, count: u64) -> Self {
        FacetCount { label, count }
    }
}

/// Per-label entry counts for parts of speech and sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    pub parts_of_speech: Vec<FacetCount>,
    pub sources: Vec<FacetCount>,
}

impl FacetCounts {
    /// Count entries per label. An entry counts once per label even if it
    /// carries the label several times. Labels are sorted.
    pub fn collect(entries: &[Entry]) -> Self {
        let mut parts_of_speech: BTreeMap<&str, u64> = BTreeMap::new();
        let mut sources: BTreeMap<&str, u64> = BTreeMap::new();

        for entry in entries {
            let pos: BTreeSet<&str> = entry.parts_of_speech.iter().map(String::as_str).collect();
            for label in pos {
                *parts_of_speech.entry(label).or_insert(0) += 1;
            }
            let labels: BTreeSet<&str> = entry.sources.iter().map(|s| s.label.as_str()).collect();
            for label in labels {
                *sources.entry(label).or_insert(0) += 1;
            }
        }

        FacetCounts {
            parts_of_speech: into_counts(parts_of_speech),
            sources: into_counts(sources),
        }
    }
}

fn into_counts(counts: BTreeMap<&str, u64>) -> Vec<FacetCount> {
    counts
        .into_iter()
        .map(|(label, count)| FacetCount::new(label.to_string(), count))
        .collect()
}
