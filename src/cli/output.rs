//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{DictSearchArgs, OutputFormat};
use crate::dictionary::facet::{FacetCount, FacetCounts};
use crate::dictionary::searcher::SearchHit;
use crate::error::Result;
use crate::highlight::format::italicize_asterisks;
use crate::highlight::{HighlightConfig, Highlighter};

/// Results that know how to print themselves for a human reader.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Result structure for search operations.
#[derive(Debug, Serialize)]
pub struct SearchResults<'a> {
    pub query: String,
    pub field: String,
    pub total_hits: usize,
    pub total_entries: usize,
    pub duration_ms: u64,
    pub hits: Vec<SearchHit<'a>>,
    #[serde(skip)]
    pub highlight: HighlightConfig,
}

/// Result structure for highlighting a single text.
#[derive(Debug, Serialize)]
pub struct HighlightResult {
    pub text: String,
    pub query: String,
    pub highlighted: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanReadable>(
    message: &str,
    result: &T,
    args: &DictSearchArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &DictSearchArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DictSearchArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanReadable for SearchResults<'_> {
    fn print_human(&self) {
        let highlighter = Highlighter::new(self.highlight.clone());

        println!("Search Results:");
        println!("═══════════════");

        for (i, hit) in self.hits.iter().enumerate() {
            let entry = hit.entry;
            let highlights = &hit.highlights;

            println!();
            println!(
                "{}. {}",
                i + 1,
                highlighter.highlight(&entry.headword, &highlights.headword)
            );
            println!("─────────────");

            if !entry.parts_of_speech.is_empty() {
                println!("Part of speech: {}", entry.parts_of_speech.join(", "));
            }

            if !entry.variants.is_empty() {
                let variants: Vec<String> = entry
                    .variants
                    .iter()
                    .enumerate()
                    .map(|(j, v)| {
                        let spans = highlights.variants.get(j).map(Vec::as_slice).unwrap_or(&[]);
                        highlighter.highlight(&v.text, spans)
                    })
                    .collect();
                println!("Variants: {}", variants.join(", "));
            }

            for (j, definition) in entry.definitions.iter().enumerate() {
                let spans = highlights.definitions.get(j);
                let gloss = highlighter.highlight(
                    &definition.gloss,
                    spans.map(|s| s.gloss.as_slice()).unwrap_or(&[]),
                );
                println!("  {}) {}", j + 1, italicize_asterisks(&gloss));
                if let Some(example) = &definition.example {
                    let example = highlighter.highlight(
                        example,
                        spans.map(|s| s.example.as_slice()).unwrap_or(&[]),
                    );
                    println!("     {}", italicize_asterisks(&example));
                }
            }

            if !hit.sources.entry_level.is_empty() {
                println!("Sources: {}", hit.sources.entry_level.join("; "));
            }
            for group in &hit.sources.by_variant {
                println!("Sources ({}): {}", group.variant, group.sources.join("; "));
            }
        }

        println!();
        println!("Total hits: {} of {} entries", self.total_hits, self.total_entries);
        println!("Search time: {}ms", self.duration_ms);
    }
}

impl HumanReadable for HighlightResult {
    fn print_human(&self) {
        println!("{}", self.highlighted);
    }
}

impl HumanReadable for FacetCounts {
    fn print_human(&self) {
        print_facet_section("Parts of Speech:", &self.parts_of_speech);
        println!();
        print_facet_section("Sources:", &self.sources);
    }
}

fn print_facet_section(title: &str, counts: &[FacetCount]) {
    println!("{title}");
    println!("{}", "─".repeat(title.chars().count()));
    for count in counts {
        println!("  {} ({})", count.label, count.count);
    }
}
