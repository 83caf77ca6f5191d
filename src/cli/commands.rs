//! Command implementations for the dictsearch CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::facet::FacetCounts;
use crate::dictionary::loader::load_entries;
use crate::dictionary::searcher::{DictionarySearcher, SearchConfig};
use crate::error::Result;
use crate::highlight::{HighlightConfig, Highlighter};

/// Execute a CLI command.
pub fn execute_command(args: DictSearchArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_entries(search_args, &args),
        Command::Highlight(highlight_args) => highlight_text(highlight_args, &args),
        Command::Facets(facets_args) => show_facets(facets_args, &args),
    }
}

/// Search the entries file.
fn search_entries(args: &SearchArgs, cli_args: &DictSearchArgs) -> Result<()> {
    let request = args.to_request();
    let validated = request.validate()?;

    info!("Loading entries from: {}", args.entries_file.display());
    let entries = load_entries(&args.entries_file)?;

    let start_time = Instant::now();
    let searcher = DictionarySearcher::new(SearchConfig::new().parallel(!args.no_parallel));
    let hits = searcher.search_validated(&entries, &validated);
    let duration = start_time.elapsed();

    output_result(
        "Search completed",
        &SearchResults {
            query: validated.query.clone(),
            field: validated.field.to_string(),
            total_hits: hits.len(),
            total_entries: entries.len(),
            duration_ms: duration.as_millis() as u64,
            hits,
            highlight: terminal_highlight(&args.tag),
        },
        cli_args,
    )
}

/// Highlight a query in a single text.
fn highlight_text(args: &HighlightArgs, cli_args: &DictSearchArgs) -> Result<()> {
    let highlighter = Highlighter::new(terminal_highlight(&args.tag));
    let highlighted = highlighter.highlight_query(&args.text, &args.query, args.options());

    output_result(
        "Highlighted text",
        &HighlightResult {
            text: args.text.clone(),
            query: args.query.clone(),
            highlighted,
        },
        cli_args,
    )
}

/// Show distinct parts of speech and sources with entry counts.
fn show_facets(args: &FacetsArgs, cli_args: &DictSearchArgs) -> Result<()> {
    info!("Loading entries from: {}", args.entries_file.display());
    let entries = load_entries(&args.entries_file)?;

    output_result("Facets", &FacetCounts::collect(&entries), cli_args)
}

/// Terminal output shows the text as written, with only the match tags added.
fn terminal_highlight(tag: &str) -> HighlightConfig {
    HighlightConfig::new().tag(tag.to_string()).escape_html(false)
}
