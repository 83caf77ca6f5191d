//! Command line argument parsing for the dictsearch CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::dictionary::request::SearchRequest;
use crate::query::options::MatchOptions;

/// dictsearch - Accent-insensitive dictionary lookup
#[derive(Parser, Debug, Clone)]
#[command(name = "dictsearch")]
#[command(about = "Accent-insensitive, whole-word-aware dictionary lookup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DictSearchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DictSearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search dictionary entries
    Search(SearchArgs),

    /// Highlight a query in a piece of text
    Highlight(HighlightArgs),

    /// List distinct parts of speech and sources
    Facets(FacetsArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Entries file (JSON array or JSON Lines)
    #[arg(value_name = "ENTRIES_FILE")]
    pub entries_file: PathBuf,

    /// Query string (omit to list entries matching the filters)
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Field to search in: headword, variant or definitions
    #[arg(long, default_value = "headword")]
    pub field: String,

    /// Only match whole words
    #[arg(short, long)]
    pub whole_word: bool,

    /// Treat accented and unaccented letters as different
    #[arg(short = 'a', long)]
    pub match_accents: bool,

    /// Search definition examples as well as glosses
    #[arg(short = 'e', long)]
    pub include_examples: bool,

    /// Only include entries with this part of speech
    #[arg(long = "pos", value_name = "PART_OF_SPEECH")]
    pub part_of_speech: Option<String>,

    /// Only include entries attested by this source
    #[arg(long)]
    pub source: Option<String>,

    /// Evaluate entries on a single thread
    #[arg(long)]
    pub no_parallel: bool,

    /// HTML tag wrapped around matches in human output
    #[arg(long, default_value = "mark")]
    pub tag: String,
}

impl SearchArgs {
    /// Build the search request described by these arguments.
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest::new(self.query.clone())
            .field(self.field.clone())
            .whole_word(self.whole_word)
            .match_accents(self.match_accents)
            .include_examples(self.include_examples)
            .part_of_speech(self.part_of_speech.clone().unwrap_or_default())
            .source(self.source.clone().unwrap_or_default())
    }
}

/// Arguments for highlighting
#[derive(Parser, Debug, Clone)]
pub struct HighlightArgs {
    /// Text to highlight
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Only match whole words
    #[arg(short, long)]
    pub whole_word: bool,

    /// Treat accented and unaccented letters as different
    #[arg(short = 'a', long)]
    pub match_accents: bool,

    /// HTML tag wrapped around matches
    #[arg(long, default_value = "mark")]
    pub tag: String,
}

impl HighlightArgs {
    pub fn options(&self) -> MatchOptions {
        MatchOptions::new()
            .whole_word(self.whole_word)
            .match_accents(self.match_accents)
    }
}

/// Arguments for listing facets
#[derive(Parser, Debug, Clone)]
pub struct FacetsArgs {
    /// Entries file (JSON array or JSON Lines)
    #[arg(value_name = "ENTRIES_FILE")]
    pub entries_file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_search_command() {
        let args = DictSearchArgs::try_parse_from([
            "dictsearch",
            "search",
            "entries.jsonl",
            "kreyol",
            "--field",
            "definitions",
            "--whole-word",
            "--include-examples",
            "--source",
            "FieldNotes",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.entries_file, PathBuf::from("entries.jsonl"));
            let request = search_args.to_request();
            assert_eq!(request.query, "kreyol");
            assert_eq!(request.field, "definitions");
            assert!(request.whole_word);
            assert!(!request.match_accents);
            assert!(request.include_examples);
            assert_eq!(request.source, "FieldNotes");
            assert_eq!(request.part_of_speech, "");
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_search_without_query() {
        let args =
            DictSearchArgs::try_parse_from(["dictsearch", "search", "entries.json", "--pos", "n"])
                .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.query, "");
            assert_eq!(search_args.field, "headword");
            assert_eq!(search_args.to_request().part_of_speech, "n");
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_highlight_command() {
        let args = DictSearchArgs::try_parse_from([
            "dictsearch",
            "highlight",
            "Un café",
            "cafe",
            "-a",
        ])
        .unwrap();

        if let Command::Highlight(highlight_args) = args.command {
            assert_eq!(highlight_args.text, "Un café");
            assert_eq!(highlight_args.options(), MatchOptions::new().match_accents(true));
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = DictSearchArgs::try_parse_from(["dictsearch", "facets", "e.json"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = DictSearchArgs::try_parse_from(["dictsearch", "-vv", "facets", "e.json"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = DictSearchArgs::try_parse_from(["dictsearch", "--quiet", "facets", "e.json"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            DictSearchArgs::try_parse_from(["dictsearch", "--format", "json", "facets", "e.json"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
