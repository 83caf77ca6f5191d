//! Rendering of match spans as highlighted markup.

pub mod format;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::query::matcher::TextMatcher;
use crate::query::options::MatchOptions;
use crate::query::span::{CharCursor, MatchSpan};

/// Configuration for text highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// HTML tag to wrap highlighted text (e.g., "mark", "em", "strong").
    pub tag: String,
    /// CSS class to add to highlight tags.
    pub css_class: Option<String>,
    /// Escape `&`, `<`, `>`, `"` and `'` in the copied text.
    pub escape_html: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "mark".to_string(),
            css_class: None,
            escape_html: true,
        }
    }
}

impl HighlightConfig {
    /// Create a new highlight configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML tag for highlighting.
    pub fn tag(mut self, tag: String) -> Self {
        self.tag = tag;
        self
    }

    /// Set the CSS class for highlight tags.
    pub fn css_class(mut self, css_class: String) -> Self {
        self.css_class = Some(css_class);
        self
    }

    /// Set whether copied text is HTML-escaped.
    pub fn escape_html(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    /// Build the opening HTML tag.
    pub fn opening_tag(&self) -> String {
        if let Some(ref css_class) = self.css_class {
            format!("<{} class=\"{}\">", self.tag, css_class)
        } else {
            format!("<{}>", self.tag)
        }
    }

    /// Build the closing HTML tag.
    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// Wraps matched spans of a text in highlight tags.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a new highlighter.
    pub fn new(config: HighlightConfig) -> Self {
        Highlighter { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Render `text` with every span wrapped in the configured tag.
    ///
    /// `spans` must be ordered and non-overlapping, as produced by
    /// [`TextMatcher::find_matches`]. The text is walked once; gaps are copied
    /// verbatim. A span that starts before the end of the previous one is
    /// skipped.
    pub fn highlight(&self, text: &str, spans: &[MatchSpan]) -> String {
        if spans.is_empty() {
            return self.escape(text).into_owned();
        }

        let opening = self.config.opening_tag();
        let closing = self.config.closing_tag();
        let mut result = String::with_capacity(text.len() + spans.len() * (opening.len() + closing.len()));
        let mut cursor = CharCursor::new(text);
        let mut last_char = 0;
        let mut last_end = 0;

        for span in spans {
            if span.start < last_char || span.is_empty() {
                continue;
            }
            let start = cursor.seek(span.start);
            let end = cursor.seek(span.end);
            if start == end {
                continue;
            }
            result.push_str(&self.escape(&text[last_end..start]));
            result.push_str(&opening);
            result.push_str(&self.escape(&text[start..end]));
            result.push_str(&closing);
            last_char = span.end;
            last_end = end;
        }

        result.push_str(&self.escape(&text[last_end..]));
        result
    }

    /// Render `text` highlighted for `matcher`.
    pub fn highlight_with(&self, matcher: &TextMatcher, text: &str) -> String {
        self.highlight(text, &matcher.find_matches(text))
    }

    /// Render `text` highlighted for a literal `query`.
    ///
    /// An empty text or query, or a query whose pattern cannot be built,
    /// yields the text unchanged.
    pub fn highlight_query(&self, text: &str, query: &str, options: MatchOptions) -> String {
        if text.is_empty() || query.is_empty() {
            return self.escape(text).into_owned();
        }
        self.highlight_with(&TextMatcher::new(query, options), text)
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.escape_html {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
