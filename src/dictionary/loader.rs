//! Reading entries from JSON or JSON Lines.

use std::fs;
use std::path::Path;

use log::debug;

use crate::dictionary::entry::Entry;
use crate::error::{DictError, Result};

/// Load entries from a file holding either a JSON array or one entry per line.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let entries = parse_entries(&content)?;
    debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse entries from a JSON array or from JSON Lines.
///
/// Blank lines are skipped in JSON Lines input. A malformed line fails the
/// whole parse with its 1-based line number.
pub fn parse_entries(content: &str) -> Result<Vec<Entry>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    let mut entries = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry = serde_json::from_str::<Entry>(line).map_err(|e| {
            DictError::invalid_argument(format!("Error parsing entry on line {}: {}", line_num + 1, e))
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let entries = parse_entries(r#"[{"id": 1, "headword": "kay"}, {"id": 2, "headword": "bèl"}]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].headword, "bèl");
    }

    #[test]
    fn test_parse_lines() {
        let content = "{\"id\": 1, \"headword\": \"kay\"}\n\n{\"id\": 2, \"headword\": \"lakay\"}\n";
        let entries = parse_entries(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].headword, "kay");
    }

    #[test]
    fn test_parse_bad_line() {
        let content = "{\"id\": 1, \"headword\": \"kay\"}\n{\"id\": \"x\"}\n";
        let err = parse_entries(content).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_entries("").unwrap().is_empty());
        assert!(parse_entries("[]").unwrap().is_empty());
    }
}
