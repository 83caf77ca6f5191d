//! Which text of an entry a query is matched against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DictError;

/// A searchable text field of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchableField {
    /// The headword.
    Headword,
    /// Any of the variants.
    Variant,
    /// Any definition gloss.
    Definition,
    /// Any definition gloss followed by its example.
    DefinitionWithExamples,
}

impl SearchableField {
    /// Parse a request field name, switching definitions to include examples when asked.
    pub fn resolve(name: &str, include_examples: bool) -> Result<Self, DictError> {
        let field: SearchableField = name.parse()?;
        Ok(match field {
            SearchableField::Definition if include_examples => {
                SearchableField::DefinitionWithExamples
            }
            other => other,
        })
    }

    /// The request name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchableField::Headword => "headword",
            SearchableField::Variant => "variant",
            SearchableField::Definition | SearchableField::DefinitionWithExamples => "definitions",
        }
    }
}

impl FromStr for SearchableField {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "headword" => Ok(SearchableField::Headword),
            "variant" => Ok(SearchableField::Variant),
            "definitions" => Ok(SearchableField::Definition),
            other => Err(DictError::unsupported_field(other)),
        }
    }
}

impl fmt::Display for SearchableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
