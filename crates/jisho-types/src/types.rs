use std::fmt;

use serde::{Deserialize, Serialize};

/// One lexical result scraped from a search page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Headword, e.g. "食べる"
    pub writing: String,
    /// Headword with inline furigana, e.g. "食(た)べる"
    pub reading: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    /// Entry-level qualifiers, e.g. "Common word", "JLPT N5"
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One definition sense of an entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Meaning {
    /// Gloss text, e.g. "to eat"
    pub value: String,
    /// Sense-level qualifiers, e.g. "Ichidan verb", "Transitive verb"
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A search term and the 1-based result page it refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub query: String,
    pub page: u32,
}

impl SearchQuery {
    pub const FIRST_PAGE: u32 = 1;

    /// Build a query, clamping missing or non-positive pages to the first page
    pub fn new(query: impl Into<String>, page: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => Self::FIRST_PAGE,
        };

        Self {
            query: query.into(),
            page,
        }
    }

    /// Lenient page parsing for raw request parameters
    pub fn from_raw_page(query: impl Into<String>, page: Option<&str>) -> Self {
        let page = page.and_then(|p| p.trim().parse::<i64>().ok());
        Self::new(query, page)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.query, self.page)
    }
}
