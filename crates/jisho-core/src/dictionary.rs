use jisho_types::{DictionaryEntry, SearchQuery};

use crate::error::FetchError;

/// Remote dictionary lookup: fetch one result page and extract its entries
#[async_trait::async_trait]
pub trait Dictionary: Send + Sync {
    /// Entries of one result page, in page order. An empty page is `Ok(vec![])`.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<DictionaryEntry>, FetchError>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub base_url: String,
}
