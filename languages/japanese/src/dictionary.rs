use jisho_config::source::SourceConfig;
use jisho_core::{Dictionary, DictionaryMetadata, FetchError};
use jisho_types::{DictionaryEntry, SearchQuery};

use crate::extractor::extract;
use crate::fetcher::JishoFetcher;

/// jisho.org word search: fetch a result page and extract its exact matches
#[derive(Clone)]
pub struct JishoDictionary {
    fetcher: JishoFetcher,
}

impl JishoDictionary {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: JishoFetcher::new(config)?,
        })
    }
}

#[async_trait::async_trait]
impl Dictionary for JishoDictionary {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<DictionaryEntry>, FetchError> {
        let document = self.fetcher.fetch(query).await?;

        let extraction = extract(&document.body);
        tracing::debug!(
            url = %document.url,
            entries = extraction.entries.len(),
            has_more = extraction.has_more,
            "extracted search page"
        );

        Ok(extraction.entries)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "jisho.org".to_string(),
            language: "ja".to_string(),
            base_url: self.fetcher.base_url().to_string(),
        }
    }
}
