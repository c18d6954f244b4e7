use std::sync::Arc;

use jisho_types::{DictionaryEntry, SearchQuery};

use crate::cache::CacheStore;
use crate::dictionary::Dictionary;
use crate::error::SearchError;

/// Namespace of every cached search result
pub const CACHE_KEY_PREFIX: &str = "jisho-concept-query";

/// Cache key of one result page, e.g. `jisho-concept-query:猫@1`
pub fn cache_key(query: &SearchQuery) -> String {
    format!("{CACHE_KEY_PREFIX}:{}@{}", query.query, query.page)
}

/// Cache-aside lookups in front of a [`Dictionary`].
///
/// Caching is decided once at construction: with no store every lookup goes to the
/// source. Identical concurrent lookups on a cold key are not deduplicated, each one
/// fetches and the last write wins.
pub struct SearchCoordinator {
    dictionary: Arc<dyn Dictionary>,
    cache: Option<Arc<dyn CacheStore>>,
}

impl SearchCoordinator {
    pub fn new(dictionary: Arc<dyn Dictionary>, cache: Option<Arc<dyn CacheStore>>) -> Self {
        Self { dictionary, cache }
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn dictionary(&self) -> &Arc<dyn Dictionary> {
        &self.dictionary
    }

    /// Serve a page from the cache or fetch, extract and cache it.
    ///
    /// Cache failures never fail the lookup; fetch failures do, and leave the cache untouched.
    pub async fn resolve(&self, query: &SearchQuery) -> Result<Vec<DictionaryEntry>, SearchError> {
        let Some(cache) = &self.cache else {
            tracing::info!(%query, "cache disabled, querying source");
            return Ok(self.dictionary.search(query).await?);
        };

        let key = cache_key(query);

        match cache.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<DictionaryEntry>>(&raw) {
                Ok(entries) => {
                    tracing::info!(cache.key = %key, "cache hit, skipped querying source");
                    return Ok(entries);
                }
                Err(e) => {
                    tracing::warn!(cache.key = %key, error = %e, "undecodable cached value, refetching");
                }
            },
            Ok(None) => {
                tracing::info!(cache.key = %key, "cache miss, querying source");
            }
            Err(e) => {
                tracing::warn!(cache.key = %key, error = %e, "cache read failed, querying source");
            }
        }

        let entries = self.dictionary.search(query).await?;

        match serde_json::to_string(&entries) {
            Ok(raw) => match cache.set(&key, &raw).await {
                Ok(()) => {
                    tracing::info!(cache.key = %key, entries = entries.len(), "cached result");
                }
                Err(e) => {
                    tracing::warn!(cache.key = %key, error = %e, "failed to cache result");
                }
            },
            Err(e) => {
                tracing::warn!(cache.key = %key, error = %e, "failed to serialize result");
            }
        }

        Ok(entries)
    }
}
