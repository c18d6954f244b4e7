use crate::error::CacheError;

/// External key-value store holding serialized search results.
///
/// Implementations are shared across requests and must tolerate concurrent use.
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
    /// `Ok(None)` on a miss
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store without expiration
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Connectivity check, run once at startup
    async fn ping(&self) -> Result<(), CacheError>;

    /// Backend name for logs
    fn name(&self) -> &str;
}
