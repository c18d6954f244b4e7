mod client;

pub use client::RedisCache;

use std::time::Duration;

use jisho_config::cache::CacheConfig;
use jisho_core::{CacheError, CacheStore};

/// Deadline for connecting and answering the startup ping
pub const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Connect to the configured cache and verify it answers.
///
/// `Ok(None)` when no cache is configured.
pub async fn connect(config: &CacheConfig) -> Result<Option<RedisCache>, CacheError> {
    let Some(addr) = config.addr.as_deref() else {
        return Ok(None);
    };

    let connecting = async {
        let cache = RedisCache::connect(addr, config.password.as_deref(), config.db).await?;
        cache.ping().await?;
        Ok::<_, CacheError>(cache)
    };

    let cache = tokio::time::timeout(PING_TIMEOUT, connecting)
        .await
        .map_err(|_| CacheError::Timeout(PING_TIMEOUT))??;

    tracing::info!(cache.addr = addr, cache.db = config.db, "connected to redis cache");
    Ok(Some(cache))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_address_means_no_cache() {
        let cache = connect(&CacheConfig::default()).await.unwrap();
        assert!(cache.is_none());
    }

    #[tokio::test]
    async fn unreachable_cache_fails_startup() {
        let config = CacheConfig {
            addr: Some("127.0.0.1:1".to_string()),
            password: None,
            db: 0,
        };

        let result = connect(&config).await;
        assert!(matches!(
            result,
            Err(CacheError::Connection(_)) | Err(CacheError::Timeout(_))
        ));
    }
}
