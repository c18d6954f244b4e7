use jisho_core::{CacheError, CacheStore};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, IntoConnectionInfo};

/// Redis-backed result cache.
///
/// The connection manager multiplexes one connection and reconnects on failure,
/// so clones are cheap and safe to use from concurrent requests.
#[derive(Clone)]
pub struct RedisCache {
    addr: String,
    conn: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(addr: &str, password: Option<&str>, db: i64) -> Result<Self, CacheError> {
        let mut info = format!("redis://{addr}")
            .into_connection_info()
            .map_err(|e| CacheError::Connection(format!("invalid address '{addr}': {e}")))?;
        info.redis.db = db;
        info.redis.password = password.map(str::to_string);

        let client = redis::Client::open(info)
            .map_err(|e| CacheError::Connection(format!("'{addr}': {e}")))?;

        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| CacheError::Connection(format!("'{addr}': {e}")))?;

        Ok(Self {
            addr: addr.to_string(),
            conn,
        })
    }
}

#[async_trait::async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::Command(format!("GET {key}: {e}")))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn
            .set(key, value)
            .await
            .map_err(|e| CacheError::Command(format!("SET {key}: {e}")))?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Connection(format!("failed to ping redis '{}': {e}", self.addr)))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "redis"
    }
}
