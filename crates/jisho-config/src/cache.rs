use serde::{Deserialize, Serialize};

/// Redis cache endpoint. Caching is on only when an address is configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// `host:port`
    pub addr: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub db: i64,
}

impl CacheConfig {
    pub(crate) fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            addr: var("REDIS_ADDR"),
            password: var("REDIS_PASS"),
            db: var("REDIS_DB").and_then(|v| v.parse().ok()).unwrap_or(0),
        }
    }

    pub fn enabled(&self) -> bool {
        self.addr.is_some()
    }
}
