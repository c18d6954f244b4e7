use std::env;

use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::log::LogConfig;
use self::network::NetworkConfig;
use self::source::SourceConfig;

pub mod cache;
pub mod log;
pub mod network;
pub mod source;

/// Prefix shared by every environment variable the service reads
pub const ENV_PREFIX: &str = "JISHO_API_";

/// Process configuration, read once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub cache: CacheConfig,
    pub log: LogConfig,
    pub source: SourceConfig,
}

impl Config {
    /// Read configuration from the process environment
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// The lookup receives full variable names, e.g. `JISHO_API_PORT`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(&format!("{ENV_PREFIX}{name}"))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Config {
            network: NetworkConfig::from_vars(&var),
            cache: CacheConfig::from_vars(&var),
            log: LogConfig::from_vars(&var),
            source: SourceConfig::from_vars(&var),
        }
    }
}

/// `1`/`true` enable a flag, anything else leaves it off
pub(crate) fn parse_flag(value: Option<String>) -> bool {
    value
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "t" | "true"))
        .unwrap_or(false)
}
