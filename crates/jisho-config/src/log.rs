use serde::{Deserialize, Serialize};

use crate::parse_flag;

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `jisho_core=debug,info`
    #[serde(default = "default_level")]
    pub level: String,
    /// One JSON object per line
    pub json: bool,
    /// Compact lines without module targets
    pub concise: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            concise: false,
        }
    }
}

impl LogConfig {
    pub(crate) fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            level: var("LOG_LEVEL").unwrap_or_else(default_level),
            json: parse_flag(var("LOG_JSON")),
            concise: parse_flag(var("LOG_CONCISE")),
        }
    }
}
