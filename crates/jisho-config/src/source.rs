use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://jisho.org".to_string()
}

/// The remote source rejects clients that do not look like a browser
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36".to_string()
}

/// Remote search-results source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl SourceConfig {
    pub(crate) fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let base_url = var("SOURCE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(default_base_url);

        Self {
            base_url,
            user_agent: var("USER_AGENT").unwrap_or_else(default_user_agent),
        }
    }
}
