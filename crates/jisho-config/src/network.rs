use serde::{Deserialize, Serialize};

fn default_port() -> u16 {
    8080
}

/// Where the HTTP surface listens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Empty means every interface
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
        }
    }
}

impl NetworkConfig {
    pub(crate) fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: var("HOST").unwrap_or_default(),
            port: var("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_port),
        }
    }

    pub fn listen_addr(&self) -> String {
        let host = if self.host.is_empty() {
            "0.0.0.0"
        } else {
            self.host.as_str()
        };
        format!("{host}:{}", self.port)
    }
}
