use serde::{Deserialize, Serialize};

/// Default backend address used when `config.toml` omits one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl PortalConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}
