//! API connection configuration.

use serde::{Deserialize, Serialize};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.wanikani.com/v2";

/// API revision sent in the `Wanikani-Revision` header.
pub const DEFAULT_REVISION: &str = "20170710";

fn default_base_url() -> String {
    String::from(DEFAULT_BASE_URL)
}

fn default_user_agent() -> String {
    format!("wkinsights/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_revision() -> String {
    String::from(DEFAULT_REVISION)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Personal API token, sent as a bearer token.
    #[serde(default)]
    pub token: String,

    /// API root without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_revision")]
    pub revision: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            revision: default_revision(),
        }
    }
}

impl ApiConfig {
    /// A token is the only thing the API needs; it is not validated locally.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    /// Build an absolute URL for a path relative to the API root.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
