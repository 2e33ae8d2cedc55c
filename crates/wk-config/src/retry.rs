//! Rate-limit retry configuration.

use serde::{Deserialize, Serialize};

const fn default_max_rate_limit_retries() -> u32 {
    10
}

const fn default_fallback_wait_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Retries allowed per request after HTTP-level rate limiting.
    #[serde(default = "default_max_rate_limit_retries")]
    pub max_rate_limit_retries: u32,

    /// Ignore `max_rate_limit_retries` and keep retrying for as long as the
    /// server keeps limiting.
    #[serde(default)]
    pub retry_forever: bool,

    /// Wait used when a rate-limit response has no usable reset header.
    #[serde(default = "default_fallback_wait_secs")]
    pub fallback_wait_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_rate_limit_retries: default_max_rate_limit_retries(),
            retry_forever: false,
            fallback_wait_secs: default_fallback_wait_secs(),
        }
    }
}

impl RetryConfig {
    /// Retry bound, or `None` when retrying is unbounded.
    #[must_use]
    pub const fn max_retries(&self) -> Option<u32> {
        if self.retry_forever {
            None
        } else {
            Some(self.max_rate_limit_retries)
        }
    }
}
