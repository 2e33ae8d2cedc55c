//! Single-request fetch with rate-limit handling.
//!
//! The API signals errors in the body as `{"error": ..., "code": ...}`. A
//! `code` of 429 means the request was rate limited: the `RateLimit-Reset`
//! header carries the Unix time at which the limit clears, so the request
//! sleeps until then and is reissued. Every other error payload becomes
//! [`ApiError::Api`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;
use wk_config::RetryConfig;

use crate::error::ApiError;
use crate::transport::Transport;

/// Header carrying the Unix timestamp at which the current limit resets.
pub const RATE_LIMIT_RESET: &str = "RateLimit-Reset";

const RATE_LIMITED_CODE: i64 = 429;

/// How rate-limited requests are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Retries allowed per request; `None` retries for as long as the server
    /// keeps limiting.
    pub max_retries: Option<u32>,
    /// Wait used when the reset header is missing or unparseable.
    pub fallback_wait: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RateLimitPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries(),
            fallback_wait: Duration::from_secs(config.fallback_wait_secs),
        }
    }
}

/// The `{error, code}` shape of an API-level failure.
#[derive(Debug, PartialEq, Eq)]
struct ErrorPayload {
    code: i64,
    message: String,
}

/// GET `url` and return its JSON body, transparently waiting out rate limits.
///
/// # Errors
///
/// - [`ApiError::Http`] if the request or body read fails.
/// - [`ApiError::MalformedBody`] if the body is not JSON.
/// - [`ApiError::Api`] for any non-429 error payload.
/// - [`ApiError::RateLimited`] once `policy.max_retries` is exhausted.
pub async fn fetch_json<T: Transport>(
    transport: &T,
    url: &str,
    policy: &RateLimitPolicy,
) -> Result<Value, ApiError> {
    let mut retries: u32 = 0;

    loop {
        let resp = transport.get(url).await.inspect_err(|e| {
            tracing::error!(url, %e, "GET failed");
        })?;
        let reset = parse_rate_limit_reset(resp.headers());
        let body = resp.text().await.inspect_err(|e| {
            tracing::error!(url, %e, "failed to read response body");
        })?;

        let json: Value = serde_json::from_str(&body).map_err(|source| {
            tracing::error!(url, %source, "response body is not JSON");
            ApiError::MalformedBody {
                url: url.to_string(),
                source,
            }
        })?;

        let Some(payload) = error_payload(&json) else {
            return Ok(json);
        };

        if payload.code != RATE_LIMITED_CODE {
            tracing::warn!(url, code = payload.code, error = %payload.message, "API error response");
            return Err(ApiError::Api {
                code: payload.code,
                message: payload.message,
            });
        }

        if policy.max_retries.is_some_and(|max| retries >= max) {
            tracing::warn!(url, retries, "rate limit retries exhausted");
            return Err(ApiError::RateLimited { retries });
        }

        let wait = reset.map_or(policy.fallback_wait, |reset| {
            rate_limit_wait(reset, Utc::now())
        });
        tracing::info!(url, wait_secs = wait.as_secs(), "rate limited, waiting for reset");
        tokio::time::sleep(wait).await;
        retries += 1;
        tracing::debug!(url, retries, "retrying after rate limit");
    }
}

/// Seconds until `reset`, measured from `now` rounded up to the next whole
/// second. Never negative.
#[must_use]
pub fn rate_limit_wait(reset: i64, now: DateTime<Utc>) -> Duration {
    let now_ceil = now.timestamp() + i64::from(now.timestamp_subsec_nanos() > 0);
    Duration::from_secs(u64::try_from(reset.saturating_sub(now_ceil)).unwrap_or(0))
}

/// Parse the `RateLimit-Reset` header as a Unix timestamp.
fn parse_rate_limit_reset(headers: &reqwest::header::HeaderMap) -> Option<i64> {
    headers
        .get(RATE_LIMIT_RESET)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok())
}

/// Both `error` and `code` must be present for a body to count as an error.
fn error_payload(json: &Value) -> Option<ErrorPayload> {
    let error = json.get("error")?;
    let code = json.get("code")?;

    Some(ErrorPayload {
        code: code
            .as_i64()
            .or_else(|| code.as_str().and_then(|s| s.parse().ok()))
            .unwrap_or_default(),
        message: error
            .as_str()
            .map_or_else(|| error.to_string(), str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_reset(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header(RATE_LIMIT_RESET, value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn wait_rounds_now_up() {
        let now = Utc.timestamp_opt(1_000, 250_000_000).unwrap();
        assert_eq!(rate_limit_wait(1_010, now), Duration::from_secs(9));
    }

    #[test]
    fn wait_on_whole_second() {
        let now = Utc.timestamp_opt(1_000, 0).unwrap();
        assert_eq!(rate_limit_wait(1_010, now), Duration::from_secs(10));
    }

    #[test]
    fn wait_clamps_past_reset_to_zero() {
        let now = Utc.timestamp_opt(2_000, 500).unwrap();
        assert_eq!(rate_limit_wait(1_990, now), Duration::ZERO);
    }

    #[test]
    fn wait_saturates_on_extreme_reset() {
        let now = Utc.timestamp_opt(1_700_000_000, 500).unwrap();
        assert_eq!(rate_limit_wait(i64::MIN, now), Duration::ZERO);
        assert_eq!(
            rate_limit_wait(i64::MAX, now),
            Duration::from_secs(u64::try_from(i64::MAX - 1_700_000_001).unwrap())
        );
    }

    #[test]
    fn parse_reset_from_header() {
        let resp = mock_response_with_reset(429, "1700000060");
        assert_eq!(parse_rate_limit_reset(resp.headers()), Some(1_700_000_060));
    }

    #[test]
    fn parse_reset_missing_header() {
        let resp = mock_response(429, "");
        assert_eq!(parse_rate_limit_reset(resp.headers()), None);
    }

    #[test]
    fn parse_reset_non_numeric() {
        let resp = mock_response_with_reset(429, "soon");
        assert_eq!(parse_rate_limit_reset(resp.headers()), None);
    }

    #[test]
    fn error_payload_needs_both_fields() {
        assert_eq!(error_payload(&json!({"error": "Not found"})), None);
        assert_eq!(error_payload(&json!({"code": 404})), None);
        assert_eq!(
            error_payload(&json!({"error": "Not found", "code": 404})),
            Some(ErrorPayload {
                code: 404,
                message: "Not found".into()
            })
        );
    }

    #[test]
    fn error_payload_tolerates_string_code() {
        let payload = error_payload(&json!({"error": "Rate limit exceeded", "code": "429"}));
        assert_eq!(payload.map(|p| p.code), Some(429));
    }

    #[test]
    fn policy_from_config() {
        let policy = RateLimitPolicy::from(&RetryConfig {
            max_rate_limit_retries: 2,
            retry_forever: false,
            fallback_wait_secs: 5,
        });
        assert_eq!(policy.max_retries, Some(2));
        assert_eq!(policy.fallback_wait, Duration::from_secs(5));
    }
}
