//! Client error types.

use thiserror::Error;
use wk_core::DecodeError;

/// Errors that can occur when fetching and decoding API resources.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not JSON.
    #[error("malformed response body from {url}: {source}")]
    MalformedBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with an `{error, code}` payload other than a rate limit.
    #[error("API error ({code}): {message}")]
    Api {
        /// `code` field of the error payload.
        code: i64,
        /// `error` field of the error payload.
        message: String,
    },

    /// The server kept rate limiting past the configured retry bound.
    #[error("still rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    /// A page or record could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A configured value cannot be used as an HTTP header.
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
}

impl ApiError {
    /// Failures that say nothing about the data itself: a retry later may
    /// succeed. Callers that prefer "empty on failure" can match on this.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::MalformedBody { .. } | Self::RateLimited { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(ApiError::RateLimited { retries: 3 }.is_transient());
        assert!(
            !ApiError::Api {
                code: 401,
                message: "Unauthorized. Nice try.".into()
            }
            .is_transient()
        );
        assert!(!ApiError::Decode(DecodeError::UnknownSubjectType("x".into())).is_transient());
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::Api {
            code: 404,
            message: "Not found".into(),
        };
        assert_eq!(err.to_string(), "API error (404): Not found");
    }
}
