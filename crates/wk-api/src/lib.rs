//! # wk-api
//!
//! HTTP client for the WaniKani v2 API.
//!
//! Each resource (subjects, assignments, level progressions, reviews) can be
//! fetched by id or as a whole collection:
//! - fetch-one issues a single GET and decodes one envelope
//! - fetch-all follows `pages.next_url` until the collection is exhausted
//!
//! Rate-limit responses are waited out and retried inside the transport
//! layer; callers only see the added latency. Everything else (transport
//! failures, non-JSON bodies, API error payloads, decode failures) comes back
//! as an [`ApiError`].

mod error;
pub mod http;
pub mod pagination;
pub mod transport;

pub use error::ApiError;
pub use http::RateLimitPolicy;
pub use pagination::DecodePolicy;
pub use transport::{HttpTransport, Transport};

use wk_config::{ApiConfig, WkConfig};
use wk_core::Record;
use wk_core::entities::{Assignment, LevelProgression, Review, Subject};

// ── Client ─────────────────────────────────────────────────────────

/// Client for the WaniKani v2 API.
///
/// Holds no mutable state: every call is an independent request (or chain of
/// page requests) using the token captured at construction.
pub struct WkClient<T = HttpTransport> {
    transport: T,
    api: ApiConfig,
    rate_limit: RateLimitPolicy,
    decode_policy: DecodePolicy,
}

impl WkClient {
    /// Create a client for the production API with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidHeader`] if the token cannot be sent as a
    /// header, or [`ApiError::Http`] if the HTTP client fails to build.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let config = WkConfig {
            api: ApiConfig {
                token: token.into(),
                ..ApiConfig::default()
            },
            ..WkConfig::default()
        };
        Self::from_config(&config)
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`WkClient::new`].
    pub fn from_config(config: &WkConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(&config.api)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> WkClient<T> {
    /// Create a client over any [`Transport`].
    #[must_use]
    pub fn with_transport(transport: T, config: &WkConfig) -> Self {
        Self {
            transport,
            api: config.api.clone(),
            rate_limit: RateLimitPolicy::from(&config.retry),
            decode_policy: DecodePolicy::from(&config.decode),
        }
    }

    #[must_use]
    pub fn with_rate_limit_policy(mut self, policy: RateLimitPolicy) -> Self {
        self.rate_limit = policy;
        self
    }

    #[must_use]
    pub fn with_decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    /// Fetch a single resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API answers with an
    /// error payload, or the envelope does not decode as `R`.
    pub async fn get<R: Record>(&self, id: u64) -> Result<R, ApiError> {
        let url = self.api.url(&format!("{}/{id}", R::COLLECTION));
        let value = http::fetch_json(&self.transport, &url, &self.rate_limit).await?;
        Ok(R::decode(value)?)
    }

    /// Fetch every resource in `R`'s collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if any page request fails or, under
    /// [`DecodePolicy::Strict`], any record fails to decode.
    pub async fn get_all<R: Record>(&self) -> Result<Vec<R>, ApiError> {
        let url = self.api.url(R::COLLECTION);
        pagination::fetch_all(&self.transport, url, &self.rate_limit, self.decode_policy).await
    }

    /// # Errors
    ///
    /// See [`WkClient::get`].
    pub async fn get_subject(&self, id: u64) -> Result<Subject, ApiError> {
        self.get(id).await
    }

    /// # Errors
    ///
    /// See [`WkClient::get_all`].
    pub async fn get_all_subjects(&self) -> Result<Vec<Subject>, ApiError> {
        self.get_all().await
    }

    /// # Errors
    ///
    /// See [`WkClient::get`].
    pub async fn get_assignment(&self, id: u64) -> Result<Assignment, ApiError> {
        self.get(id).await
    }

    /// # Errors
    ///
    /// See [`WkClient::get_all`].
    pub async fn get_all_assignments(&self) -> Result<Vec<Assignment>, ApiError> {
        self.get_all().await
    }

    /// # Errors
    ///
    /// See [`WkClient::get`].
    pub async fn get_level_progression(&self, id: u64) -> Result<LevelProgression, ApiError> {
        self.get(id).await
    }

    /// # Errors
    ///
    /// See [`WkClient::get_all`].
    pub async fn get_all_level_progressions(&self) -> Result<Vec<LevelProgression>, ApiError> {
        self.get_all().await
    }

    /// # Errors
    ///
    /// See [`WkClient::get`].
    pub async fn get_review(&self, id: u64) -> Result<Review, ApiError> {
        self.get(id).await
    }

    /// # Errors
    ///
    /// See [`WkClient::get_all`].
    pub async fn get_all_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.get_all().await
    }
}
