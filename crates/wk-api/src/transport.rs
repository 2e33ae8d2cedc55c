//! The single-GET seam between the client and the network.
//!
//! [`HttpTransport`] is the production implementation. Anything that can turn
//! a URL into a `reqwest::Response` can stand in for it, which is how the
//! tests script rate limits and page chains without a server.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use wk_config::ApiConfig;

use crate::error::ApiError;

/// Issues one authenticated GET.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send;
}

/// `reqwest`-backed transport carrying the bearer token captured at construction.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    /// Authorization and revision, attached to every request.
    headers: HeaderMap,
}

impl HttpTransport {
    /// Build a transport from the `api` config section.
    ///
    /// The token is not checked beyond being usable as a header value; a bad
    /// token surfaces as an API error on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidHeader`] if the token or revision contain
    /// characters not allowed in a header, or [`ApiError::Http`] if the
    /// underlying `reqwest::Client` fails to build.
    pub fn new(api: &ApiConfig) -> Result<Self, ApiError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api.token))
            .map_err(|_| ApiError::InvalidHeader("Authorization"))?;
        auth.set_sensitive(true);

        let revision = HeaderValue::from_str(&api.revision)
            .map_err(|_| ApiError::InvalidHeader("Wanikani-Revision"))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(HeaderName::from_static("wanikani-revision"), revision);

        let http = reqwest::Client::builder()
            .user_agent(api.user_agent.as_str())
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self { http, headers })
    }

    pub(crate) fn request(&self, url: &str) -> reqwest::RequestBuilder {
        self.http.get(url).headers(self.headers.clone())
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.request(url).send().await
    }
}
