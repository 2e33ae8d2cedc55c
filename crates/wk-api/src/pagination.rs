//! Cursor-following collection fetch.
//!
//! Collection responses look like:
//!
//! ```text
//! { "object": "collection",
//!   "pages": { "next_url": "https://.../subjects?page_after_id=100" | null },
//!   "data": [ <envelope>, ... ] }
//! ```
//!
//! Pages are requested one after another, because each page's URL is only
//! known once the previous page has arrived. A null `next_url` ends the walk.
//! A null or missing `data` array also ends it, even if a cursor is present.

use serde::Deserialize;
use serde_json::Value;
use wk_config::DecodeConfig;
use wk_core::{DecodeError, Record};

use crate::error::ApiError;
use crate::http::{RateLimitPolicy, fetch_json};
use crate::transport::Transport;

/// What to do with a record that fails to decode mid-collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Abort the whole fetch with the decode error.
    #[default]
    Strict,
    /// Log a warning and drop the record.
    SkipInvalid,
}

impl From<&DecodeConfig> for DecodePolicy {
    fn from(config: &DecodeConfig) -> Self {
        if config.skip_invalid {
            Self::SkipInvalid
        } else {
            Self::Strict
        }
    }
}

#[derive(Deserialize)]
struct Page {
    #[serde(default)]
    data: Option<Vec<Value>>,
    #[serde(default)]
    pages: Option<Pages>,
}

#[derive(Deserialize)]
struct Pages {
    #[serde(default)]
    next_url: Option<String>,
}

/// Fetch every page starting at `start_url`, decoding each element as `R`.
///
/// Records come back in page order, then in-page order. Duplicates across
/// pages are kept.
///
/// # Errors
///
/// Any [`ApiError`] from a page request, [`ApiError::Decode`] if a page is not
/// collection-shaped, and [`ApiError::Decode`] for a bad record under
/// [`DecodePolicy::Strict`].
pub async fn fetch_all<R: Record, T: Transport>(
    transport: &T,
    start_url: String,
    rate_limit: &RateLimitPolicy,
    decode_policy: DecodePolicy,
) -> Result<Vec<R>, ApiError> {
    let mut records = Vec::new();
    let mut next_url = Some(start_url);
    let mut page_number: u32 = 0;

    while let Some(url) = next_url.take() {
        page_number += 1;
        let value = fetch_json(transport, &url, rate_limit).await?;
        let page: Page = serde_json::from_value(value).map_err(DecodeError::from)?;

        let Some(data) = page.data else {
            tracing::debug!(url, page = page_number, "page has no data array, stopping");
            break;
        };

        let count = data.len();
        for item in data {
            match R::decode(item) {
                Ok(record) => records.push(record),
                Err(e) if decode_policy == DecodePolicy::SkipInvalid => {
                    tracing::warn!(url, %e, "skipping record that failed to decode");
                }
                Err(e) => return Err(e.into()),
            }
        }
        tracing::debug!(url, page = page_number, records = count, "fetched page");

        next_url = page.pages.and_then(|p| p.next_url);
    }

    tracing::debug!(
        collection = R::COLLECTION,
        pages = page_number,
        records = records.len(),
        "collection complete"
    );
    Ok(records)
}
