//! Exact-format timestamp parsing for API records.
//!
//! The API emits instants as `YYYY-MM-DDTHH:MM:SS.ffffffZ` (always six
//! fractional digits, always UTC). Anything else is rejected rather than
//! guessed at. The [`optional`] and [`required`] submodules are serde
//! adapters for use with `#[serde(with = "...")]`.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::errors::DecodeError;

/// `strftime` pattern matching the API's timestamp representation.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const EXPECTED_LEN: usize = 27;

/// Parse an API timestamp.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidTimestamp`] if `value` is not exactly
/// `YYYY-MM-DDTHH:MM:SS.ffffffZ` or names an impossible date.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DecodeError> {
    let invalid = || DecodeError::InvalidTimestamp {
        value: value.to_string(),
    };

    if !has_exact_shape(value) {
        return Err(invalid());
    }

    NaiveDateTime::parse_from_str(value, PARSE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| invalid())
}

/// Render an instant in the API's timestamp representation.
#[must_use]
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(FORMAT).to_string()
}

/// chrono's numeric specifiers tolerate signs, padding and short fields, so
/// every byte position is checked up front.
fn has_exact_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == EXPECTED_LEN
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 => b == b':',
            19 => b == b'.',
            26 => b == b'Z',
            _ => b.is_ascii_digit(),
        })
}

/// Serde adapter for nullable timestamp fields. Pair with `#[serde(default)]`
/// so an absent key also decodes to `None`.
pub mod optional {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(instant) => serializer.serialize_some(&super::format_timestamp(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_timestamp(&raw).map_err(de::Error::custom))
            .transpose()
    }
}

/// Serde adapter for timestamp fields that must be present.
pub mod required {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(de::Error::custom)
    }
}
