//! Decode error types.
//!
//! Transport-level failures live in `wk-api`; this module only covers turning
//! an already-parsed JSON value into a typed record.

use thiserror::Error;

/// Errors raised while decoding a single envelope into a record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A required field is missing or has the wrong JSON type.
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),

    /// A timestamp field is present but not in the exact API format.
    #[error("invalid timestamp '{value}' (expected YYYY-MM-DDTHH:MM:SS.ffffffZ)")]
    InvalidTimestamp { value: String },

    /// The envelope's `object` tag names no known subject variant.
    #[error("unknown subject type: {0}")]
    UnknownSubjectType(String),

    /// The envelope's `object` tag does not match the requested record type.
    #[error("expected '{expected}' object, found '{found}'")]
    UnexpectedObject {
        expected: &'static str,
        found: String,
    },
}
