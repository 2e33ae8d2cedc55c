//! Record decoding policy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DecodeConfig {
    /// Drop records that fail to decode (with a warning) instead of failing
    /// the whole fetch.
    #[serde(default)]
    pub skip_invalid: bool,
}
