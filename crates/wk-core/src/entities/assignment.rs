use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// A learner's relationship to one subject: where it sits in the SRS and
/// when it moved through each milestone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    #[serde(default)]
    pub id: u64,
    pub subject_id: u64,
    /// `object` tag of the subject (`radical`, `kanji`, `vocabulary`, ...).
    pub subject_type: String,
    pub srs_stage: u32,
    pub hidden: bool,
    #[serde(default, with = "timestamp::optional")]
    pub available_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub passed_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub resurrected_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Whether the assignment has reached the passing SRS threshold at least once.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.passed_at.is_some()
    }
}
