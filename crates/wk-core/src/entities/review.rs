use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Outcome of one review of an assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    #[serde(default)]
    pub id: u64,
    pub assignment_id: u64,
    pub subject_id: u64,
    pub spaced_repetition_system_id: u64,
    pub starting_srs_stage: u32,
    pub ending_srs_stage: u32,
    pub incorrect_meaning_answers: u32,
    pub incorrect_reading_answers: u32,
    #[serde(with = "timestamp::required")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    #[must_use]
    pub const fn total_incorrect(&self) -> u32 {
        self.incorrect_meaning_answers
            .saturating_add(self.incorrect_reading_answers)
    }
}
