use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Progress through a single level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelProgression {
    #[serde(default)]
    pub id: u64,
    pub level: u32,
    #[serde(default, with = "timestamp::optional")]
    pub abandoned_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub passed_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub unlocked_at: Option<DateTime<Utc>>,
}
