//! Report settings for the insights binary.

use serde::{Deserialize, Serialize};

fn default_mention_term() -> String {
    String::from("こういち")
}

const fn default_top_subjects() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InsightsConfig {
    /// Text searched for in reading mnemonics.
    #[serde(default = "default_mention_term")]
    pub mention_term: String,

    /// How many of the most-reviewed subjects to list.
    #[serde(default = "default_top_subjects")]
    pub top_subjects: usize,

    /// Log at `info` instead of `warn` when `WK_LOG` is unset.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            mention_term: default_mention_term(),
            top_subjects: default_top_subjects(),
            verbose: false,
        }
    }
}
