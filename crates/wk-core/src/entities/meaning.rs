use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// An accepted English meaning of a subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meaning {
    pub meaning: String,
    pub primary: bool,
    pub accepted_answer: bool,
}

/// Auxiliary meanings carry no `accepted_answer` flag of their own; they are
/// never accepted as answers.
#[derive(Deserialize)]
struct AuxiliaryMeaning {
    meaning: String,
    #[serde(default)]
    primary: bool,
}

impl From<AuxiliaryMeaning> for Meaning {
    fn from(aux: AuxiliaryMeaning) -> Self {
        Self {
            meaning: aux.meaning,
            primary: aux.primary,
            accepted_answer: false,
        }
    }
}

/// Deserialize an `auxiliary_meanings` list into [`Meaning`] values.
pub(crate) fn deserialize_auxiliary<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Meaning>, D::Error> {
    let raw = Vec::<AuxiliaryMeaning>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(Meaning::from).collect())
}

/// Reading classification for kanji readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingKind {
    Onyomi,
    Kunyomi,
    Nanori,
}

impl ReadingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Onyomi => "onyomi",
            Self::Kunyomi => "kunyomi",
            Self::Nanori => "nanori",
        }
    }
}

impl fmt::Display for ReadingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kana reading of a kanji or vocabulary subject.
///
/// Vocabulary readings have no `type` in the payload, so `kind` is `None` for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reading {
    pub reading: String,
    pub primary: bool,
    pub accepted_answer: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<ReadingKind>,
}

/// An example sentence attached to a vocabulary subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContextSentence {
    #[serde(rename = "en")]
    pub english: String,
    #[serde(rename = "ja")]
    pub japanese: String,
}
