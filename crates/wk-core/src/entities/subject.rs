use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::meaning::{ContextSentence, Meaning, Reading, deserialize_auxiliary};
use crate::timestamp;

// ---------------------------------------------------------------------------
// SubjectKind
// ---------------------------------------------------------------------------

/// Discriminator of a [`Subject`], matching the envelope's `object` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Radical,
    Kanji,
    Vocabulary,
}

impl SubjectKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Radical => "radical",
            Self::Kanji => "kanji",
            Self::Vocabulary => "vocabulary",
        }
    }

    /// Look up a kind by its `object` tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "radical" => Some(Self::Radical),
            "kanji" => Some(Self::Kanji),
            "vocabulary" => Some(Self::Vocabulary),
            _ => None,
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Shared fields
// ---------------------------------------------------------------------------

/// Fields every subject variant carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectBase {
    /// Envelope id; not part of the `data` payload.
    #[serde(default)]
    pub id: u64,
    pub slug: String,
    /// `None` for radicals that only exist as images.
    #[serde(default)]
    pub characters: Option<String>,
    pub level: u32,
    pub lesson_position: u32,
    #[serde(default, with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
    pub meanings: Vec<Meaning>,
    #[serde(deserialize_with = "deserialize_auxiliary")]
    pub auxiliary_meanings: Vec<Meaning>,
    pub meaning_mnemonic: String,
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Radical {
    #[serde(flatten)]
    pub base: SubjectBase,
    pub amalgamation_subject_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Kanji {
    #[serde(flatten)]
    pub base: SubjectBase,
    pub amalgamation_subject_ids: Vec<u64>,
    pub component_subject_ids: Vec<u64>,
    #[serde(default)]
    pub meaning_hint: Option<String>,
    #[serde(default)]
    pub reading_hint: Option<String>,
    pub reading_mnemonic: String,
    pub readings: Vec<Reading>,
    pub visually_similar_subject_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vocabulary {
    #[serde(flatten)]
    pub base: SubjectBase,
    pub component_subject_ids: Vec<u64>,
    pub context_sentences: Vec<ContextSentence>,
    pub parts_of_speech: Vec<String>,
    pub readings: Vec<Reading>,
    pub reading_mnemonic: String,
}

/// A learnable item. Serializes in the API's own `{object, data}` shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "object", content = "data", rename_all = "snake_case")]
pub enum Subject {
    Radical(Radical),
    Kanji(Kanji),
    Vocabulary(Vocabulary),
}

impl Subject {
    #[must_use]
    pub const fn kind(&self) -> SubjectKind {
        match self {
            Self::Radical(_) => SubjectKind::Radical,
            Self::Kanji(_) => SubjectKind::Kanji,
            Self::Vocabulary(_) => SubjectKind::Vocabulary,
        }
    }

    #[must_use]
    pub const fn base(&self) -> &SubjectBase {
        match self {
            Self::Radical(r) => &r.base,
            Self::Kanji(k) => &k.base,
            Self::Vocabulary(v) => &v.base,
        }
    }

    pub(crate) fn base_mut(&mut self) -> &mut SubjectBase {
        match self {
            Self::Radical(r) => &mut r.base,
            Self::Kanji(k) => &mut k.base,
            Self::Vocabulary(v) => &mut v.base,
        }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.base().id
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.base().slug
    }

    #[must_use]
    pub fn characters(&self) -> Option<&str> {
        self.base().characters.as_deref()
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.base().level
    }

    #[must_use]
    pub const fn lesson_position(&self) -> u32 {
        self.base().lesson_position
    }

    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.base().created_at
    }

    #[must_use]
    pub fn meanings(&self) -> &[Meaning] {
        &self.base().meanings
    }

    #[must_use]
    pub fn auxiliary_meanings(&self) -> &[Meaning] {
        &self.base().auxiliary_meanings
    }

    #[must_use]
    pub fn meaning_mnemonic(&self) -> &str {
        &self.base().meaning_mnemonic
    }

    /// The meaning flagged primary, falling back to the first listed one.
    #[must_use]
    pub fn primary_meaning(&self) -> Option<&Meaning> {
        let meanings = self.meanings();
        meanings
            .iter()
            .find(|m| m.primary)
            .or_else(|| meanings.first())
    }

    /// Radicals have no reading mnemonic.
    #[must_use]
    pub fn reading_mnemonic(&self) -> Option<&str> {
        match self {
            Self::Radical(_) => None,
            Self::Kanji(k) => Some(&k.reading_mnemonic),
            Self::Vocabulary(v) => Some(&v.reading_mnemonic),
        }
    }

    /// Empty for radicals.
    #[must_use]
    pub fn readings(&self) -> &[Reading] {
        match self {
            Self::Radical(_) => &[],
            Self::Kanji(k) => &k.readings,
            Self::Vocabulary(v) => &v.readings,
        }
    }

    /// Ids of the subjects this one is built from. Empty for radicals.
    #[must_use]
    pub fn component_subject_ids(&self) -> &[u64] {
        match self {
            Self::Radical(_) => &[],
            Self::Kanji(k) => &k.component_subject_ids,
            Self::Vocabulary(v) => &v.component_subject_ids,
        }
    }

    /// Ids of the subjects that use this one. Empty for vocabulary.
    #[must_use]
    pub fn amalgamation_subject_ids(&self) -> &[u64] {
        match self {
            Self::Radical(r) => &r.amalgamation_subject_ids,
            Self::Kanji(k) => &k.amalgamation_subject_ids,
            Self::Vocabulary(_) => &[],
        }
    }
}
