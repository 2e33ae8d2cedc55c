//! Envelope decoding.
//!
//! Every API resource arrives wrapped as `{ "id", "object", "url",
//! "data_updated_at", "data": { ... } }`. [`Envelope`] unwraps that shape and
//! [`Record`] turns it into a typed value. Subjects dispatch on `object`;
//! flat records check that `object` names the type being decoded.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::entities::{Assignment, LevelProgression, Review, Subject, SubjectKind};
use crate::errors::DecodeError;

/// The common resource wrapper. Unknown envelope keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub id: u64,
    pub object: String,
    pub data: Value,
}

impl Envelope {
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] if `id`, `object`, or `data` is missing.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        Ok(serde_json::from_value(value)?)
    }

    fn expect_object(&self, expected: &'static str) -> Result<(), DecodeError> {
        if self.object == expected {
            Ok(())
        } else {
            Err(DecodeError::UnexpectedObject {
                expected,
                found: self.object.clone(),
            })
        }
    }

    fn into_data<T: DeserializeOwned>(self) -> Result<T, DecodeError> {
        Ok(serde_json::from_value(self.data)?)
    }
}

/// A resource type that can be decoded from a single envelope.
pub trait Record: Sized {
    /// Collection path relative to the API root, e.g. `subjects`.
    const COLLECTION: &'static str;

    /// Decode one envelope.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] on a missing required field, a malformed
    /// timestamp, or an `object` tag this type does not accept.
    fn decode(value: Value) -> Result<Self, DecodeError>;
}

impl Record for Subject {
    const COLLECTION: &'static str = "subjects";

    fn decode(value: Value) -> Result<Self, DecodeError> {
        let envelope = Envelope::from_value(value)?;
        let id = envelope.id;

        let Some(kind) = SubjectKind::from_tag(&envelope.object) else {
            return Err(DecodeError::UnknownSubjectType(envelope.object));
        };
        let mut subject = match kind {
            SubjectKind::Radical => Self::Radical(serde_json::from_value(envelope.data)?),
            SubjectKind::Kanji => Self::Kanji(serde_json::from_value(envelope.data)?),
            SubjectKind::Vocabulary => Self::Vocabulary(serde_json::from_value(envelope.data)?),
        };
        subject.base_mut().id = id;
        Ok(subject)
    }
}

impl Record for Assignment {
    const COLLECTION: &'static str = "assignments";

    fn decode(value: Value) -> Result<Self, DecodeError> {
        let envelope = Envelope::from_value(value)?;
        envelope.expect_object("assignment")?;
        let id = envelope.id;
        Ok(Self {
            id,
            ..envelope.into_data()?
        })
    }
}

impl Record for LevelProgression {
    const COLLECTION: &'static str = "level_progressions";

    fn decode(value: Value) -> Result<Self, DecodeError> {
        let envelope = Envelope::from_value(value)?;
        envelope.expect_object("level_progression")?;
        let id = envelope.id;
        Ok(Self {
            id,
            ..envelope.into_data()?
        })
    }
}

impl Record for Review {
    const COLLECTION: &'static str = "reviews";

    fn decode(value: Value) -> Result<Self, DecodeError> {
        let envelope = Envelope::from_value(value)?;
        envelope.expect_object("review")?;
        let id = envelope.id;
        Ok(Self {
            id,
            ..envelope.into_data()?
        })
    }
}
