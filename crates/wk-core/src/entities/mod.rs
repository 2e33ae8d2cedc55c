//! Entity structs for all WaniKani resources the client decodes.
//!
//! Field names follow the API's `data` payloads so the structs deserialize
//! directly from an envelope's `data` object. Envelope-level ids are filled in
//! by [`crate::decode`].

mod assignment;
mod level_progression;
mod meaning;
mod review;
mod subject;

pub use assignment::Assignment;
pub use level_progression::LevelProgression;
pub use meaning::{ContextSentence, Meaning, Reading, ReadingKind};
pub use review::Review;
pub use subject::{Kanji, Radical, Subject, SubjectBase, SubjectKind, Vocabulary};
