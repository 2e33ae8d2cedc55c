//! Reading-mnemonic mention search.
//!
//! Kanji and vocabulary reading mnemonics are searched (after tag stripping)
//! for a term, typically a name that recurs across the mnemonics. Radicals
//! have no reading mnemonic and never match.

use std::collections::BTreeMap;

use chrono::Datelike;
use wk_core::entities::{Subject, SubjectKind};

use crate::text::strip_tags;

/// Subjects whose reading mnemonic mentions a term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MnemonicMentions {
    pub term: String,
    /// Characters (or slug, when there are none) of matching kanji, in input order.
    pub kanji: Vec<String>,
    /// Characters (or slug) of matching vocabulary, in input order.
    pub vocabulary: Vec<String>,
    /// Matches per creation year.
    pub by_year: BTreeMap<i32, usize>,
    /// Matches without a creation time.
    pub undated: usize,
}

impl MnemonicMentions {
    #[must_use]
    pub fn total(&self) -> usize {
        self.kanji.len() + self.vocabulary.len()
    }
}

/// Find every kanji and vocabulary whose reading mnemonic contains `term`.
#[must_use]
pub fn mnemonic_mentions(subjects: &[Subject], term: &str) -> MnemonicMentions {
    let mut mentions = MnemonicMentions {
        term: term.to_string(),
        ..MnemonicMentions::default()
    };

    for subject in subjects {
        let Some(mnemonic) = subject.reading_mnemonic() else {
            continue;
        };
        if !strip_tags(mnemonic).contains(term) {
            continue;
        }

        match subject.created_at() {
            Some(created) => *mentions.by_year.entry(created.year()).or_default() += 1,
            None => mentions.undated += 1,
        }

        let label = subject.characters().unwrap_or_else(|| subject.slug()).to_string();
        match subject.kind() {
            SubjectKind::Kanji => mentions.kanji.push(label),
            SubjectKind::Vocabulary => mentions.vocabulary.push(label),
            SubjectKind::Radical => {}
        }
    }

    tracing::debug!(term, matches = mentions.total(), "searched reading mnemonics");
    mentions
}
