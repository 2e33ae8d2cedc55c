//! Plain-text rendering of the insights report.

use std::fmt::Write;

use crate::mnemonics::MnemonicMentions;
use crate::reviews::ReviewStats;

/// A most-reviewed subject resolved to something readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCount {
    pub label: String,
    pub meaning: Option<String>,
    pub count: usize,
}

#[must_use]
pub fn render_reviews(stats: &ReviewStats, top: &[SubjectCount]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "REVIEWS: There have been {} reviews recorded on this account.",
        stats.total()
    );

    if !top.is_empty() {
        out.push_str("\nMost reviewed subjects:\n");
        for entry in top {
            let _ = writeln!(out, "  {:<8} {:>6}", entry.label, entry.count);
        }
    }

    if let Some(worst) = top.first() {
        let meaning = worst.meaning.as_deref().unwrap_or("no meaning");
        let _ = writeln!(
            out,
            "\nThe subject {} ({meaning}) has been reviewed the most ({} times)",
            worst.label, worst.count
        );
    }

    out.push_str("\nIncorrect answers by weekday:\n");
    for (day, tally) in stats.incorrect_by_weekday() {
        let _ = writeln!(
            out,
            "  {day}  meaning {:>6}  reading {:>6}",
            tally.meaning, tally.reading
        );
    }

    if !stats.per_month().is_empty() {
        out.push_str("\nReviews per month:\n");
        for ((year, month), count) in stats.per_month() {
            let _ = writeln!(out, "  {year}-{month:02}  {count:>6}");
        }
    }

    out
}

#[must_use]
pub fn render_mentions(mentions: &MnemonicMentions) -> String {
    let term = &mentions.term;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "MENTIONS: There are {} reading mnemonics that mention {term}. \
         {} of these are kanji mnemonics, and {} are vocabulary.",
        mentions.total(),
        mentions.kanji.len(),
        mentions.vocabulary.len()
    );

    let _ = writeln!(out, "The kanji that mention {term} are:");
    let _ = writeln!(out, "{}", mentions.kanji.join("  "));
    let _ = writeln!(out, "The vocabulary that mention {term} are:");
    let _ = writeln!(out, "{}", mentions.vocabulary.join("  "));

    if !mentions.by_year.is_empty() || mentions.undated > 0 {
        out.push_str("\nMentions by creation year:\n");
        for (year, count) in &mentions.by_year {
            let _ = writeln!(out, "  {year}  {count:>6}");
        }
        if mentions.undated > 0 {
            let _ = writeln!(out, "  ????  {:>6}", mentions.undated);
        }
    }

    out
}
