//! Review history statistics.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Weekday};
use wk_core::entities::Review;

/// Incorrect answers summed over a set of reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncorrectTally {
    pub meaning: u64,
    pub reading: u64,
}

impl IncorrectTally {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.meaning + self.reading
    }
}

/// Aggregates over an account's reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewStats {
    total: usize,
    per_subject: HashMap<u64, usize>,
    /// Indexed by days from Monday.
    incorrect_by_weekday: [IncorrectTally; 7],
    per_month: BTreeMap<(i32, u32), usize>,
}

impl ReviewStats {
    #[must_use]
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut stats = Self {
            total: reviews.len(),
            ..Self::default()
        };

        for review in reviews {
            *stats.per_subject.entry(review.subject_id).or_default() += 1;

            let day = review.created_at.weekday().num_days_from_monday() as usize;
            let tally = &mut stats.incorrect_by_weekday[day];
            tally.meaning += u64::from(review.incorrect_meaning_answers);
            tally.reading += u64::from(review.incorrect_reading_answers);

            let month = (review.created_at.year(), review.created_at.month());
            *stats.per_month.entry(month).or_default() += 1;
        }

        stats
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct subjects reviewed.
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.per_subject.len()
    }

    #[must_use]
    pub fn reviews_of(&self, subject_id: u64) -> usize {
        self.per_subject.get(&subject_id).copied().unwrap_or(0)
    }

    /// The `n` most-reviewed subjects as `(subject_id, count)`, highest count
    /// first; equal counts are ordered by subject id.
    #[must_use]
    pub fn most_reviewed(&self, n: usize) -> Vec<(u64, usize)> {
        let mut ranked: Vec<(u64, usize)> = self
            .per_subject
            .iter()
            .map(|(&id, &count)| (id, count))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }

    #[must_use]
    pub fn incorrect_on(&self, weekday: Weekday) -> IncorrectTally {
        self.incorrect_by_weekday[weekday.num_days_from_monday() as usize]
    }

    /// Incorrect answers for each weekday, Monday first.
    pub fn incorrect_by_weekday(&self) -> impl Iterator<Item = (Weekday, IncorrectTally)> + '_ {
        std::iter::successors(Some(Weekday::Mon), |day| Some(day.succ()))
            .zip(self.incorrect_by_weekday.iter().copied())
    }

    /// Review counts per `(year, month)`, oldest first. Months without
    /// reviews are absent.
    #[must_use]
    pub const fn per_month(&self) -> &BTreeMap<(i32, u32), usize> {
        &self.per_month
    }
}
