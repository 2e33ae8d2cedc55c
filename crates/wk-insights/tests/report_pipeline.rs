//! Decoded API payloads flowing through the report computations.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wk_core::Record;
use wk_core::entities::{Review, Subject};
use wk_insights::{ReviewStats, mnemonic_mentions, render_mentions};

fn kanji(id: u64, characters: &str, reading_mnemonic: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "object": "kanji",
        "data": {
            "created_at": created_at,
            "level": 1,
            "slug": characters,
            "characters": characters,
            "meanings": [{"meaning": "One", "primary": true, "accepted_answer": true}],
            "auxiliary_meanings": [],
            "readings": [
                {"type": "onyomi", "primary": true, "reading": "いち", "accepted_answer": true}
            ],
            "component_subject_ids": [1],
            "amalgamation_subject_ids": [],
            "visually_similar_subject_ids": [],
            "meaning_mnemonic": "Lying on the <radical>ground</radical>.",
            "meaning_hint": null,
            "reading_mnemonic": reading_mnemonic,
            "reading_hint": null,
            "lesson_position": 26
        }
    })
}

fn radical(id: u64) -> Value {
    json!({
        "id": id,
        "object": "radical",
        "data": {
            "created_at": "2012-02-27T18:08:16.000000Z",
            "level": 1,
            "slug": "ground",
            "characters": "一",
            "meanings": [{"meaning": "Ground", "primary": true, "accepted_answer": true}],
            "auxiliary_meanings": [],
            "amalgamation_subject_ids": [440],
            "meaning_mnemonic": "こういち drew a line.",
            "lesson_position": 0
        }
    })
}

fn review(id: u64, subject_id: u64, created_at: &str, meaning: u32, reading: u32) -> Value {
    json!({
        "id": id,
        "object": "review",
        "data": {
            "created_at": created_at,
            "assignment_id": id + 100,
            "spaced_repetition_system_id": 1,
            "subject_id": subject_id,
            "starting_srs_stage": 1,
            "ending_srs_stage": 2,
            "incorrect_meaning_answers": meaning,
            "incorrect_reading_answers": reading
        }
    })
}

fn decode_all<R: Record>(values: Vec<Value>) -> Vec<R> {
    values.into_iter().map(|v| R::decode(v).unwrap()).collect()
}

#[test]
fn mentions_from_decoded_subjects() {
    let subjects: Vec<Subject> = decode_all(vec![
        radical(1),
        kanji(440, "一", "It means this こういち", "2024-03-01T10:00:00.000000Z"),
        kanji(441, "二", "<reading>こういち</reading> has two", "2013-05-02T00:00:00.000000Z"),
        kanji(442, "三", "Three", "2024-03-01T10:00:00.000000Z"),
    ]);

    let mentions = mnemonic_mentions(&subjects, "こういち");

    assert_eq!(mentions.kanji, vec!["一".to_string(), "二".to_string()]);
    assert!(mentions.vocabulary.is_empty());
    assert_eq!(
        mentions.by_year.into_iter().collect::<Vec<_>>(),
        vec![(2013, 1), (2024, 1)]
    );
}

#[test]
fn rendered_mentions_report_counts() {
    let subjects: Vec<Subject> = decode_all(vec![kanji(
        440,
        "一",
        "It means this こういち",
        "2024-03-01T10:00:00.000000Z",
    )]);
    let text = render_mentions(&mnemonic_mentions(&subjects, "こういち"));
    assert!(text.contains("There are 1 reading mnemonics that mention こういち."));
}

#[test]
fn review_stats_from_decoded_reviews() {
    let reviews: Vec<Review> = decode_all(vec![
        review(1, 440, "2024-01-01T09:00:00.000000Z", 1, 0),
        review(2, 441, "2024-01-02T09:00:00.000000Z", 0, 2),
        review(3, 440, "2024-02-05T23:59:59.999999Z", 2, 1),
    ]);

    let stats = ReviewStats::from_reviews(&reviews);

    assert_eq!(stats.total(), 3);
    assert_eq!(stats.most_reviewed(1), vec![(440, 2)]);
    assert_eq!(stats.incorrect_on(chrono::Weekday::Mon).meaning, 3);
    assert_eq!(stats.incorrect_on(chrono::Weekday::Tue).reading, 2);
    assert_eq!(
        stats.per_month().iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>(),
        vec![((2024, 1), 2), ((2024, 2), 1)]
    );
}
