//! Scripted transport and API-shaped fixtures shared by the client tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{Value, json};
use wk_api::Transport;
use wk_config::WkConfig;

pub const BASE_URL: &str = "https://api.test/v2";

struct Scripted {
    reset: Option<String>,
    body: String,
}

/// Replays canned responses in order and records every requested URL.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Scripted>>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(self, body: Value) -> Self {
        self.raw(&body.to_string())
    }

    pub fn raw(self, body: &str) -> Self {
        self.push(None, body)
    }

    /// A `{error, code: 429}` body with the given `RateLimit-Reset` header value.
    pub fn rate_limited(self, reset: Option<String>) -> Self {
        let body = json!({"error": "Rate limit exceeded", "code": 429}).to_string();
        self.push(reset, &body)
    }

    fn push(self, reset: Option<String>, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Scripted {
            reset,
            body: body.to_string(),
        });
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.requested.lock().unwrap().push(url.to_string());
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request to {url}"));

        let mut builder = http::Response::builder().status(200);
        if let Some(reset) = next.reset {
            builder = builder.header("RateLimit-Reset", reset);
        }
        Ok(reqwest::Response::from(builder.body(next.body).unwrap()))
    }
}

impl Transport for &ScriptedTransport {
    async fn get(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        (**self).get(url).await
    }
}

pub fn test_config() -> WkConfig {
    let mut config = WkConfig::default();
    config.api.token = "test-token".into();
    config.api.base_url = BASE_URL.into();
    config
}

pub fn url(path: &str) -> String {
    format!("{BASE_URL}/{path}")
}

pub fn collection(data: Vec<Value>, next_url: Option<&str>) -> Value {
    json!({
        "object": "collection",
        "url": url("collection"),
        "pages": {"per_page": 500, "next_url": next_url, "previous_url": null},
        "total_count": data.len(),
        "data_updated_at": "2024-03-01T10:00:00.000000Z",
        "data": data
    })
}

pub fn assignment(id: u64) -> Value {
    json!({
        "id": id,
        "object": "assignment",
        "url": url(&format!("assignments/{id}")),
        "data_updated_at": "2024-03-01T10:00:00.000000Z",
        "data": {
            "created_at": "2024-03-01T10:00:00.000000Z",
            "subject_id": 1000 + id,
            "subject_type": "kanji",
            "srs_stage": 4,
            "unlocked_at": "2024-03-01T10:00:00.000000Z",
            "started_at": null,
            "passed_at": null,
            "burned_at": null,
            "available_at": null,
            "resurrected_at": null,
            "hidden": false
        }
    })
}

pub fn review(id: u64, subject_id: u64) -> Value {
    json!({
        "id": id,
        "object": "review",
        "data": {
            "created_at": "2024-03-04T12:30:00.000000Z",
            "assignment_id": 10 + id,
            "spaced_repetition_system_id": 1,
            "subject_id": subject_id,
            "starting_srs_stage": 2,
            "ending_srs_stage": 3,
            "incorrect_meaning_answers": 0,
            "incorrect_reading_answers": 1
        }
    })
}

pub fn radical(id: u64) -> Value {
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
            "meaning_mnemonic": "A single horizontal stroke.",
            "lesson_position": 0
        }
    })
}

pub fn kanji(id: u64) -> Value {
    json!({
        "id": id,
        "object": "kanji",
        "data": {
            "created_at": "2024-03-01T10:00:00.000000Z",
            "level": 1,
            "slug": "一",
            "characters": "一",
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
            "reading_mnemonic": "It means this こういち",
            "reading_hint": null,
            "lesson_position": 26
        }
    })
}

pub fn vocabulary(id: u64) -> Value {
    json!({
        "id": id,
        "object": "vocabulary",
        "data": {
            "created_at": "2012-02-28T08:04:47.000000Z",
            "level": 1,
            "slug": "一つ",
            "characters": "一つ",
            "meanings": [{"meaning": "One Thing", "primary": true, "accepted_answer": true}],
            "auxiliary_meanings": [],
            "readings": [{"primary": true, "reading": "ひとつ", "accepted_answer": true}],
            "parts_of_speech": ["numeral"],
            "component_subject_ids": [440],
            "meaning_mnemonic": "One thing.",
            "reading_mnemonic": "Hito-tsu.",
            "context_sentences": [],
            "lesson_position": 44
        }
    })
}
