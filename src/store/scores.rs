use chrono::NaiveDate;
use log::{info, warn};
use serde_json::Value;

use crate::models::Score;
use crate::ports::ScoreStore;

use super::KeyValueStore;

const KEY_DATE: &str = "date";
const KEY_QUESTION_PREFIX: &str = "question-";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Scores for the current quiz date, one entry per question number.
#[derive(Debug)]
pub struct ScoresRepository<K> {
    store: K,
}

impl<K: KeyValueStore> ScoresRepository<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn current_date(&self) -> Option<NaiveDate> {
        self.store
            .get_str(KEY_DATE)
            .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
    }

    pub fn into_inner(self) -> K {
        self.store
    }
}

impl<K: KeyValueStore> ScoreStore for ScoresRepository<K> {
    fn set_current_date(&mut self, date: NaiveDate) {
        let date_string = date.format(DATE_FORMAT).to_string();
        let stale = self
            .store
            .get_str(KEY_DATE)
            .is_some_and(|stored| stored != date_string);
        if stale {
            info!("new quiz date {date_string}, clearing scores");
            if let Err(err) = self.store.clear() {
                warn!("failed to clear scores: {err}");
            }
        }
        if let Err(err) = self.store.set(KEY_DATE, Value::from(date_string)) {
            warn!("failed to store quiz date: {err}");
        }
    }

    fn score(&self, question_number: u32) -> Score {
        self.store
            .get_f64(&question_key(question_number))
            .and_then(|weight| Score::from_weight(weight as f32))
            .unwrap_or_default()
    }

    fn set_score(&mut self, question_number: u32, score: Score) {
        let value = Value::from(f64::from(score.weight()));
        if let Err(err) = self.store.set(&question_key(question_number), value) {
            warn!("failed to store score for question {question_number}: {err}");
        }
    }
}

fn question_key(question_number: u32) -> String {
    format!("{KEY_QUESTION_PREFIX}{question_number}")
}
