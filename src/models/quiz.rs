use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer};

use super::Question;

/// One weekly quiz as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quiz {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(
        id: impl Into<String>,
        date: Option<NaiveDate>,
        title: Option<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            title,
            questions,
        }
    }

    /// The date scores are keyed by: the quiz date, or `today` when the
    /// quiz carries none.
    pub fn effective_date(&self, today: NaiveDate) -> NaiveDate {
        self.date.unwrap_or(today)
    }
}

/// Parses either an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
pub fn parse_quiz_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => Ok(timestamp.date_naive()),
        Err(_) => NaiveDate::parse_from_str(raw, "%Y-%m-%d"),
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| parse_quiz_date(&value).map_err(de::Error::custom))
        .transpose()
}
