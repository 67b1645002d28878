//! Collaborators the playback core is written against.

use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;

use crate::error::FetchError;
use crate::models::{Quiz, Score, Theme};

/// Supplies the current quiz.
pub trait QuizSource {
    fn fetch_latest_quiz(&self) -> impl Future<Output = Result<Quiz, FetchError>> + Send;
}

/// Per-question scores for the quiz currently being played.
pub trait ScoreStore {
    /// Clears every stored score when `date` differs from the last date seen.
    fn set_current_date(&mut self, date: NaiveDate);
    /// Stored score for `question_number`, `Score::None` if absent.
    fn score(&self, question_number: u32) -> Score;
    fn set_score(&mut self, question_number: u32, score: Score);
}

/// Selected theme plus how long theme tips stay up.
pub trait ThemeStore {
    /// Stored theme, `Theme::Medium` if unset.
    fn theme(&self) -> Theme;
    fn set_theme(&mut self, theme: Theme);
    fn tip_timeout(&self) -> Duration;
}
