mod question;
mod quiz;
mod score;
mod theme;

pub use question::{Question, QuestionType};
pub use quiz::{parse_quiz_date, Quiz};
pub use score::{format_total, Score};
pub use theme::{ParseThemeError, Theme};
