use serde::Deserialize;

/// Kind of question, as reported by the quiz API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    #[default]
    Normal,
    /// "What links ..." questions, shown with a distinguishing prefix.
    WhatLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    /// 1-based and unique within a quiz.
    pub number: u32,
    #[serde(rename = "type", default)]
    pub kind: QuestionType,
    pub question: String,
    pub answer: String,
}

impl Question {
    pub fn new(
        number: u32,
        kind: QuestionType,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            number,
            kind,
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn is_what_links(&self) -> bool {
        self.kind == QuestionType::WhatLinks
    }
}
