//! What the terminal currently shows, folded from display events.

use chrono::NaiveDate;

use crate::models::{Score, Theme};
use crate::playback::{DisplayEvent, TitleKind};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Screen {
    pub loading: bool,
    pub quiz_date: Option<NaiveDate>,
    pub title: Option<TitleKind>,
    pub question_number: Option<u32>,
    pub question_text: String,
    pub answer_text: String,
    pub what_links: bool,
    pub question_score: Option<Score>,
    pub total_score: Option<f32>,
    pub theme: Theme,
    pub theme_tip: Option<Theme>,
    pub quit: bool,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: DisplayEvent) {
        match event {
            DisplayEvent::Loading(loading) => self.loading = loading,
            DisplayEvent::QuizDate(date) => self.quiz_date = date,
            DisplayEvent::Title(title) => self.title = title,
            DisplayEvent::QuestionNumber(number) => self.question_number = Some(number),
            DisplayEvent::QuestionText(text) => self.question_text = text,
            DisplayEvent::AnswerText(text) => self.answer_text = text,
            DisplayEvent::WhatLinks(what_links) => self.what_links = what_links,
            DisplayEvent::QuestionScore(score) => self.question_score = score,
            DisplayEvent::TotalScore(total) => self.total_score = total,
            DisplayEvent::Theme(theme) => self.theme = theme,
            DisplayEvent::ThemeTip(tip) => self.theme_tip = tip,
            DisplayEvent::Quit => self.quit = true,
        }
    }

    /// A question is on screen rather than a title.
    pub fn shows_question(&self) -> bool {
        self.title.is_none() && self.question_number.is_some()
    }

    pub fn answer_revealed(&self) -> bool {
        !self.answer_text.is_empty()
    }
}
