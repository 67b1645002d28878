use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use tokio::sync::mpsc::UnboundedSender;

use crate::models::{Score, Theme};

/// Which title a title scene shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKind {
    Questions,
    Answers,
    End,
}

/// State changes emitted by the playback for a display to render.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    Loading(bool),
    QuizDate(Option<NaiveDate>),
    /// `None` hides the title.
    Title(Option<TitleKind>),
    QuestionNumber(u32),
    QuestionText(String),
    /// Empty until the answer is revealed.
    AnswerText(String),
    WhatLinks(bool),
    /// Only `Some` on a question-and-answer scene.
    QuestionScore(Option<Score>),
    /// Only `Some` on the end title.
    TotalScore(Option<f32>),
    Theme(Theme),
    /// `None` hides the tip.
    ThemeTip(Option<Theme>),
    Quit,
}

struct Emitter {
    tx: UnboundedSender<DisplayEvent>,
    tip_generation: u64,
}

/// Ordered sink for [`DisplayEvent`]s.
///
/// Cloning shares the channel, so a tip timer can hide the tip it showed.
/// Tip show and hide are sequenced under one lock: a hide only goes out if
/// no newer tip has been shown since.
#[derive(Clone)]
pub struct Display {
    inner: Arc<Mutex<Emitter>>,
}

impl Display {
    pub fn new(tx: UnboundedSender<DisplayEvent>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Emitter {
                tx,
                tip_generation: 0,
            })),
        }
    }

    pub fn emit(&self, event: DisplayEvent) {
        Self::send(&self.lock(), event);
    }

    /// Shows `theme` as the tip and returns the generation a timer must
    /// present to hide it.
    pub(crate) fn show_tip(&self, theme: Theme) -> u64 {
        let mut emitter = self.lock();
        emitter.tip_generation += 1;
        Self::send(&emitter, DisplayEvent::ThemeTip(Some(theme)));
        emitter.tip_generation
    }

    /// Hides the tip if it is still the one shown as `generation`.
    pub(crate) fn hide_tip(&self, generation: u64) -> bool {
        let emitter = self.lock();
        if emitter.tip_generation != generation {
            return false;
        }
        Self::send(&emitter, DisplayEvent::ThemeTip(None));
        true
    }

    /// Invalidates any outstanding tip without emitting anything.
    pub(crate) fn retire_tip(&self) {
        self.lock().tip_generation += 1;
    }

    fn lock(&self) -> MutexGuard<'_, Emitter> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn send(emitter: &Emitter, event: DisplayEvent) {
        if emitter.tx.send(event).is_err() {
            log::debug!("display closed, dropping event");
        }
    }
}
