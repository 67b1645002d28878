use chrono::Local;
use log::{debug, info, warn};

use crate::models::{Question, Quiz, Theme};
use crate::ports::{ScoreStore, ThemeStore};
use crate::scenes::{build_scenes, Scene};

use super::{Action, Display, DisplayEvent, TipTimer, TitleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    NotStarted,
    Loading,
    Playing,
    Ended,
}

/// Steps through the scenes of one quiz and reports every change to a
/// [`Display`].
///
/// Not thread-safe by itself: keep it on one task and feed it actions in
/// order (see [`run_session`](super::run_session)).
pub struct Playback<S, T> {
    scores: S,
    themes: T,
    display: Display,
    scenes: Vec<Scene>,
    question_numbers: Vec<u32>,
    position: usize,
    state: SessionState,
    tip_timer: TipTimer,
}

impl<S: ScoreStore, T: ThemeStore> Playback<S, T> {
    pub fn new(scores: S, themes: T, display: Display) -> Self {
        Self {
            scores,
            themes,
            display,
            scenes: Vec::new(),
            question_numbers: Vec::new(),
            position: 0,
            state: SessionState::NotStarted,
            tip_timer: TipTimer::default(),
        }
    }

    /// Begins (or restarts) a session. The caller is expected to fetch a
    /// quiz and report back through [`on_quiz_loaded`](Self::on_quiz_loaded)
    /// or [`on_quiz_load_failed`](Self::on_quiz_load_failed).
    pub fn start(&mut self) {
        self.display.emit(DisplayEvent::Theme(self.themes.theme()));
        self.display.emit(DisplayEvent::Loading(true));

        self.scenes.clear();
        self.question_numbers.clear();
        self.position = 0;
        self.state = SessionState::Loading;
    }

    pub fn on_quiz_loaded(&mut self, quiz: Quiz) {
        info!(
            "loaded quiz {} with {} questions",
            quiz.id,
            quiz.questions.len()
        );
        let today = Local::now().date_naive();
        self.scores.set_current_date(quiz.effective_date(today));

        self.scenes = build_scenes(&quiz);
        self.question_numbers = quiz.questions.iter().map(|q| q.number).collect();
        self.position = 0;
        self.state = SessionState::Playing;

        self.display.emit(DisplayEvent::Loading(false));
        self.show_scene();
    }

    pub fn on_quiz_load_failed(&mut self) {
        warn!("quiz could not be loaded, ending session");
        self.terminate();
    }

    pub fn next(&mut self) {
        if self.state != SessionState::Playing {
            return;
        }
        if self.position + 1 < self.scenes.len() {
            self.position += 1;
            debug!("scene {}/{}", self.position, self.scenes.len() - 1);
            self.show_scene();
        } else {
            self.terminate();
        }
    }

    pub fn previous(&mut self) {
        if self.state != SessionState::Playing || self.position == 0 {
            return;
        }
        self.position -= 1;
        debug!("scene {}/{}", self.position, self.scenes.len() - 1);
        self.show_scene();
    }

    /// Cycles the score of the answered question on screen. Does nothing on
    /// any other scene.
    pub fn toggle_score(&mut self) {
        if self.state != SessionState::Playing {
            return;
        }
        let Some(Scene::QuestionAndAnswer(question)) = self.scenes.get(self.position) else {
            return;
        };
        let number = question.number;
        let score = self.scores.score(number).toggled();
        debug!("question {number} scored {score:?}");

        self.scores.set_score(number, score);
        self.display.emit(DisplayEvent::QuestionScore(Some(score)));
    }

    pub fn on_up(&mut self) {
        if let Some(theme) = self.themes.theme().lighter() {
            self.set_theme(theme);
        }
    }

    pub fn on_down(&mut self) {
        if let Some(theme) = self.themes.theme().darker() {
            self.set_theme(theme);
        }
    }

    /// Applies one of the five playback actions. Session-level actions
    /// (`Restart`, `Quit`) are ignored here.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::ThemeUp => self.on_up(),
            Action::ThemeDown => self.on_down(),
            Action::ToggleScore => self.toggle_score(),
            Action::Restart | Action::Quit => {}
        }
    }

    /// Ends the session. Emits `Quit` once and cancels a pending tip hide.
    pub fn terminate(&mut self) {
        if self.state == SessionState::Ended {
            return;
        }
        self.tip_timer.cancel();
        self.display.retire_tip();
        self.state = SessionState::Ended;
        self.display.emit(DisplayEvent::Quit);
    }

    pub fn is_ended(&self) -> bool {
        self.state == SessionState::Ended
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn current_scene(&self) -> Option<&Scene> {
        match self.state {
            SessionState::Playing => self.scenes.get(self.position),
            _ => None,
        }
    }

    pub fn scores(&self) -> &S {
        &self.scores
    }

    pub fn themes(&self) -> &T {
        &self.themes
    }

    fn set_theme(&mut self, theme: Theme) {
        if self.state == SessionState::Ended {
            return;
        }
        debug!("theme {theme}");
        self.themes.set_theme(theme);
        self.display.emit(DisplayEvent::Theme(theme));

        self.tip_timer.cancel();
        let generation = self.display.show_tip(theme);
        self.tip_timer
            .restart(&self.display, generation, self.themes.tip_timeout());
    }

    fn total_score(&self) -> f32 {
        self.question_numbers
            .iter()
            .map(|&number| self.scores.score(number).weight())
            .sum()
    }

    fn show_scene(&self) {
        let Some(scene) = self.scenes.get(self.position) else {
            return;
        };
        match scene {
            Scene::QuestionsTitle { date } => {
                self.show_title(TitleKind::Questions);
                self.display.emit(DisplayEvent::QuizDate(*date));
            }
            Scene::AnswersTitle => {
                self.show_title(TitleKind::Answers);
                self.display.emit(DisplayEvent::QuizDate(None));
            }
            Scene::Question(question) => {
                self.show_question(question, "");
                self.display.emit(DisplayEvent::QuestionScore(None));
            }
            Scene::QuestionAndAnswer(question) => {
                self.show_question(question, &question.answer);
                let score = self.scores.score(question.number);
                self.display.emit(DisplayEvent::QuestionScore(Some(score)));
            }
            Scene::EndTitle => {
                self.show_title(TitleKind::End);
                self.display.emit(DisplayEvent::QuizDate(None));
                self.display
                    .emit(DisplayEvent::TotalScore(Some(self.total_score())));
            }
        }
    }

    fn show_title(&self, kind: TitleKind) {
        self.display.emit(DisplayEvent::Title(Some(kind)));
        self.display.emit(DisplayEvent::QuestionScore(None));
        if kind != TitleKind::End {
            self.display.emit(DisplayEvent::TotalScore(None));
        }
    }

    fn show_question(&self, question: &Question, answer: &str) {
        self.display.emit(DisplayEvent::Title(None));
        self.display.emit(DisplayEvent::QuestionNumber(question.number));
        self.display
            .emit(DisplayEvent::QuestionText(question.question.clone()));
        self.display.emit(DisplayEvent::AnswerText(answer.to_string()));
        self.display
            .emit(DisplayEvent::WhatLinks(question.is_what_links()));
    }
}
