//! Expansion of a quiz into the slides it is played as.

use chrono::NaiveDate;

use crate::models::{Question, Quiz};

/// One full-screen display state.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    QuestionsTitle { date: Option<NaiveDate> },
    AnswersTitle,
    /// Question shown without its answer.
    Question(Question),
    /// Question shown with its answer and score.
    QuestionAndAnswer(Question),
    EndTitle,
}

/// Builds the playback order for `quiz`: every question alone, then every
/// question again followed by its answer. Always `3 * N + 3` scenes long.
pub fn build_scenes(quiz: &Quiz) -> Vec<Scene> {
    let questions = &quiz.questions;
    let mut scenes = Vec::with_capacity(3 * questions.len() + 3);

    scenes.push(Scene::QuestionsTitle { date: quiz.date });
    scenes.extend(questions.iter().cloned().map(Scene::Question));

    scenes.push(Scene::AnswersTitle);
    for question in questions {
        scenes.push(Scene::Question(question.clone()));
        scenes.push(Scene::QuestionAndAnswer(question.clone()));
    }

    scenes.push(Scene::EndTitle);
    scenes
}
