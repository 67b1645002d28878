use chrono::NaiveDate;
use saturday_quiz::screen::Screen;
use saturday_quiz::{
    Display, DisplayEvent, MemoryStore, Playback, PrefsRepository, Question, QuestionType, Quiz,
    Score, ScoreStore, ScoresRepository, TitleKind,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};

type MemoryPlayback = Playback<ScoresRepository<MemoryStore>, PrefsRepository<MemoryStore>>;

fn test_quiz() -> Quiz {
    Quiz::new(
        "id",
        NaiveDate::from_ymd_opt(2019, 11, 16),
        Some("title".to_string()),
        vec![
            Question::new(1, QuestionType::Normal, "question1", "answer1"),
            Question::new(2, QuestionType::WhatLinks, "question2", "answer2"),
        ],
    )
}

fn loaded_playback() -> (MemoryPlayback, UnboundedReceiver<DisplayEvent>, Screen) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut playback = Playback::new(
        ScoresRepository::new(MemoryStore::new()),
        PrefsRepository::new(MemoryStore::new()),
        Display::new(tx),
    );
    playback.start();
    playback.on_quiz_loaded(test_quiz());

    let mut screen = Screen::new();
    apply_pending(&mut rx, &mut screen);
    (playback, rx, screen)
}

/// Applies queued events and reports whether there were any.
fn apply_pending(rx: &mut UnboundedReceiver<DisplayEvent>, screen: &mut Screen) -> bool {
    let mut changed = false;
    while let Ok(event) = rx.try_recv() {
        screen.apply(event);
        changed = true;
    }
    changed
}

fn describe(screen: &Screen) -> String {
    if screen.quit {
        return "quit".to_string();
    }
    match screen.title {
        Some(TitleKind::Questions) => "questions title".to_string(),
        Some(TitleKind::Answers) => "answers title".to_string(),
        Some(TitleKind::End) => "end title".to_string(),
        None => {
            let number = screen.question_number.unwrap_or_default();
            if screen.answer_revealed() {
                format!("q{number} + {}", screen.answer_text)
            } else {
                format!("q{number}")
            }
        }
    }
}

#[test]
fn test_next_walks_every_scene_then_quits() {
    let (mut playback, mut rx, mut screen) = loaded_playback();
    assert_eq!(describe(&screen), "questions title");
    assert_eq!(screen.quiz_date, NaiveDate::from_ymd_opt(2019, 11, 16));
    assert!(!screen.loading);

    let mut seen = Vec::new();
    for _ in 0..9 {
        playback.next();
        apply_pending(&mut rx, &mut screen);
        seen.push(describe(&screen));
    }

    assert_eq!(
        seen,
        vec![
            "q1",
            "q2",
            "answers title",
            "q1",
            "q1 + answer1",
            "q2",
            "q2 + answer2",
            "end title",
            "quit",
        ]
    );
    assert!(playback.is_ended());
}

#[test]
fn test_previous_walks_back_and_stops_at_the_start() {
    let (mut playback, mut rx, mut screen) = loaded_playback();
    for _ in 0..8 {
        playback.next();
    }
    apply_pending(&mut rx, &mut screen);
    assert_eq!(describe(&screen), "end title");

    let mut seen = Vec::new();
    for _ in 0..8 {
        playback.previous();
        apply_pending(&mut rx, &mut screen);
        seen.push(describe(&screen));
    }
    assert_eq!(
        seen,
        vec![
            "q2 + answer2",
            "q2",
            "q1 + answer1",
            "q1",
            "answers title",
            "q2",
            "q1",
            "questions title",
        ]
    );

    playback.previous();
    assert!(!apply_pending(&mut rx, &mut screen));
    assert_eq!(playback.position(), 0);
}

#[test]
fn test_what_links_flag_follows_the_question() {
    let (mut playback, mut rx, mut screen) = loaded_playback();

    playback.next();
    apply_pending(&mut rx, &mut screen);
    assert!(!screen.what_links);

    playback.next();
    apply_pending(&mut rx, &mut screen);
    assert!(screen.what_links);
    assert_eq!(screen.question_score, None);
}

#[test]
fn test_scores_add_up_at_the_end() {
    let (mut playback, mut rx, mut screen) = loaded_playback();
    for _ in 0..5 {
        playback.next();
    }
    playback.toggle_score();
    playback.next();
    playback.next();
    playback.toggle_score();
    playback.toggle_score();
    playback.next();
    apply_pending(&mut rx, &mut screen);

    assert_eq!(describe(&screen), "end title");
    assert_eq!(screen.total_score, Some(1.5));
    assert_eq!(playback.scores().score(1), Score::Full);
    assert_eq!(playback.scores().score(2), Score::Half);
}
