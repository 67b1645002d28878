use log::{debug, warn};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::ports::{QuizSource, ScoreStore, ThemeStore};

use super::Playback;

/// Input the session understands, already mapped from physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    ThemeUp,
    ThemeDown,
    ToggleScore,
    /// Fetch the quiz again and start over.
    Restart,
    Quit,
}

/// Drives `playback` from `actions` until the session ends.
///
/// The playback stays on this task; the quiz fetch is awaited here while
/// `Quit` and `Restart` are still honoured. Returns the playback once it has
/// emitted `Quit`.
pub async fn run_session<Q, S, T>(
    source: Q,
    mut playback: Playback<S, T>,
    mut actions: UnboundedReceiver<Action>,
) -> Playback<S, T>
where
    Q: QuizSource,
    S: ScoreStore,
    T: ThemeStore,
{
    'session: loop {
        playback.start();

        let fetch = source.fetch_latest_quiz();
        tokio::pin!(fetch);
        let fetched = loop {
            tokio::select! {
                biased;
                result = &mut fetch => break Some(result),
                action = actions.recv() => match action {
                    Some(Action::Restart) => continue 'session,
                    Some(Action::Quit) | None => break None,
                    Some(action) => debug!("ignoring {action:?} while loading"),
                },
            }
        };

        match fetched {
            Some(Ok(quiz)) => playback.on_quiz_loaded(quiz),
            Some(Err(err)) => {
                warn!("failed to fetch quiz: {err}");
                playback.on_quiz_load_failed();
                break 'session;
            }
            None => break 'session,
        }

        while let Some(action) = actions.recv().await {
            match action {
                Action::Restart => continue 'session,
                Action::Quit => break 'session,
                action => playback.apply(action),
            }
            if playback.is_ended() {
                break 'session;
            }
        }
        break 'session;
    }

    playback.terminate();
    playback
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use chrono::NaiveDate;
    use tokio::sync::mpsc;

    use super::*;
    use crate::error::FetchError;
    use crate::models::{Question, QuestionType, Quiz, Score, Theme};
    use crate::playback::{Display, DisplayEvent, TitleKind};

    struct ScriptedSource {
        quiz: Option<Quiz>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn serving(quiz: Quiz) -> Self {
            Self {
                quiz: Some(quiz),
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                quiz: None,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl QuizSource for &ScriptedSource {
        fn fetch_latest_quiz(&self) -> impl Future<Output = Result<Quiz, FetchError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let quiz = self.quiz.clone();
            let delay = self.delay;
            async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                quiz.ok_or(FetchError::Status(503))
            }
        }
    }

    #[derive(Default)]
    struct Scores(HashMap<u32, Score>);

    impl ScoreStore for Scores {
        fn set_current_date(&mut self, _date: NaiveDate) {}

        fn score(&self, question_number: u32) -> Score {
            self.0.get(&question_number).copied().unwrap_or_default()
        }

        fn set_score(&mut self, question_number: u32, score: Score) {
            self.0.insert(question_number, score);
        }
    }

    struct Themes(Theme);

    impl ThemeStore for Themes {
        fn theme(&self) -> Theme {
            self.0
        }

        fn set_theme(&mut self, theme: Theme) {
            self.0 = theme;
        }

        fn tip_timeout(&self) -> Duration {
            Duration::from_millis(2000)
        }
    }

    fn quiz() -> Quiz {
        Quiz::new(
            "id",
            NaiveDate::from_ymd_opt(2019, 11, 16),
            None,
            vec![Question::new(1, QuestionType::Normal, "question1", "answer1")],
        )
    }

    fn playback() -> (Playback<Scores, Themes>, mpsc::UnboundedReceiver<DisplayEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Playback::new(Scores::default(), Themes(Theme::Medium), Display::new(tx)), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<DisplayEvent>) -> Vec<DisplayEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_failed_fetch_quits() {
        let (playback, mut display) = playback();
        let (_tx, actions) = mpsc::unbounded_channel();

        let playback = run_session(&ScriptedSource::failing(), playback, actions).await;

        assert!(playback.is_ended());
        assert_eq!(
            drain(&mut display),
            vec![
                DisplayEvent::Theme(Theme::Medium),
                DisplayEvent::Loading(true),
                DisplayEvent::Quit,
            ]
        );
    }

    #[tokio::test]
    async fn test_plays_to_the_end() {
        let (playback, mut display) = playback();
        let (tx, actions) = mpsc::unbounded_channel();
        for action in [Action::Next, Action::Next, Action::Next, Action::Next] {
            tx.send(action).unwrap();
        }
        tx.send(Action::ToggleScore).unwrap();
        for _ in 0..3 {
            tx.send(Action::Next).unwrap();
        }

        let playback = run_session(&ScriptedSource::serving(quiz()), playback, actions).await;

        assert!(playback.is_ended());
        assert_eq!(playback.scores().score(1), Score::Full);
        let events = drain(&mut display);
        assert!(events.contains(&DisplayEvent::TotalScore(Some(1.0))));
        assert!(events.contains(&DisplayEvent::Title(Some(TitleKind::End))));
        assert_eq!(events.last(), Some(&DisplayEvent::Quit));
        assert_eq!(events.iter().filter(|e| **e == DisplayEvent::Quit).count(), 1);
    }

    #[tokio::test]
    async fn test_closed_channel_ends_session() {
        let (playback, mut display) = playback();
        let (tx, actions) = mpsc::unbounded_channel();
        tx.send(Action::Next).unwrap();
        drop(tx);

        let playback = run_session(&ScriptedSource::serving(quiz()), playback, actions).await;

        assert!(playback.is_ended());
        assert_eq!(drain(&mut display).last(), Some(&DisplayEvent::Quit));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_while_loading() {
        let (playback, mut display) = playback();
        let (tx, actions) = mpsc::unbounded_channel();
        let source = ScriptedSource {
            delay: Duration::from_secs(30),
            ..ScriptedSource::serving(quiz())
        };
        tx.send(Action::Next).unwrap();
        tx.send(Action::Quit).unwrap();

        let playback = run_session(&source, playback, actions).await;

        assert!(playback.is_ended());
        assert!(!drain(&mut display).contains(&DisplayEvent::Loading(false)));
    }

    #[tokio::test]
    async fn test_restart_fetches_again() {
        let (playback, mut display) = playback();
        let (tx, actions) = mpsc::unbounded_channel();
        let source = ScriptedSource::serving(quiz());
        tx.send(Action::Next).unwrap();
        tx.send(Action::Restart).unwrap();
        tx.send(Action::Quit).unwrap();

        let playback = run_session(&source, playback, actions).await;

        assert!(playback.is_ended());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        let loads = drain(&mut display)
            .into_iter()
            .filter(|e| *e == DisplayEvent::Loading(true))
            .count();
        assert_eq!(loads, 2);
    }
}
