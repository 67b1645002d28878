//! Terminal front end: wires the stores, the API and the playback session
//! together and turns key presses into actions.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{debug, info};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::QuizApi;
use crate::config::Config;
use crate::error::QuizError;
use crate::playback::{run_session, Action, Display, DisplayEvent, Playback};
use crate::screen::Screen;
use crate::store::{JsonFileStore, PrefsRepository, ScoresRepository};
use crate::terminal::{self, QuizTerminal};
use crate::ui;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Plays the latest quiz full-screen until the user quits or runs off the
/// end.
pub async fn run(config: Config) -> Result<(), QuizError> {
    let source = QuizApi::from_config(&config)?;
    info!("quiz source {}", source.quiz_url());

    let data_dir = config.data_dir();
    debug!("storing preferences in {}", data_dir.display());
    let scores = ScoresRepository::new(JsonFileStore::open(config.scores_path())?);
    let prefs = PrefsRepository::with_tip_timeout(
        JsonFileStore::open(config.prefs_path())?,
        config.tip_timeout(),
    );

    let (display_tx, mut display_rx) = mpsc::unbounded_channel();
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let playback = Playback::new(scores, prefs, Display::new(display_tx));
    let session = tokio::spawn(run_session(source, playback, action_rx));

    let mut term = terminal::init()?;
    let result = run_event_loop(&mut term, &mut display_rx, &action_tx);
    terminal::restore()?;

    drop(action_tx);
    if let Err(err) = session.await {
        log::warn!("playback task failed: {err}");
    }
    result
}

fn run_event_loop(
    terminal: &mut QuizTerminal,
    display: &mut UnboundedReceiver<DisplayEvent>,
    actions: &UnboundedSender<Action>,
) -> Result<(), QuizError> {
    let mut screen = Screen::new();

    loop {
        while let Ok(event) = display.try_recv() {
            screen.apply(event);
        }
        if screen.quit {
            break;
        }

        terminal.draw(|frame| ui::render(frame, &screen))?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = map_key(key.code) {
                    if actions.send(action).is_err() {
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Maps a key to a playback action, directional-pad style.
pub fn map_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Right | KeyCode::Enter => Some(Action::Next),
        KeyCode::Left => Some(Action::Previous),
        KeyCode::Up => Some(Action::ThemeUp),
        KeyCode::Down => Some(Action::ThemeDown),
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::ToggleScore),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
