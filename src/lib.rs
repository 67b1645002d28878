//! # saturday-quiz
//!
//! Plays the weekly Saturday quiz as a sequence of full-screen slides: every
//! question on its own, then every question again followed by its answer,
//! with per-question scoring and a light/medium/dark theme.
//!
//! The playback core ([`Playback`]) only talks to narrow ports
//! ([`QuizSource`], [`ScoreStore`], [`ThemeStore`]) and reports what to show
//! as [`DisplayEvent`]s, so any front end can drive it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use saturday_quiz::{Config, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = Config::parse();
//!     saturday_quiz::run(config).await
//! }
//! ```

pub mod api;
mod app;
pub mod config;
mod error;
pub mod models;
pub mod playback;
pub mod ports;
pub mod scenes;
pub mod screen;
pub mod store;
pub mod terminal;
mod ui;

pub use api::QuizApi;
pub use app::{map_key, run};
pub use config::Config;
pub use error::{FetchError, QuizError, StoreError};
pub use models::{Question, QuestionType, Quiz, Score, Theme};
pub use playback::{run_session, Action, Display, DisplayEvent, Playback, TitleKind};
pub use ports::{QuizSource, ScoreStore, ThemeStore};
pub use scenes::{build_scenes, Scene};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, PrefsRepository, ScoresRepository};
