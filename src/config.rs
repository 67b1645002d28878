//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://saturday-quiz.herokuapp.com/api/";
const APP_DIR: &str = "saturday-quiz";
const PREFS_FILE: &str = "prefs.json";
const SCORES_FILE: &str = "scores.json";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Play the weekly Saturday quiz in the terminal", long_about = None)]
pub struct Config {
    /// Base URL of the quiz API
    #[arg(long, env = "SATURDAY_QUIZ_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Call and read timeout for the quiz request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// How long the theme tip stays on screen, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub tip_timeout_ms: u64,

    /// Ask the server to delay its response (for testing the loading screen)
    #[arg(long, default_value_t = 0)]
    pub delay_seconds: u32,

    /// Directory for preferences and scores
    #[arg(long, env = "SATURDAY_QUIZ_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn tip_timeout(&self) -> Duration {
        Duration::from_millis(self.tip_timeout_ms)
    }

    /// The configured data directory, else the platform data directory,
    /// else the working directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }

    pub fn prefs_path(&self) -> PathBuf {
        self.data_dir().join(PREFS_FILE)
    }

    pub fn scores_path(&self) -> PathBuf {
        self.data_dir().join(SCORES_FILE)
    }
}
