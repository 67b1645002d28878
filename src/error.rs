use std::io;

use thiserror::Error;

/// Why the latest quiz could not be fetched. The session treats every
/// variant the same way.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed: HTTP status {0}")]
    Status(u16),
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} does not contain a JSON object")]
    NotAnObject(String),
}

/// Error type for running the quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to set up the quiz source: {0}")]
    Fetch(#[from] FetchError),
    #[error("failed to open stored preferences: {0}")]
    Store(#[from] StoreError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
