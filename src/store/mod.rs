//! Key-value persistence for preferences and scores.

mod kv;
mod prefs;
mod scores;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use prefs::PrefsRepository;
pub use scores::ScoresRepository;
