use std::time::Duration;

use log::warn;
use serde_json::Value;

use crate::models::Theme;
use crate::ports::ThemeStore;

use super::KeyValueStore;

const KEY_THEME: &str = "theme";

pub const DEFAULT_TIP_TIMEOUT: Duration = Duration::from_millis(2000);

/// Display preferences: the selected theme and the tip timeout.
#[derive(Debug)]
pub struct PrefsRepository<K> {
    store: K,
    tip_timeout: Duration,
}

impl<K: KeyValueStore> PrefsRepository<K> {
    pub fn new(store: K) -> Self {
        Self::with_tip_timeout(store, DEFAULT_TIP_TIMEOUT)
    }

    pub fn with_tip_timeout(store: K, tip_timeout: Duration) -> Self {
        Self { store, tip_timeout }
    }
}

impl<K: KeyValueStore> ThemeStore for PrefsRepository<K> {
    fn theme(&self) -> Theme {
        match self.store.get_str(KEY_THEME).map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                warn!("ignoring stored theme: {err}");
                Theme::default()
            }
            None => Theme::default(),
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        if let Err(err) = self.store.set(KEY_THEME, Value::from(theme.name())) {
            warn!("failed to store theme: {err}");
        }
    }

    fn tip_timeout(&self) -> Duration {
        self.tip_timeout
    }
}
