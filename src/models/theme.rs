use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Visual theme, ordered from lightest to darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Medium,
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct ParseThemeError(String);

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Medium, Theme::Dark];

    /// One step towards `Light`, or `None` when already there.
    pub fn lighter(self) -> Option<Self> {
        match self {
            Theme::Light => None,
            Theme::Medium => Some(Theme::Light),
            Theme::Dark => Some(Theme::Medium),
        }
    }

    /// One step towards `Dark`, or `None` when already there.
    pub fn darker(self) -> Option<Self> {
        match self {
            Theme::Light => Some(Theme::Medium),
            Theme::Medium => Some(Theme::Dark),
            Theme::Dark => None,
        }
    }

    /// Name as persisted in preferences.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "LIGHT",
            Theme::Medium => "MEDIUM",
            Theme::Dark => "DARK",
        }
    }

    /// Angle of the dial glyph in the theme tip, in degrees.
    pub fn dial_rotation(self) -> f32 {
        match self {
            Theme::Light => 30.0,
            Theme::Medium => 0.0,
            Theme::Dark => -30.0,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| ParseThemeError(s.to_string()))
    }
}
