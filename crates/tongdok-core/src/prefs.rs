//! Reader preferences persisted through a [`KvStore`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TongdokError};
use crate::storage::KvStore;

pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 32;
pub const DEFAULT_FONT_SIZE: u32 = 18;

const THEME_KEY: &str = "prefs.theme";
const FONT_SIZE_KEY: &str = "prefs.font_size";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Sepia => "sepia",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = TongdokError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "sepia" => Ok(Self::Sepia),
            other => Err(TongdokError::InvalidInput(format!(
                "Unknown theme: {} (use light, dark, sepia)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub font_size: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Preferences {
    /// Load preferences, falling back to defaults for missing or unreadable values.
    pub fn load<S: KvStore + ?Sized>(store: &S) -> Result<Self> {
        let mut prefs = Self::default();

        if let Some(raw) = store.get(THEME_KEY)? {
            match raw.parse() {
                Ok(theme) => prefs.theme = theme,
                Err(_) => tracing::warn!(value = %raw, "ignoring stored theme"),
            }
        }
        if let Some(raw) = store.get(FONT_SIZE_KEY)? {
            match raw.parse::<u32>() {
                Ok(size) => prefs.set_font_size(size),
                Err(_) => tracing::warn!(value = %raw, "ignoring stored font size"),
            }
        }

        Ok(prefs)
    }

    pub fn save<S: KvStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.set(THEME_KEY, self.theme.as_str())?;
        store.set(FONT_SIZE_KEY, &self.font_size.to_string())
    }

    /// Set the font size, clamped to the supported range.
    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }
}
