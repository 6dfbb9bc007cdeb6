//! Light/dark color theme and its persisted preference.

use crate::storage::{PreferenceStore, StorageResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Preference key the theme is stored under.
pub const THEME_KEY: &str = "theme";

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// Read the stored theme.
///
/// A missing entry yields the default theme. An unreadable value is logged
/// and also falls back to the default.
pub fn load_theme(store: &dyn PreferenceStore) -> StorageResult<Theme> {
    let Some(value) = store.get(THEME_KEY)? else {
        return Ok(Theme::default());
    };
    Ok(value.parse().unwrap_or_else(|e: ParseThemeError| {
        log::warn!("Ignoring stored theme preference: {}", e);
        Theme::default()
    }))
}

/// Persist the theme.
pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) -> StorageResult<()> {
    log::debug!("Saving theme preference {}", theme);
    store.set(THEME_KEY, theme.as_str())
}
