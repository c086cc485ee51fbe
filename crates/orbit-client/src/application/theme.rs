//! Light/dark theme preference.
//!
//! The chosen theme is remembered under [`THEME_KEY`] in a
//! [`PreferenceStore`].  On start-up the theme is resolved in this order:
//!
//! 1. the stored value, if it names a theme;
//! 2. the system preference, if one is known;
//! 3. [`Theme::Dark`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

/// Preference key the theme is stored under.
pub const THEME_KEY: &str = "services-hub-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
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

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Key/value storage for user preferences.
///
/// Implementations must be infallible from the caller's point of view: a
/// store that cannot persist simply forgets.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Current theme, written through to a [`PreferenceStore`].
pub struct ThemeStore {
    store: Arc<dyn PreferenceStore>,
    theme: Theme,
}

impl ThemeStore {
    /// Resolves the initial theme.
    ///
    /// `system_prefers_dark` is the platform's colour-scheme hint, or `None`
    /// when the platform offers none.
    pub fn new(store: Arc<dyn PreferenceStore>, system_prefers_dark: Option<bool>) -> Self {
        let stored = store.get(THEME_KEY).and_then(|v| v.parse::<Theme>().ok());
        let theme = stored
            .or_else(|| system_prefers_dark.map(|dark| if dark { Theme::Dark } else { Theme::Light }))
            .unwrap_or_default();
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn set(&mut self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
        self.theme = theme;
    }

    /// Flips between light and dark and returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
