//! Light/dark theme preference.
//!
//! The stored preference wins over the OS color-scheme signal. Every apply
//! writes the value back, so the first visit pins whatever the OS reported.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failing store (private mode, quota, storage
//! disabled) is logged and otherwise ignored so the toggle keeps working for
//! the current page session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DARK_MODE_LABEL, LIGHT_MODE_LABEL, MOON_ICON, SUN_ICON};
use crate::error::PageError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted in storage and written to `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Only the exact literals are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Element that carries the `data-theme` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeHost {
    /// `<body>`, which the portfolio stylesheet keys off.
    #[default]
    Body,
    /// The `<html>` document element.
    Root,
}

/// Icon and label shown on the toggle control.
///
/// Both describe the action the control performs, i.e. the *other* theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleCopy {
    pub icon: &'static str,
    pub label: &'static str,
}

#[must_use]
pub fn toggle_copy(active: Theme) -> ToggleCopy {
    match active {
        Theme::Dark => ToggleCopy { icon: SUN_ICON, label: LIGHT_MODE_LABEL },
        Theme::Light => ToggleCopy { icon: MOON_ICON, label: DARK_MODE_LABEL },
    }
}

/// Resolve the theme to start with.
///
/// A valid stored value is returned as-is; anything else falls back to the
/// OS color-scheme preference.
#[must_use]
pub fn preferred_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Key-value store holding the preference (`localStorage` in the browser).
pub trait PreferenceStore {
    /// Read `key`. Unreadable storage reads as `None`.
    fn load(&self, key: &str) -> Option<String>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Owns the current theme and keeps the store in sync with it.
pub struct ThemeManager<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Resolve the starting theme from `store`, falling back to `prefers_dark`.
    pub fn new(store: S, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let stored = store.load(&key);
        let current = preferred_theme(stored.as_deref(), prefers_dark);
        Self { store, key, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Make `theme` current and persist it. Returns the toggle copy to render.
    pub fn apply(&mut self, theme: Theme) -> ToggleCopy {
        self.current = theme;
        if let Err(err) = self.store.save(&self.key, theme.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
        toggle_copy(theme)
    }

    /// Flip to the other theme and apply it.
    pub fn toggle(&mut self) -> (Theme, ToggleCopy) {
        let next = self.current.toggled();
        (next, self.apply(next))
    }
}
