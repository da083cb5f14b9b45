//! Light/dark theme preference.
//!
//! The preference is read once at startup through a [`PreferenceStore`] and
//! written back on every toggle. Nothing but an explicit toggle changes it;
//! the OS color-scheme preference is never consulted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::THEME_STORAGE_KEY;
use crate::error::StorageError;
use crate::storage::PreferenceStore;

/// Class on `<body>` that switches the stylesheet to dark colors.
pub const DARK_CLASS: &str = "dark-mode";

/// The two page themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Returned when a stored string names no theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl Theme {
    /// Storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon shown on the toggle: the theme the user can switch to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }

    /// Resolve a stored value; anything absent or unrecognized is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::parse::<Self>) {
            Some(Ok(theme)) => theme,
            _ => Self::default(),
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme plus the store it is persisted to.
#[derive(Debug)]
pub struct ThemeController<S> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Load the persisted theme from `store`, defaulting to light.
    ///
    /// An unreadable store is treated as empty.
    pub fn load(store: S) -> Self {
        let stored = match store.load(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("{e}; defaulting to light theme");
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        log::debug!("restored theme {theme}");
        Self { theme, store }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the theme and persist it.
    ///
    /// The in-memory theme flips even when persisting fails, so the page
    /// never stops responding to the toggle.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] if the new value could not be saved.
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        self.theme = self.theme.toggled();
        self.store.save(THEME_STORAGE_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }
}
