//! Light/dark theme toggle.
//!
//! The toggle owns the current theme, the persisted store, and the class
//! list of the document root. Every change is applied immediately: the
//! store is written and the dark class added or removed.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::store::{StoreError, ThemeStore};

/// Key the theme is persisted under.
pub const THEME_KEY: &str = "theme";

/// Default class marking the dark theme on the document root.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
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
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// What the environment reports for `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorSchemePreference {
    Light,
    Dark,
    /// The environment cannot answer the query.
    #[default]
    Unsupported,
}

/// Class list of the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(BTreeSet<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.0.remove(class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Pick the theme to start with.
///
/// A valid persisted value wins; otherwise a dark preference gives dark and
/// everything else gives light.
pub fn initial_theme(store: &impl ThemeStore, preference: ColorSchemePreference) -> Theme {
    if let Some(stored) = store.get(THEME_KEY) {
        match stored.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(_) => tracing::warn!(value = %stored, "ignoring unknown stored theme"),
        }
    }

    match preference {
        ColorSchemePreference::Dark => Theme::Dark,
        ColorSchemePreference::Light | ColorSchemePreference::Unsupported => Theme::Light,
    }
}

/// Theme state bound to a store and the root class list.
#[derive(Debug)]
pub struct ThemeToggle<S: ThemeStore> {
    theme: Theme,
    store: S,
    root: ClassList,
    dark_class: String,
}

impl<S: ThemeStore> ThemeToggle<S> {
    /// Initialize from the store and preference and apply the result.
    pub fn new(store: S, preference: ColorSchemePreference) -> Result<Self, StoreError> {
        Self::with_dark_class(store, preference, DARK_CLASS)
    }

    /// Like [`ThemeToggle::new`] with a custom dark class.
    pub fn with_dark_class(
        store: S,
        preference: ColorSchemePreference,
        dark_class: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let theme = initial_theme(&store, preference);
        let mut toggle = Self {
            theme,
            store,
            root: ClassList::new(),
            dark_class: dark_class.into(),
        };
        toggle.set(theme)?;
        Ok(toggle)
    }

    /// Flip between light and dark.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        self.set(self.theme.toggled())?;
        Ok(self.theme)
    }

    /// Switch to a specific theme.
    ///
    /// The store is written first; on failure the theme and class list keep
    /// their previous state.
    pub fn set(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, theme.as_str())?;

        self.theme = theme;
        match theme {
            Theme::Light => self.root.remove(&self.dark_class),
            Theme::Dark => self.root.add(&self.dark_class),
        }
        tracing::debug!(theme = %theme, "applied theme");
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn root(&self) -> &ClassList {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
