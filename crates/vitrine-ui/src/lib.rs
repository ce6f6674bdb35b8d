//! Vitrine UI Library
//!
//! Client-side state for the site chrome.
//!
//! # Modules
//!
//! - [`theme`] - Light/dark theme toggle
//! - [`store`] - Persisted key/value stores backing the toggle

pub mod store;
pub mod theme;

pub use store::{FileThemeStore, MemoryThemeStore, StoreError, ThemeStore};
pub use theme::{ClassList, ColorSchemePreference, THEME_KEY, Theme, ThemeToggle};
