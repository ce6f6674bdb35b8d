//! Theme command - show or flip the persisted theme

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use vitrine_ui::{ColorSchemePreference, FileThemeStore, Theme, ThemeToggle};

use super::Site;

/// Requested theme change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(Theme),
}

/// Run the theme command.
pub fn run(config_path: &Path, action: ThemeAction, prefers_dark: bool) -> Result<()> {
    let site = Site::load(config_path)?;
    let preference = if prefers_dark {
        ColorSchemePreference::Dark
    } else {
        ColorSchemePreference::Unsupported
    };

    let theme = apply(&site, action, preference)?;
    println!("{theme}");
    Ok(())
}

/// Initialize the toggle from the store and apply the action.
pub fn apply(
    site: &Site,
    action: ThemeAction,
    preference: ColorSchemePreference,
) -> Result<Theme> {
    let path = site.resolve(&site.config.theme.store);
    let store = FileThemeStore::open(&path)
        .wrap_err_with(|| format!("Failed to open theme store {}", path.display()))?;

    let mut toggle =
        ThemeToggle::with_dark_class(store, preference, site.config.theme.dark_class.as_str())
            .wrap_err("Failed to persist theme")?;

    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            toggle.toggle().wrap_err("Failed to persist theme")?;
        }
        ThemeAction::Set(theme) => toggle.set(theme).wrap_err("Failed to persist theme")?,
    }

    tracing::info!(theme = %toggle.theme(), store = %path.display(), "theme applied");
    Ok(toggle.theme())
}

#[cfg(test)]
mod tests {
    use vitrine_core::Config;
    use vitrine_ui::{THEME_KEY, ThemeStore};

    use super::*;

    fn site_at(dir: &Path) -> Site {
        Site {
            config: Config::default(),
            root: dir.to_path_buf(),
            content_dir: dir.join("src/content"),
        }
    }

    #[test]
    fn test_toggle_persists_between_runs() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let site = site_at(dir.path());

        let first = apply(&site, ThemeAction::Show, ColorSchemePreference::Light).expect("show");
        assert_eq!(first, Theme::Light);

        let toggled =
            apply(&site, ThemeAction::Toggle, ColorSchemePreference::Light).expect("toggle");
        assert_eq!(toggled, Theme::Dark);

        // stored value wins over the preference on the next run
        let again = apply(&site, ThemeAction::Show, ColorSchemePreference::Light).expect("show");
        assert_eq!(again, Theme::Dark);

        let store = FileThemeStore::open(dir.path().join(".vitrine/theme.json")).expect("open");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_set_theme() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let site = site_at(dir.path());

        let theme = apply(
            &site,
            ThemeAction::Set(Theme::Light),
            ColorSchemePreference::Dark,
        )
        .expect("set");
        assert_eq!(theme, Theme::Light);
    }
}
