//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    environment::Mode,
    error::{CoreError, Result},
};

/// Prefix for environment overrides (`VITRINE_SITE__NAME`).
pub const ENV_PREFIX: &str = "VITRINE";

/// Main configuration structure for Vitrine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Content location.
    #[serde(default)]
    pub content: ContentConfig,

    /// Hosted studio settings.
    #[serde(default)]
    pub studio: StudioConfig,

    /// Theme toggle settings.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand name shown in the editor.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Public base URL of the site.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Content location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding one folder per collection plus `navigation/`.
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,
}

/// Hosted document-store studio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Route the studio is mounted at.
    #[serde(default = "default_studio_base_path")]
    pub base_path: String,

    /// Studio title.
    #[serde(default = "default_site_name")]
    pub title: String,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub dataset: Option<String>,

    /// Enabled studio tools.
    #[serde(default = "default_studio_tools")]
    pub tools: Vec<String>,
}

/// Theme toggle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Class toggled on the document root for the dark theme.
    #[serde(default = "default_dark_class")]
    pub dark_class: String,

    /// File the CLI persists theme state in.
    #[serde(default = "default_theme_store")]
    pub store: PathBuf,
}

/// Tool only available while developing.
pub const DEV_ONLY_TOOL: &str = "vision";

/// Editor sidebar group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationGroup {
    pub label: &'static str,
    pub entries: &'static [&'static str],
}

/// Sidebar groups: settings singletons first, then the collections.
pub const EDITOR_NAVIGATION: &[NavigationGroup] = &[
    NavigationGroup {
        label: "Settings",
        entries: &["navigation"],
    },
    NavigationGroup {
        label: "Content",
        entries: &["pages", "posts", "glasstypes"],
    },
];

fn default_site_name() -> String {
    "glass.no".to_string()
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("src/content")
}

fn default_studio_base_path() -> String {
    "/studio".to_string()
}

fn default_studio_tools() -> Vec<String> {
    vec!["desk".to_string(), "media".to_string(), DEV_ONLY_TOOL.to_string()]
}

fn default_dark_class() -> String {
    "dark".to_string()
}

fn default_theme_store() -> PathBuf {
    PathBuf::from(".vitrine/theme.json")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: None,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
        }
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            base_path: default_studio_base_path(),
            title: default_site_name(),
            project_id: None,
            dataset: None,
            tools: default_studio_tools(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark_class: default_dark_class(),
            store: default_theme_store(),
        }
    }
}

impl StudioConfig {
    /// Tools to expose in the given mode; dev-only tools are dropped in
    /// production.
    pub fn tools(&self, mode: Mode) -> Vec<&str> {
        self.tools
            .iter()
            .map(String::as_str)
            .filter(|tool| mode == Mode::Development || *tool != DEV_ONLY_TOOL)
            .collect()
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), site = %config.site.name, "loaded configuration");
        Ok(config)
    }

    /// Load configuration layered with `VITRINE_*` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        Self::load_layered(path, Self::env_source())
    }

    /// Like [`Config::load_with_env`], but a missing file means defaults.
    ///
    /// Environment overrides apply either way.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no configuration file, using defaults");
        }
        Self::load_layered(path, Self::env_source())
    }

    fn env_source() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn load_layered(path: &Path, env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(env)
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(CoreError::config("site.name cannot be empty"));
        }

        if self.content.dir.as_os_str().is_empty() {
            return Err(CoreError::config("content.dir cannot be empty"));
        }

        if self.theme.dark_class.trim().is_empty() {
            return Err(CoreError::config("theme.dark_class cannot be empty"));
        }

        if !self.studio.base_path.starts_with('/') {
            tracing::warn!(
                base_path = %self.studio.base_path,
                "studio.base_path should start with a slash"
            );
        }

        Ok(())
    }

    /// Resolve the content directory against the configuration file location.
    pub fn content_dir(&self, config_path: &Path) -> PathBuf {
        if self.content.dir.is_absolute() {
            return self.content.dir.clone();
        }
        config_path
            .parent()
            .map(|parent| parent.join(&self.content.dir))
            .unwrap_or_else(|| self.content.dir.clone())
    }
}
