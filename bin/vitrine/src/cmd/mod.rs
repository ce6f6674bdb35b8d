//! Command implementations.

pub mod catalog;
pub mod check;
pub mod menu;
pub mod storage;
pub mod theme;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use vitrine_core::Config;

/// Configuration plus the paths derived from its location.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: Config,
    pub root: PathBuf,
    pub content_dir: PathBuf,
}

impl Site {
    /// Load the configuration (defaults if the file is absent).
    pub fn load(config_path: &Path) -> Result<Self> {
        let config =
            Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let content_dir = config.content_dir(config_path);
        tracing::debug!(content_dir = %content_dir.display(), "resolved site paths");

        Ok(Self {
            config,
            root,
            content_dir,
        })
    }

    /// Resolve a configured path against the configuration directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
