//! Storage command - report the editor backend for the current environment

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use vitrine_core::{ContentKind, Mode, RuntimeEnv, StorageBackend, config::EDITOR_NAVIGATION};

use super::Site;

/// Branch shown in preview URL templates.
const PREVIEW_BRANCH: &str = "main";

/// Run the storage command.
pub fn run(config_path: &Path) -> Result<()> {
    let site = Site::load(config_path)?;
    let env = RuntimeEnv::from_process();

    print!("{}", describe(&site, &env)?);
    Ok(())
}

/// Describe the editor setup for an environment.
///
/// Fails when production is missing its repository variables.
pub fn describe(site: &Site, env: &RuntimeEnv) -> Result<String> {
    let mode = env.mode();
    let backend = StorageBackend::select(env).wrap_err("Failed to select storage backend")?;
    tracing::info!(?mode, %backend, "selected storage backend");

    let studio = &site.config.studio;
    let mut out = String::new();
    out.push_str(&format!("Brand:   {}\n", site.config.site.name));
    out.push_str(&format!(
        "Mode:    {}\n",
        match mode {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    ));
    out.push_str(&format!("Storage: {backend}\n"));
    if backend.is_local() {
        out.push_str(&format!("Local:   {}\n", site.content_dir.display()));
    }
    out.push_str(&format!(
        "Studio:  {} [{}]\n",
        studio.base_path,
        studio.tools(mode).join(", ")
    ));
    out.push_str("Editor navigation:\n");
    for group in EDITOR_NAVIGATION {
        out.push_str(&format!("  {}: {}\n", group.label, group.entries.join(", ")));
    }
    out.push_str("Collections:\n");
    for kind in ContentKind::ALL {
        let schema = kind.schema();
        out.push_str(&format!(
            "  {:<12} {:<28} preview {}\n",
            schema.label,
            schema.path,
            schema.preview_url(PREVIEW_BRANCH, "{slug}")
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use vitrine_core::Config;

    use super::*;

    fn site() -> Site {
        Site {
            config: Config::default(),
            root: Default::default(),
            content_dir: "src/content".into(),
        }
    }

    #[test]
    fn test_describe_development() {
        let out = describe(&site(), &RuntimeEnv::development()).expect("describe");
        assert!(out.contains("Mode:    development"));
        assert!(out.contains("Storage: local"));
        assert!(out.contains("Local:   src/content"));
        assert!(out.contains("preview /preview/start?branch=main&to=/glasstypes/{slug}"));
        assert!(out.contains("[desk, media, vision]"));
        assert!(out.contains("Settings: navigation"));
        assert!(out.contains("Content: pages, posts, glasstypes"));
    }

    #[test]
    fn test_describe_production() {
        let env = RuntimeEnv::production("glass-no", "site");
        let out = describe(&site(), &env).expect("describe");
        assert!(out.contains("Storage: github:glass-no/site"));
        assert!(!out.contains("Local:"));
        assert!(out.contains("[desk, media]"));
    }

    #[test]
    fn test_describe_production_without_repo_fails() {
        let env = RuntimeEnv::from_lookup(|_| None);
        assert!(describe(&site(), &env).is_err());
    }
}
