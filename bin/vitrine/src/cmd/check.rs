//! Check command - validate configuration, content, and navigation

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use vitrine_core::ContentKind;
use vitrine_nav::{
    ContentCatalog, FsContentSource, NavError, NavigationDocument, reference_issues,
};

use super::Site;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    println!("Checking configuration...");
    let site = match Site::load(config_path) {
        Ok(site) => {
            println!("  ✓ Configuration valid");
            site
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e:#}");
            bail!("Validation failed: configuration is invalid");
        }
    };

    let result = validate_site(&site);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate every collection and the navigation singleton.
pub fn validate_site(site: &Site) -> ValidationResult {
    let mut result = ValidationResult::default();
    let source = FsContentSource::new(&site.content_dir);

    if !site.content_dir.is_dir() {
        result.add_warning(format!(
            "Content directory does not exist: {}",
            site.content_dir.display()
        ));
    }

    let mut items = Vec::new();
    for kind in ContentKind::ALL {
        match source.load_entries(kind) {
            Ok(entries) => {
                tracing::debug!(collection = kind.collection(), count = entries.len(), "checked");
                items.extend(entries.iter().map(|entry| entry.to_item()));
            }
            Err(e) => result.add_error(e.to_string()),
        }
    }
    let catalog = ContentCatalog::from_items(items);

    for slug in catalog.ambiguous_slugs() {
        result.add_warning(format!(
            "Slug `{slug}` is used by more than one collection; menu lookups take the first"
        ));
    }

    match NavigationDocument::load(&site.content_dir) {
        Ok(document) => {
            for issue in document.validate() {
                result.add_error(format!("navigation: {issue}"));
            }
            for issue in reference_issues(&document, &catalog) {
                result.add_warning(format!("navigation: {issue}"));
            }
        }
        Err(NavError::MissingSingleton(dir)) => {
            result.add_warning(format!("No navigation singleton in {}", dir.display()));
        }
        Err(e) => result.add_error(e.to_string()),
    }

    result
}

#[cfg(test)]
mod tests {
    use std::fs;

    use vitrine_core::Config;

    use super::*;

    fn site_at(dir: &Path) -> Site {
        Site {
            config: Config::default(),
            root: dir.to_path_buf(),
            content_dir: dir.to_path_buf(),
        }
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, content).expect("write");
    }

    #[test]
    fn test_clean_site_passes() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "pages/om.mdx", "---\ntitle: Om oss\n---\n");
        write(
            dir.path(),
            "navigation/index.yaml",
            "name: Main\nmenuItems:\n  - item: { discriminant: page, value: om }\n",
        );

        let result = validate_site(&site_at(dir.path()));
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(!result.has_warnings(), "{:?}", result.warnings);
    }

    #[test]
    fn test_dangling_reference_is_warning() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "pages/om.mdx", "---\ntitle: Om oss\n---\n");
        write(
            dir.path(),
            "navigation/index.yaml",
            "name: Main\nmenuItems:\n  - item: { discriminant: post, value: borte }\n",
        );

        let result = validate_site(&site_at(dir.path()));
        assert!(!result.has_errors());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("post:borte"));
    }

    #[test]
    fn test_invalid_entry_is_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "posts/tom.mdx", "---\ndescription: no title\n---\n");

        let result = validate_site(&site_at(dir.path()));
        assert_eq!(result.errors.len(), 1);
        // navigation singleton is missing
        assert!(result.has_warnings());
    }

    #[test]
    fn test_shared_slug_is_warning() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "pages/herdet.mdx", "---\ntitle: Herdet\n---\n");
        write(dir.path(), "glasstypes/herdet.mdx", "---\ntitle: Herdet glass\n---\n");
        write(dir.path(), "navigation/index.yaml", "name: Main\nmenuItems: []\n");

        let result = validate_site(&site_at(dir.path()));
        assert!(result.warnings.iter().any(|w| w.contains("`herdet`")));
    }
}
