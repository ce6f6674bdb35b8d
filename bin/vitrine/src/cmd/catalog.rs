//! Catalog command - list every content item in catalog order

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use vitrine_core::ContentKind;
use vitrine_nav::{ContentCatalog, FsContentSource};

use super::Site;

/// Run the catalog command.
pub fn run(config_path: &Path, kind: Option<ContentKind>, json: bool) -> Result<()> {
    let site = Site::load(config_path)?;
    tracing::info!(content_dir = %site.content_dir.display(), ?kind, "building catalog");

    let catalog = ContentCatalog::build(&FsContentSource::new(&site.content_dir))
        .wrap_err("Failed to build content catalog")?;

    let items: Vec<_> = match kind {
        Some(kind) => catalog.of_kind(kind).collect(),
        None => catalog.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    for item in &items {
        match item.navigation_title.as_deref().filter(|t| !t.is_empty()) {
            Some(nav) => println!("{:<10} {:<30} {} ({nav})", item.kind, item.slug, item.title),
            None => println!("{:<10} {:<30} {}", item.kind, item.slug, item.title),
        }
    }
    println!();
    println!("{} item(s)", items.len());

    let ambiguous = catalog.ambiguous_slugs();
    if !ambiguous.is_empty() {
        println!("  ⚠ slugs shared across collections: {}", ambiguous.join(", "));
    }

    Ok(())
}
