//! Menu command - print the navigation menu with resolved labels

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use vitrine_nav::{
    ContentCatalog, FsContentSource, NavigationDocument, ResolvedMenu, resolve_menu,
};

use super::Site;

/// Run the menu command.
pub fn run(config_path: &Path, json: bool) -> Result<()> {
    let site = Site::load(config_path)?;

    let catalog = ContentCatalog::build(&FsContentSource::new(&site.content_dir))
        .wrap_err("Failed to build content catalog")?;
    let document = NavigationDocument::load_or_default(&site.content_dir)
        .wrap_err("Failed to load navigation")?;

    let menu = resolve_menu(&document, &catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&menu)?);
    } else {
        print!("{}", render_tree(&menu));
    }

    Ok(())
}

/// Render the menu as an indented tree. Unresolved entries are marked.
pub fn render_tree(menu: &ResolvedMenu) -> String {
    let mut out = format!("{}\n", menu.name);
    for (i, item) in menu.items.iter().enumerate() {
        let last = i + 1 == menu.items.len();
        let marker = if item.found { "" } else { " (missing)" };
        out.push_str(&format!(
            "{} {} → {}{marker}\n",
            if last { "└─" } else { "├─" },
            item.label,
            item.href
        ));

        for (j, child) in item.children.iter().enumerate() {
            let child_marker = if child.found { "" } else { " (missing)" };
            out.push_str(&format!(
                "{}  {} {} → {}{child_marker}\n",
                if last { " " } else { "│" },
                if j + 1 == item.children.len() { "└─" } else { "├─" },
                child.label,
                child.href
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use vitrine_core::{ContentItem, ContentKind};
    use vitrine_nav::{MenuEntry, MenuItemRef};

    use super::*;

    #[test]
    fn test_render_tree() {
        let catalog = ContentCatalog::from_items(vec![
            ContentItem::new(ContentKind::Page, "vinduer", "Vinduer")
                .with_navigation_title("Vinduer"),
            ContentItem::new(ContentKind::GlassType, "herdet", "Herdet"),
        ]);
        let mut doc = NavigationDocument::default();
        doc.push_entry(
            MenuEntry::new(MenuItemRef::page("vinduer"))
                .with_child(MenuItemRef::glass_type("herdet")),
        );
        doc.push_entry(MenuEntry::new(MenuItemRef::post("borte")));

        let tree = render_tree(&resolve_menu(&doc, &catalog));
        let expected = "navigation\n\
├─ Vinduer → /produkter/vinduer\n\
│  └─ Herdet → /glasstypes/herdet\n\
└─ borte → /posts/borte (missing)\n";
        assert_eq!(tree, expected);
    }
}
