//! Menu label resolution.
//!
//! Lookups go by slug alone, in catalog order, and never fail: a reference
//! that matches nothing is labelled with its own slug.

use std::fmt;

use serde::Serialize;
use vitrine_core::{ContentItem, ContentKind};

use crate::{
    catalog::ContentCatalog,
    navigation::{MenuItemRef, MenuPosition, NavigationDocument},
};

/// Which field of the matched item becomes the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelField {
    Title,
    NavigationTitle,
}

impl LabelField {
    fn read(self, item: &ContentItem) -> Option<&str> {
        match self {
            Self::Title => Some(item.title.as_str()),
            Self::NavigationTitle => item.navigation_title.as_deref(),
        }
    }
}

/// Resolve the display label for a menu reference.
pub fn resolve_label(item: &MenuItemRef, catalog: &ContentCatalog, field: LabelField) -> String {
    catalog
        .find_by_slug(&item.slug)
        .and_then(|found| field.read(found))
        .filter(|label| !label.is_empty())
        .unwrap_or(item.slug.as_str())
        .to_string()
}

/// A menu entry with its label and link resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMenuItem {
    pub label: String,
    pub kind: ContentKind,
    pub slug: String,
    pub href: String,
    /// Whether the slug matched a catalog item.
    pub found: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResolvedMenuItem>,
}

/// The navigation singleton with every label resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMenu {
    pub name: String,
    pub items: Vec<ResolvedMenuItem>,
}

fn resolve_item(
    item: &MenuItemRef,
    catalog: &ContentCatalog,
    field: LabelField,
) -> ResolvedMenuItem {
    ResolvedMenuItem {
        label: resolve_label(item, catalog, field),
        kind: item.kind,
        slug: item.slug.clone(),
        href: item.kind.url_path(&item.slug),
        found: catalog.find_by_slug(&item.slug).is_some(),
        children: Vec::new(),
    }
}

/// Resolve the whole menu tree.
///
/// Root entries use the navigation title, submenu entries the plain title.
pub fn resolve_menu(document: &NavigationDocument, catalog: &ContentCatalog) -> ResolvedMenu {
    let items = document
        .menu_items
        .iter()
        .map(|entry| {
            let mut resolved = resolve_item(&entry.item, catalog, LabelField::NavigationTitle);
            resolved.children = entry
                .children
                .iter()
                .map(|child| resolve_item(&child.item, catalog, LabelField::Title))
                .collect();
            resolved
        })
        .collect();

    ResolvedMenu {
        name: document.name.name().to_string(),
        items,
    }
}

/// Non-fatal reference problem, reported by `check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceIssue {
    /// No item has been picked.
    Unset { position: MenuPosition },
    /// The slug matches nothing in the catalog.
    Dangling {
        position: MenuPosition,
        item: MenuItemRef,
    },
    /// The slug resolves, but to an item of another collection.
    KindMismatch {
        position: MenuPosition,
        item: MenuItemRef,
        resolved: ContentKind,
    },
}

impl fmt::Display for ReferenceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset { position } => write!(f, "{position}: no item selected"),
            Self::Dangling { position, item } => {
                write!(f, "{position}: `{item}` does not match any content")
            }
            Self::KindMismatch {
                position,
                item,
                resolved,
            } => write!(
                f,
                "{position}: `{item}` resolves to a {resolved} with the same slug"
            ),
        }
    }
}

/// Find references that would show a fallback or a wrong label.
pub fn reference_issues(
    document: &NavigationDocument,
    catalog: &ContentCatalog,
) -> Vec<ReferenceIssue> {
    document
        .references()
        .filter_map(|(position, item)| {
            if item.is_unset() {
                return Some(ReferenceIssue::Unset { position });
            }
            match catalog.find_by_slug(&item.slug) {
                None => Some(ReferenceIssue::Dangling {
                    position,
                    item: item.clone(),
                }),
                Some(found) if found.kind != item.kind => Some(ReferenceIssue::KindMismatch {
                    position,
                    item: item.clone(),
                    resolved: found.kind,
                }),
                Some(_) => None,
            }
        })
        .collect()
}
