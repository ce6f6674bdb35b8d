//! The navigation singleton: an ordered list of menu entries, each pointing
//! at one content item and optionally owning one level of submenu entries.
//!
//! Depth is capped by shape: [`MenuEntry`] owns [`SubmenuEntry`] values, and
//! a submenu entry has no `children` field at all. A stored document that
//! nests deeper fails to parse.

use std::{
    borrow::Cow,
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use vitrine_core::{ContentKind, content};

use crate::error::{NavError, Result};

/// Directory of the singleton, relative to the content directory.
pub const NAVIGATION_DIR: &str = "navigation";

/// File names tried, in order, when loading the singleton.
const SINGLETON_FILES: &[&str] = &["index.yaml", "index.yml", "index.json"];

/// Pointer to one content item by kind and slug.
///
/// Stored as `{ discriminant: page, value: home }`. An unset relationship
/// (`value: null`) reads as an empty slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StoredItemRef", into = "StoredItemRef")]
pub struct MenuItemRef {
    pub kind: ContentKind,
    pub slug: String,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "discriminant", content = "value", rename_all = "lowercase")]
enum StoredItemRef {
    Page(Option<String>),
    Post(Option<String>),
    #[serde(rename = "glasstype")]
    GlassType(Option<String>),
}

impl From<StoredItemRef> for MenuItemRef {
    fn from(stored: StoredItemRef) -> Self {
        let (kind, slug) = match stored {
            StoredItemRef::Page(slug) => (ContentKind::Page, slug),
            StoredItemRef::Post(slug) => (ContentKind::Post, slug),
            StoredItemRef::GlassType(slug) => (ContentKind::GlassType, slug),
        };
        Self {
            kind,
            slug: slug.unwrap_or_default(),
        }
    }
}

impl From<MenuItemRef> for StoredItemRef {
    fn from(item: MenuItemRef) -> Self {
        let slug = (!item.slug.is_empty()).then_some(item.slug);
        match item.kind {
            ContentKind::Page => Self::Page(slug),
            ContentKind::Post => Self::Post(slug),
            ContentKind::GlassType => Self::GlassType(slug),
        }
    }
}

impl MenuItemRef {
    pub fn new(kind: ContentKind, slug: impl Into<String>) -> Self {
        Self {
            kind,
            slug: slug.into(),
        }
    }

    pub fn page(slug: impl Into<String>) -> Self {
        Self::new(ContentKind::Page, slug)
    }

    pub fn post(slug: impl Into<String>) -> Self {
        Self::new(ContentKind::Post, slug)
    }

    pub fn glass_type(slug: impl Into<String>) -> Self {
        Self::new(ContentKind::GlassType, slug)
    }

    /// Whether the editor has not picked an item yet.
    pub fn is_unset(&self) -> bool {
        self.slug.is_empty()
    }
}

impl fmt::Display for MenuItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.slug)
    }
}

/// Top-level menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub item: MenuItemRef,
    #[serde(default)]
    pub children: Vec<SubmenuEntry>,
}

/// Submenu entry. Has no children of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmenuEntry {
    pub item: MenuItemRef,
}

impl MenuEntry {
    pub fn new(item: MenuItemRef) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, item: MenuItemRef) -> Self {
        self.children.push(SubmenuEntry { item });
        self
    }
}

/// The `name` slug field: a display name plus its slug.
///
/// Accepts either `name: Main` or `name: { name: Main, slug: main }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlugField {
    Full { name: String, slug: String },
    Plain(String),
}

impl SlugField {
    pub fn name(&self) -> &str {
        match self {
            Self::Full { name, .. } | Self::Plain(name) => name,
        }
    }

    /// Stored slug, or one derived from the name.
    pub fn slug(&self) -> Cow<'_, str> {
        match self {
            Self::Full { slug, .. } => Cow::Borrowed(slug),
            Self::Plain(name) => Cow::Owned(content::slugify(name)),
        }
    }
}

impl Default for SlugField {
    fn default() -> Self {
        Self::Plain(NAVIGATION_DIR.to_string())
    }
}

/// Location of a reference inside the menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPosition {
    pub index: usize,
    pub child: Option<usize>,
}

impl fmt::Display for MenuPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menuItems[{}]", self.index)?;
        if let Some(child) = self.child {
            write!(f, ".children[{child}]")?;
        }
        Ok(())
    }
}

/// A problem that makes the singleton invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// `name` is empty.
    EmptyName,
    /// `name`'s slug is not lowercase alphanumerics separated by dashes.
    SlugNotSafe(String),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("name must not be empty"),
            Self::SlugNotSafe(slug) => write!(f, "name slug `{slug}` is not slug-safe"),
        }
    }
}

/// The navigation singleton.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationDocument {
    pub name: SlugField,
    #[serde(default)]
    pub menu_items: Vec<MenuEntry>,
}

impl NavigationDocument {
    /// Parse from YAML.
    pub fn from_yaml_str(s: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| NavError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse from JSON.
    pub fn from_json_str(s: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| NavError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Path of the existing singleton file, if any.
    pub fn find(content_dir: &Path) -> Option<PathBuf> {
        let dir = content_dir.join(NAVIGATION_DIR);
        SINGLETON_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load the singleton from the content directory.
    pub fn load(content_dir: &Path) -> Result<Self> {
        let path = Self::find(content_dir)
            .ok_or_else(|| NavError::MissingSingleton(content_dir.join(NAVIGATION_DIR)))?;
        tracing::debug!(path = %path.display(), "loading navigation");

        let raw = fs::read_to_string(&path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&raw, &path)
        } else {
            Self::from_yaml_str(&raw, &path)
        }
    }

    /// Load the singleton, or an empty one if it has not been created yet.
    pub fn load_or_default(content_dir: &Path) -> Result<Self> {
        match Self::load(content_dir) {
            Err(NavError::MissingSingleton(dir)) => {
                tracing::info!(
                    dir = %dir.display(),
                    "navigation not initialized, using empty menu"
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Collect every shape problem.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.name.name().trim().is_empty() {
            issues.push(ValidationIssue::EmptyName);
            return issues;
        }

        let slug = self.name.slug();
        if !content::is_slug_safe(&slug) {
            issues.push(ValidationIssue::SlugNotSafe(slug.into_owned()));
        }

        issues
    }

    /// Fail with every issue if the document is invalid.
    pub fn ensure_valid(&self) -> Result<()> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(NavError::Invalid(issues))
        }
    }

    /// Every reference in tree order with its position.
    pub fn references(&self) -> impl Iterator<Item = (MenuPosition, &MenuItemRef)> {
        self.menu_items.iter().enumerate().flat_map(|(index, entry)| {
            let root = std::iter::once((MenuPosition { index, child: None }, &entry.item));
            let children = entry.children.iter().enumerate().map(move |(child, sub)| {
                (
                    MenuPosition {
                        index,
                        child: Some(child),
                    },
                    &sub.item,
                )
            });
            root.chain(children)
        })
    }

    /// Append a root entry.
    pub fn push_entry(&mut self, entry: MenuEntry) {
        self.menu_items.push(entry);
    }
}
