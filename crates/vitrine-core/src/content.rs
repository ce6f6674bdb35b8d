//! Content kinds, collection schemas, and loaded entries.

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::frontmatter::EntryFrontmatter;

/// The three content collections the site is built from.
///
/// Declaration order is catalog order: pages, then posts, then glass types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Product and information pages.
    Page,
    /// News posts.
    Post,
    /// Glass type entries.
    #[serde(rename = "glasstype")]
    GlassType,
}

impl ContentKind {
    /// All kinds in catalog order.
    pub const ALL: [ContentKind; 3] = [Self::Page, Self::Post, Self::GlassType];

    /// Identifier used in menu references (`page`, `post`, `glasstype`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Post => "post",
            Self::GlassType => "glasstype",
        }
    }

    /// Name of the backing collection.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Page => "pages",
            Self::Post => "posts",
            Self::GlassType => "glasstypes",
        }
    }

    /// Human-readable label used in the editor.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Page => "Page",
            Self::Post => "Post",
            Self::GlassType => "Glass Type",
        }
    }

    /// Public URL prefix for entries of this kind.
    pub fn url_prefix(&self) -> &'static str {
        match self {
            Self::Page => "/produkter",
            Self::Post => "/posts",
            Self::GlassType => "/glasstypes",
        }
    }

    /// Public URL path for an entry of this kind.
    pub fn url_path(&self, slug: &str) -> String {
        format!("{}/{slug}", self.url_prefix())
    }

    /// Static collection schema for this kind.
    pub fn schema(&self) -> &'static CollectionSchema {
        match self {
            Self::Page => &PAGES,
            Self::Post => &POSTS,
            Self::GlassType => &GLASSTYPES,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" | "pages" => Ok(Self::Page),
            "post" | "posts" => Ok(Self::Post),
            "glasstype" | "glasstypes" => Ok(Self::GlassType),
            other => Err(format!("unknown content kind: {other}")),
        }
    }
}

/// Declarative description of a content collection as the editor sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSchema {
    /// Collection label in the editor sidebar.
    pub label: &'static str,
    /// Glob of entry files relative to the project root.
    pub path: &'static str,
    /// Columns shown in the entry list.
    pub columns: &'static [&'static str],
    /// Field holding the rich content body.
    pub content_field: &'static str,
    /// Directory where inline images are stored.
    pub image_directory: &'static str,
    /// Preview URL template with `{branch}` and `{slug}` placeholders.
    pub preview_url: &'static str,
}

const LIST_COLUMNS: &[&str] = &["title", "updatedAt"];

static PAGES: CollectionSchema = CollectionSchema {
    label: "Pages",
    path: "src/content/pages/*",
    columns: LIST_COLUMNS,
    content_field: "content",
    image_directory: "src/assets/images/pages",
    preview_url: "/preview/start?branch={branch}&to=/produkter/{slug}",
};

static POSTS: CollectionSchema = CollectionSchema {
    label: "Posts",
    path: "src/content/posts/*",
    columns: LIST_COLUMNS,
    content_field: "content",
    image_directory: "src/assets/images/posts",
    preview_url: "/preview/start?branch={branch}&to=/posts/{slug}",
};

static GLASSTYPES: CollectionSchema = CollectionSchema {
    label: "Glass types",
    path: "src/content/glasstypes/*",
    columns: LIST_COLUMNS,
    content_field: "content",
    image_directory: "src/assets/images/glasstypes",
    preview_url: "/preview/start?branch={branch}&to=/glasstypes/{slug}",
};

impl CollectionSchema {
    /// Fill the preview URL template for a branch and entry slug.
    pub fn preview_url(&self, branch: &str, slug: &str) -> String {
        self.preview_url
            .replace("{branch}", branch)
            .replace("{slug}", slug)
    }
}

/// The part of an entry that navigation cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Collection the item came from.
    pub kind: ContentKind,
    /// Identity within the collection.
    pub slug: String,
    /// Entry title.
    pub title: String,
    /// Optional label override for menus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_title: Option<String>,
}

impl ContentItem {
    /// Create an item without a navigation title.
    pub fn new(kind: ContentKind, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind,
            slug: slug.into(),
            title: title.into(),
            navigation_title: None,
        }
    }

    /// Set the navigation title override.
    #[must_use]
    pub fn with_navigation_title(mut self, navigation_title: impl Into<String>) -> Self {
        self.navigation_title = Some(navigation_title.into());
        self
    }
}

/// A fully loaded collection entry.
#[derive(Debug, Clone)]
pub struct ContentEntry {
    /// Collection the entry belongs to.
    pub kind: ContentKind,
    /// Slug taken from the file stem.
    pub slug: String,
    /// Parsed frontmatter.
    pub frontmatter: EntryFrontmatter,
    /// Raw rich-text body, unrendered.
    pub body: String,
    /// File the entry was read from.
    pub source_path: PathBuf,
}

impl ContentEntry {
    /// Project this entry down to the fields navigation reads.
    pub fn to_item(&self) -> ContentItem {
        ContentItem {
            kind: self.kind,
            slug: self.slug.clone(),
            title: self.frontmatter.title.clone(),
            navigation_title: self.frontmatter.navigation_title.clone(),
        }
    }
}

/// Whether `s` is a non-empty run of lowercase ASCII alphanumerics separated
/// by single dashes.
pub fn is_slug_safe(s: &str) -> bool {
    !s.is_empty()
        && s.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Derive a slug from a human-readable name.
pub fn slugify(name: &str) -> String {
    slug::slugify(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("page".parse::<ContentKind>(), Ok(ContentKind::Page));
        assert_eq!("posts".parse::<ContentKind>(), Ok(ContentKind::Post));
        assert_eq!(
            "glasstype".parse::<ContentKind>(),
            Ok(ContentKind::GlassType)
        );
        assert!("media".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_kind_order_matches_catalog_order() {
        let mut kinds = vec![ContentKind::GlassType, ContentKind::Page, ContentKind::Post];
        kinds.sort();
        assert_eq!(kinds, ContentKind::ALL.to_vec());
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_yaml::to_string(&ContentKind::GlassType).expect("serialize");
        assert_eq!(json.trim(), "glasstype");
        let kind: ContentKind = serde_yaml::from_str("post").expect("deserialize");
        assert_eq!(kind, ContentKind::Post);
    }

    #[test]
    fn test_url_path() {
        assert_eq!(ContentKind::Page.url_path("vinduer"), "/produkter/vinduer");
        assert_eq!(ContentKind::Post.url_path("nyhet"), "/posts/nyhet");
        assert_eq!(
            ContentKind::GlassType.url_path("herdet"),
            "/glasstypes/herdet"
        );
    }

    #[test]
    fn test_preview_url() {
        let url = ContentKind::Page.schema().preview_url("main", "vinduer");
        assert_eq!(url, "/preview/start?branch=main&to=/produkter/vinduer");

        let url = ContentKind::GlassType.schema().preview_url("draft", "laminert");
        assert_eq!(url, "/preview/start?branch=draft&to=/glasstypes/laminert");
    }

    #[test]
    fn test_schema_labels() {
        assert_eq!(ContentKind::Page.schema().label, "Pages");
        assert_eq!(ContentKind::GlassType.schema().label, "Glass types");
        assert_eq!(ContentKind::Post.schema().columns, &["title", "updatedAt"]);
    }

    #[test]
    fn test_is_slug_safe() {
        assert!(is_slug_safe("main"));
        assert!(is_slug_safe("main-menu-2"));
        assert!(!is_slug_safe(""));
        assert!(!is_slug_safe("Main"));
        assert!(!is_slug_safe("main menu"));
        assert!(!is_slug_safe("-main"));
        assert!(!is_slug_safe("main--menu"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Main Menu"), "main-menu");
        assert_eq!(slugify("  Hovedmeny!  "), "hovedmeny");
    }

    #[test]
    fn test_item_builder() {
        let item =
            ContentItem::new(ContentKind::Page, "home", "Home").with_navigation_title("Start");
        assert_eq!(item.navigation_title.as_deref(), Some("Start"));
    }
}
