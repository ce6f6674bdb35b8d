//! Content catalog: every entry across the three collections, in one ordered
//! sequence used for slug lookups.
//!
//! The catalog is rebuilt from its source on every load and handed to the
//! resolver as a read-only value.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};
use vitrine_core::{
    ContentEntry, ContentItem, ContentKind, CoreError, frontmatter::parse_frontmatter,
};

use crate::error::Result;

/// File extensions recognised as collection entries.
const ENTRY_EXTENSIONS: &[&str] = &["md", "mdx", "mdoc", "markdown"];

/// Something that can list the entries of a collection.
pub trait ContentSource {
    /// Fetch all items of one collection, in source order.
    fn fetch(&self, kind: ContentKind) -> vitrine_core::Result<Vec<ContentItem>>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn fetch(&self, kind: ContentKind) -> vitrine_core::Result<Vec<ContentItem>> {
        (**self).fetch(kind)
    }
}

/// Reads collections from `<content_dir>/<collection>/*.{md,mdx,mdoc}`.
#[derive(Debug, Clone)]
pub struct FsContentSource {
    content_dir: PathBuf,
}

impl FsContentSource {
    /// Create a source rooted at the content directory.
    #[must_use]
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// Root content directory.
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Directory backing one collection.
    pub fn collection_dir(&self, kind: ContentKind) -> PathBuf {
        self.content_dir.join(kind.collection())
    }

    /// Load the full entries of one collection, ordered by file name.
    pub fn load_entries(&self, kind: ContentKind) -> vitrine_core::Result<Vec<ContentEntry>> {
        let dir = self.collection_dir(kind);
        let present = dir
            .try_exists()
            .map_err(|e| CoreError::fetch(kind.collection(), format!("{}: {e}", dir.display())))?;
        if !present {
            warn!(
                collection = kind.collection(),
                dir = %dir.display(),
                "collection directory missing"
            );
            return Ok(Vec::new());
        }

        let files = find_entry_files(&dir)
            .map_err(|e| CoreError::fetch(kind.collection(), format!("{}: {e}", dir.display())))?;

        let mut entries = Vec::with_capacity(files.len());
        for path in files {
            entries.push(parse_entry(kind, &path)?);
        }

        debug!(collection = kind.collection(), count = entries.len(), "loaded collection");
        Ok(entries)
    }
}

impl ContentSource for FsContentSource {
    fn fetch(&self, kind: ContentKind) -> vitrine_core::Result<Vec<ContentItem>> {
        Ok(self
            .load_entries(kind)?
            .iter()
            .map(ContentEntry::to_item)
            .collect())
    }
}

fn find_entry_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let hidden = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'));
        if hidden {
            continue;
        }

        if let Some(ext) = path.extension()
            && ENTRY_EXTENSIONS.contains(&ext.to_string_lossy().to_lowercase().as_str())
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn parse_entry(kind: ContentKind, path: &Path) -> vitrine_core::Result<ContentEntry> {
    debug!(path = %path.display(), "parsing entry");

    let content = fs::read_to_string(path)
        .map_err(|e| CoreError::fetch(kind.collection(), format!("{}: {e}", path.display())))?;
    let (frontmatter, body) = parse_frontmatter(&content, path)?;
    frontmatter.validate(path)?;

    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ContentEntry {
        kind,
        slug,
        frontmatter,
        body,
        source_path: path.to_path_buf(),
    })
}

/// In-memory source, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: BTreeMap<ContentKind, Vec<ContentItem>>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to its collection.
    #[must_use]
    pub fn with(mut self, item: ContentItem) -> Self {
        self.push(item);
        self
    }

    /// Append an item to its collection.
    pub fn push(&mut self, item: ContentItem) {
        self.collections.entry(item.kind).or_default().push(item);
    }
}

impl ContentSource for MemorySource {
    fn fetch(&self, kind: ContentKind) -> vitrine_core::Result<Vec<ContentItem>> {
        Ok(self.collections.get(&kind).cloned().unwrap_or_default())
    }
}

/// Ordered concatenation of pages, posts, and glass types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentCatalog {
    items: Vec<ContentItem>,
}

impl ContentCatalog {
    /// Build the catalog by fetching each collection in catalog order.
    ///
    /// The first failing fetch aborts the build; no partial catalog is
    /// returned.
    pub fn build<S: ContentSource>(source: &S) -> Result<Self> {
        let mut items = Vec::new();

        for kind in ContentKind::ALL {
            let fetched = source.fetch(kind)?;
            debug!(collection = kind.collection(), count = fetched.len(), "fetched collection");
            items.extend(fetched);
        }

        info!(items = items.len(), "content catalog built");
        Ok(Self { items })
    }

    /// Wrap an already ordered list of items.
    pub fn from_items(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// First item with this slug, in catalog order, regardless of kind.
    pub fn find_by_slug(&self, slug: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.slug == slug)
    }

    /// Item with this exact kind and slug.
    pub fn find(&self, kind: ContentKind, slug: &str) -> Option<&ContentItem> {
        self.items
            .iter()
            .find(|item| item.kind == kind && item.slug == slug)
    }

    /// Items of one kind, in source order.
    pub fn of_kind(&self, kind: ContentKind) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    /// Slugs that appear in more than one collection.
    pub fn ambiguous_slugs(&self) -> Vec<&str> {
        let mut kinds_by_slug: BTreeMap<&str, Vec<ContentKind>> = BTreeMap::new();
        for item in &self.items {
            let kinds = kinds_by_slug.entry(item.slug.as_str()).or_default();
            if !kinds.contains(&item.kind) {
                kinds.push(item.kind);
            }
        }
        kinds_by_slug
            .into_iter()
            .filter(|(_, kinds)| kinds.len() > 1)
            .map(|(slug, _)| slug)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
