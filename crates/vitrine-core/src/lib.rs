//! Vitrine Core Library
//!
//! Core types, configuration, content schemas, and error handling shared by
//! the navigation, theme, and CLI crates.

pub mod config;
pub mod content;
pub mod environment;
pub mod error;
pub mod frontmatter;
pub mod storage;

pub use config::Config;
pub use content::{CollectionSchema, ContentEntry, ContentItem, ContentKind};
pub use environment::{Mode, RuntimeEnv};
pub use error::{CoreError, Result};
pub use frontmatter::{EntryFrontmatter, FeaturedMedia};
pub use storage::{RepoRef, StorageBackend};
