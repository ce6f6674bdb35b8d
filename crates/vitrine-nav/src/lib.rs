//! Vitrine Navigation Library
//!
//! Builds the content catalog and resolves the navigation singleton against it.
//!
//! # Modules
//!
//! - [`catalog`] - Content sources and the ordered content catalog
//! - [`navigation`] - Navigation singleton schema, loading, and validation
//! - [`resolver`] - Menu label resolution and reference diagnostics

pub mod catalog;
pub mod error;
pub mod navigation;
pub mod resolver;

pub use catalog::{ContentCatalog, ContentSource, FsContentSource, MemorySource};
pub use error::{NavError, Result};
pub use navigation::{
    MenuEntry, MenuItemRef, MenuPosition, NavigationDocument, SlugField, SubmenuEntry,
    ValidationIssue,
};
pub use resolver::{
    LabelField, ReferenceIssue, ResolvedMenu, ResolvedMenuItem, reference_issues, resolve_label,
    resolve_menu,
};
