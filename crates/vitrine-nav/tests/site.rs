//! End-to-end tests over an on-disk content directory.

use std::{fs, path::Path};

use vitrine_core::ContentKind;
use vitrine_nav::{
    ContentCatalog, FsContentSource, LabelField, MenuItemRef, NavigationDocument, ReferenceIssue,
    reference_issues, resolve_label, resolve_menu,
};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write");
}

fn sample_site(root: &Path) {
    write(
        root,
        "pages/home.mdx",
        "---\ntitle: Home\nnavigationTitle: ''\n---\nWelcome",
    );
    write(
        root,
        "pages/vinduer.mdx",
        "---\ntitle: Vinduer\nnavigationTitle: Våre vinduer\n---\n",
    );
    write(
        root,
        "posts/nyhet.mdoc",
        "---\ntitle: Ny fabrikk\npublishedAt: 2024-05-01\n---\n",
    );
    write(
        root,
        "glasstypes/herdet.mdx",
        "+++\ntitle = \"Herdet glass\"\n+++\n",
    );
    write(
        root,
        "navigation/index.yaml",
        r#"name:
  name: Main
  slug: main
menuItems:
  - item: { discriminant: page, value: home }
  - item: { discriminant: page, value: vinduer }
    children:
      - item: { discriminant: glasstype, value: herdet }
      - item: { discriminant: post, value: nyhet }
  - item: { discriminant: post, value: arkivert }
"#,
    );
}

#[test]
fn test_catalog_order_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    sample_site(dir.path());

    let catalog = ContentCatalog::build(&FsContentSource::new(dir.path())).expect("build");
    let order: Vec<(ContentKind, &str)> = catalog
        .iter()
        .map(|item| (item.kind, item.slug.as_str()))
        .collect();

    assert_eq!(
        order,
        vec![
            (ContentKind::Page, "home"),
            (ContentKind::Page, "vinduer"),
            (ContentKind::Post, "nyhet"),
            (ContentKind::GlassType, "herdet"),
        ]
    );
}

#[test]
fn test_catalog_rebuild_is_identical() {
    let dir = tempfile::tempdir().expect("create temp dir");
    sample_site(dir.path());
    let source = FsContentSource::new(dir.path());

    let first = ContentCatalog::build(&source).expect("build");
    let second = ContentCatalog::build(&source).expect("build");
    assert_eq!(first, second);
}

#[test]
fn test_catalog_reflects_content_changes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    sample_site(dir.path());
    let source = FsContentSource::new(dir.path());

    let before = ContentCatalog::build(&source).expect("build");
    write(dir.path(), "posts/ny.mdx", "---\ntitle: Ny\n---\n");
    let after = ContentCatalog::build(&source).expect("build");

    assert_eq!(after.len(), before.len() + 1);
}

#[test]
fn test_resolve_sample_menu() {
    let dir = tempfile::tempdir().expect("create temp dir");
    sample_site(dir.path());

    let catalog = ContentCatalog::build(&FsContentSource::new(dir.path())).expect("build");
    let doc = NavigationDocument::load(dir.path()).expect("load navigation");
    doc.ensure_valid().expect("valid");

    let menu = resolve_menu(&doc, &catalog);
    let labels: Vec<&str> = menu.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["home", "Våre vinduer", "arkivert"]);

    let children: Vec<&str> = menu.items[1]
        .children
        .iter()
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(children, vec!["Herdet glass", "Ny fabrikk"]);

    assert_eq!(
        resolve_label(&MenuItemRef::page("home"), &catalog, LabelField::Title),
        "Home"
    );
}

#[test]
fn test_reference_issues_for_sample() {
    let dir = tempfile::tempdir().expect("create temp dir");
    sample_site(dir.path());

    let catalog = ContentCatalog::build(&FsContentSource::new(dir.path())).expect("build");
    let doc = NavigationDocument::load(dir.path()).expect("load navigation");

    let issues = reference_issues(&doc, &catalog);
    assert_eq!(issues.len(), 1);
    assert!(matches!(
        &issues[0],
        ReferenceIssue::Dangling { item, .. } if item.slug == "arkivert"
    ));
}

#[test]
fn test_broken_entry_fails_whole_build() {
    let dir = tempfile::tempdir().expect("create temp dir");
    sample_site(dir.path());
    write(dir.path(), "glasstypes/broken.mdx", "---\ntitle: [oops\n---\n");

    let result = ContentCatalog::build(&FsContentSource::new(dir.path()));
    assert!(result.is_err());
}
