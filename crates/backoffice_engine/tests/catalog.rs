use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use backoffice_engine::{
    InMemoryModuleStore, LabelTable, ModuleCatalog, ModuleRow, ModuleStore, RonModuleStore,
    StoreError, DESCRIPTOR_FILENAME, IGNORED_MODULES,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_descriptor(root: &Path, module: &str, xml: &str) {
    let dir = root.join(module);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(DESCRIPTOR_FILENAME), xml).unwrap();
}

fn labels() -> LabelTable {
    LabelTable::new(BTreeMap::from([
        ("Blog".to_string(), "blog".to_string()),
        ("Faq".to_string(), "FAQ".to_string()),
    ]))
}

fn catalog(root: &Path, rows: Vec<ModuleRow>) -> ModuleCatalog {
    ModuleCatalog::new(
        Box::new(InMemoryModuleStore::new(rows)),
        Box::new(labels()),
        root,
    )
}

#[test]
fn ignored_modules_never_listed() {
    let temp = TempDir::new().unwrap();
    let mut rows: Vec<ModuleRow> = IGNORED_MODULES
        .iter()
        .map(|name| ModuleRow::new(*name, true))
        .collect();
    rows.push(ModuleRow::new("blog", true));

    let entries = catalog(temp.path(), rows).list_modules().unwrap();

    let names: Vec<_> = entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["blog"]);
}

#[test]
fn modules_without_descriptor_have_empty_enrichment() {
    let temp = TempDir::new().unwrap();
    let entries = catalog(
        temp.path(),
        vec![ModuleRow::new("faq", false), ModuleRow::new("location", true)],
    )
    .list_modules()
    .unwrap();

    assert_eq!(entries.len(), 2);
    for entry in &entries {
        assert_eq!(entry.description, "");
        assert_eq!(entry.version, "");
    }
    assert_eq!(entries[0].label, "FAQ");
    assert!(!entries[0].active);
    // No translation: camel-cased name is used as is.
    assert_eq!(entries[1].label, "Location");
}

#[test]
fn descriptor_enriches_entry_and_truncates_description() {
    let temp = TempDir::new().unwrap();
    write_descriptor(
        temp.path(),
        "blog",
        "<module><version>3.1.0</version><description>A complete blogging module with categories, comments and RSS feeds.</description></module>",
    );

    let entries = catalog(temp.path(), vec![ModuleRow::new("blog", true)])
        .list_modules()
        .unwrap();

    let blog = &entries[0];
    assert_eq!(blog.label, "Blog");
    assert_eq!(blog.version, "3.1.0");
    assert_eq!(blog.description.chars().count(), 50);
    assert_eq!(
        blog.description,
        "A complete blogging module with categories, comme…"
    );
}

#[test]
fn broken_descriptor_does_not_block_listing() {
    let temp = TempDir::new().unwrap();
    write_descriptor(temp.path(), "blog", "<module><version>1.0</module>");

    let entries = catalog(
        temp.path(),
        vec![ModuleRow::new("blog", true), ModuleRow::new("faq", true)],
    )
    .list_modules()
    .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].version, "");
    assert_eq!(entries[0].description, "");
}

#[test]
fn entries_are_ordered_by_raw_name() {
    let temp = TempDir::new().unwrap();
    let entries = catalog(
        temp.path(),
        vec![
            ModuleRow::new("location", true),
            ModuleRow::new("blog", true),
            ModuleRow::new("faq", true),
        ],
    )
    .list_modules()
    .unwrap();

    let names: Vec<_> = entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["blog", "faq", "location"]);
}

#[test]
fn module_exists_checks_the_filesystem() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("blog")).unwrap();
    let catalog = catalog(temp.path(), Vec::new());

    assert!(catalog.module_exists("blog"));
    assert!(!catalog.module_exists("faq"));
}

#[test]
fn ron_store_reads_and_sorts_rows() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("modules.ron");
    fs::write(
        &path,
        r#"[(name: "tags", active: true), (name: "blog", active: false)]"#,
    )
    .unwrap();

    let rows = RonModuleStore::new(&path).modules().unwrap();
    assert_eq!(
        rows,
        vec![ModuleRow::new("blog", false), ModuleRow::new("tags", true)]
    );
}

#[test]
fn missing_store_is_an_error() {
    let temp = TempDir::new().unwrap();
    let store = RonModuleStore::new(temp.path().join("absent.ron"));
    let catalog = ModuleCatalog::new(Box::new(store), Box::new(labels()), temp.path());

    assert!(matches!(catalog.list_modules(), Err(StoreError::Io { .. })));
}
