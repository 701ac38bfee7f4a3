//! Integration tests for the catalog lifecycle and index/document consistency

use reel::fs::{IndexEntry, Workspace};
use reel::models::{phase, Phase, Stage, StageState};
use reel::{Catalog, CatalogError};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn new_catalog(temp_dir: &TempDir) -> Catalog {
    let workspace = Workspace::default_in(temp_dir.path());
    workspace.initialize().expect("Should initialize workspace");
    Catalog::new(workspace)
}

/// Documents present under the content root, as absolute paths.
fn documents_on_disk(catalog: &Catalog) -> BTreeSet<PathBuf> {
    let mut found = BTreeSet::new();
    for category in catalog.list_categories().expect("Should list categories") {
        let dir = catalog.workspace().category_dir(&category.name);
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.extension().is_some_and(|e| e == "yaml") {
                found.insert(path);
            }
        }
    }
    found
}

fn indexed_documents(catalog: &Catalog) -> BTreeSet<PathBuf> {
    catalog
        .index()
        .load()
        .expect("Should load index")
        .iter()
        .map(|e| catalog.workspace().document_path(&e.name, &e.category))
        .collect()
}

fn assert_consistent(catalog: &Catalog) {
    assert_eq!(indexed_documents(catalog), documents_on_disk(catalog));
    assert!(catalog.check().unwrap().is_consistent());
}

#[test]
fn test_full_lifecycle_keeps_index_in_sync() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = new_catalog(&temp_dir);

    catalog.create("Intro to Rust", "programming").unwrap();
    catalog.create("Kubernetes Basics", "devops").unwrap();
    catalog.create("Helm Charts", "devops").unwrap();
    assert_consistent(&catalog);
    assert_eq!(catalog.index().load().unwrap().len(), 3);

    // Second create is a no-op on the document and the index.
    catalog.create("Helm Charts", "devops").unwrap();
    assert_consistent(&catalog);
    assert_eq!(catalog.index().load().unwrap().len(), 3);

    catalog
        .move_item("Helm Charts", "devops", "kubernetes")
        .expect("Should move item");
    assert_consistent(&catalog);

    catalog.delete("Intro to Rust", "programming").unwrap();
    assert_consistent(&catalog);

    let remaining = catalog.index().load().unwrap();
    assert_eq!(
        remaining,
        vec![
            IndexEntry::new("Kubernetes Basics", "devops"),
            IndexEntry::new("Helm Charts", "kubernetes"),
        ]
    );
}

#[test]
fn test_move_then_get() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = new_catalog(&temp_dir);
    catalog.create("vid", "old-cat").unwrap();

    catalog.move_item("vid", "old-cat", "new-cat").unwrap();

    let moved = catalog.get("vid", "new-cat").expect("Should find moved item");
    assert_eq!(moved.category, "new-cat");
    assert!(matches!(
        catalog.get("vid", "old-cat"),
        Err(CatalogError::NotFound { .. })
    ));
}

#[test]
fn test_create_does_not_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = new_catalog(&temp_dir);
    catalog.create("vid", "cat").unwrap();

    let mut item = catalog.get("vid", "cat").unwrap();
    item.stages.set(Stage::Initiation, StageState::Flag(true));
    item.stages.set(Stage::Material, StageState::Counter { completed: 2, total: 2 });
    catalog.update(&item).unwrap();

    let outcome = catalog.create("vid", "cat").unwrap();
    assert!(!outcome.created);
    assert_eq!(phase(&catalog.get("vid", "cat").unwrap()), Phase::MaterialDone);
}

#[test]
fn test_delete_nonexistent_returns_ok() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = new_catalog(&temp_dir);

    catalog.delete("never-created", "cat").expect("Delete of missing item should succeed");
    assert!(catalog.index().load().unwrap().is_empty());
}

#[test]
fn test_update_round_trip_preserves_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = new_catalog(&temp_dir);
    catalog.create("Launch", "news").unwrap();

    let mut item = catalog.get("Launch", "news").unwrap();
    item.title = Some("We launched".to_string());
    item.tags = vec!["launch".to_string(), "news".to_string()];
    item.date = Some("2025-06-01T10:00".to_string());
    item.sponsorship.amount = Some("500".to_string());
    item.delayed = true;
    catalog.update(&item).unwrap();

    let reread = catalog.get("Launch", "news").unwrap();
    assert_eq!(reread, item);
}

#[test]
fn test_check_reports_hand_made_drift() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = new_catalog(&temp_dir);
    let kept = catalog.create("kept", "cat").unwrap();
    let lost = catalog.create("lost", "cat").unwrap();

    // Simulate edits made outside the catalog.
    fs::remove_file(&lost.path).unwrap();
    fs::copy(&kept.path, kept.path.with_file_name("stray.yaml")).unwrap();

    let report = catalog.check().unwrap();
    assert!(!report.is_consistent());
    assert_eq!(report.missing_documents, vec![IndexEntry::new("lost", "cat")]);
    assert_eq!(
        report.unindexed_documents,
        vec![kept.path.with_file_name("stray.yaml")]
    );
    assert!(report.duplicate_entries.is_empty());
}
