//! Item documents: one YAML file per item.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::atomic::write_atomic;
use crate::error::{CatalogError, Result};
use crate::models::Item;

/// Read the item stored at `path`.
///
/// The returned item carries `path` so it can be handed back to
/// [`write_item`] or the catalog's update.
pub fn read_item(path: &Path) -> Result<Item> {
    let content = fs::read_to_string(path).map_err(|e| CatalogError::io("read", path, e))?;

    let mut item: Item = serde_yaml::from_str(&content).map_err(|e| CatalogError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    item.path = Some(path.to_path_buf());

    debug!(path = %path.display(), "read item document");
    Ok(item)
}

/// Fully overwrite the document at `path` with `item`.
pub fn write_item(item: &Item, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(item)
        .map_err(|e| CatalogError::Io {
            op: "serialize",
            path: path.to_path_buf(),
            source: io::Error::other(e),
        })?;

    write_atomic(path, &yaml).map_err(|e| CatalogError::Io {
        op: "write",
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), "wrote item document");
    Ok(())
}

/// Write an auxiliary file (the item's script) with the same atomic contract
/// as documents.
pub fn write_script(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content).map_err(|e| CatalogError::Io {
        op: "write",
        path: path.to_path_buf(),
        source: e,
    })
}

/// Remove the file at `path`. Already absent is not an error.
pub fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed file");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CatalogError::Io {
            op: "remove",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Stage, StageState};
    use tempfile::TempDir;

    fn sample_item() -> Item {
        let mut item = Item::new("My Video".to_string(), "devops".to_string());
        item.stages.set(Stage::Initiation, StageState::Flag(true));
        item.stages.set(
            Stage::Material,
            StageState::Counter {
                completed: 2,
                total: 5,
            },
        );
        item.delayed = true;
        item.date = Some("2025-06-01T16:00".to_string());
        item.title = Some("My Video: The Sequel".to_string());
        item.tags = vec!["kubernetes".to_string(), "gitops".to_string()];
        item.sponsorship.amount = Some("1000".to_string());
        item.sponsorship.emails = vec!["sponsor@example.com".to_string()];
        item.posted.slack = true;
        item
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("devops").join("my-video.yaml");

        let mut item = sample_item();
        item.path = Some(path.clone());
        write_item(&item, &path).unwrap();

        let loaded = read_item(&path).unwrap();
        assert_eq!(loaded, item);
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_item(&temp_dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_garbage_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "name: [unterminated").unwrap();

        let err = read_item(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Corrupt { .. }));
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_read_missing_required_field_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.yaml");
        fs::write(&path, "delayed: true\n").unwrap();

        let err = read_item(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Corrupt { .. }));
    }

    #[test]
    fn test_read_tolerates_hand_edited_minimal_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("minimal.yaml");
        fs::write(
            &path,
            "name: Minimal\ncategory: misc\nstages:\n  initiation: true\n",
        )
        .unwrap();

        let item = read_item(&path).unwrap();
        assert_eq!(item.name, "Minimal");
        assert_eq!(item.stages.progress(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.yaml");
        fs::write(&path, "x").unwrap();

        remove_file(&path).unwrap();
        assert!(!path.exists());
        remove_file(&path).unwrap();
    }

    #[test]
    fn test_remove_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("actually-a-dir.yaml");
        fs::create_dir(&path).unwrap();

        let err = remove_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { op: "remove", .. }));
    }
}
