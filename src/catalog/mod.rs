//! Catalog service: the only place that touches documents and the index in
//! the same operation.
//!
//! Every operation loads the index fresh, mutates it in memory and saves it
//! back whole; nothing is cached between calls. After each successful
//! `create`, `delete` and `move` the index entries and the documents on disk
//! are in 1:1 correspondence.
//!
//! There is no locking and no transaction log. A failure between the
//! document step and the index step is reported as
//! [`CatalogError::PartialFailure`] and left for the operator to reconcile
//! (see [`Catalog::check`]).

mod listing;
mod script;

pub use listing::{Category, ConsistencyReport};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{CatalogError, Result};
use crate::fs::{read_item, remove_file, write_item, write_script, CatalogIndex, IndexEntry, Workspace};
use crate::models::Item;
use crate::validation::{validate_category, validate_name};

/// Result of [`Catalog::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub path: PathBuf,
    /// `false` when the document already existed and was left untouched.
    pub created: bool,
}

pub struct Catalog {
    workspace: Workspace,
    index: CatalogIndex,
}

impl Catalog {
    pub fn new(workspace: Workspace) -> Self {
        let index = CatalogIndex::new(workspace.index_path());
        Self { workspace, index }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Create a new item with all stages unset.
    ///
    /// Idempotent: an existing document is never overwritten, but a missing
    /// index entry for it is added.
    pub fn create(&self, name: &str, category: &str) -> Result<CreateOutcome> {
        validate_name("create", name)?;
        validate_category("create", category)?;

        let path = self.workspace.document_path(name, category);
        let created = !path.exists();
        let mut errors = Vec::new();

        if created {
            let dir = self.workspace.category_dir(category);
            fs::create_dir_all(&dir).map_err(|e| CatalogError::Io {
                op: "create category",
                path: dir.clone(),
                source: e,
            })?;

            let mut item = Item::new(name.to_string(), category.to_string());
            item.path = Some(path.clone());
            write_item(&item, &path)?;

            if let Err(e) = self.write_starter_script(&item, &path) {
                errors.push(e);
            }
        }

        if let Err(e) = self.ensure_indexed(name, category) {
            errors.push(e);
        }

        if !errors.is_empty() {
            // Nothing was written for an existing document, so a lone index
            // failure is not partial.
            if !created && errors.len() == 1 {
                return Err(errors.remove(0));
            }
            return Err(CatalogError::PartialFailure {
                op: "create",
                errors,
            });
        }

        if created {
            info!(item = name, category, path = %path.display(), "created item");
        } else {
            info!(item = name, category, "item already exists, left untouched");
        }

        Ok(CreateOutcome { path, created })
    }

    /// Read an item directly from its document. The index is not consulted.
    pub fn get(&self, name: &str, category: &str) -> Result<Item> {
        validate_name("get", name)?;
        validate_category("get", category)?;

        read_item(&self.workspace.document_path(name, category))
    }

    /// Overwrite an item's document. The item must have been read through
    /// the catalog so its storage path is known. The index is not touched.
    pub fn update(&self, item: &Item) -> Result<()> {
        let path = item
            .path
            .as_deref()
            .ok_or_else(|| CatalogError::invalid("update", "item has no storage path"))?;

        write_item(item, path)?;
        info!(item = %item.name, category = %item.category, "updated item");
        Ok(())
    }

    /// Delete an item's document, its script and its index entry.
    ///
    /// Both file removals are always attempted. Missing files are fine; any
    /// other failures are collected and returned together. The index entry
    /// is dropped only once the document itself is gone.
    pub fn delete(&self, name: &str, category: &str) -> Result<()> {
        validate_name("delete", name)?;
        validate_category("delete", category)?;

        let path = self.workspace.document_path(name, category);
        let script = self.workspace.script_path(&path);
        let mut errors = Vec::new();

        let document_removed = match remove_file(&path) {
            Ok(()) => true,
            Err(e) => {
                errors.push(e);
                false
            }
        };
        if let Err(e) = remove_file(&script) {
            errors.push(e);
        }

        if document_removed {
            if let Err(e) = self.drop_from_index(name, category) {
                errors.push(e);
            }
        }

        if !errors.is_empty() {
            return Err(CatalogError::PartialFailure {
                op: "delete",
                errors,
            });
        }

        info!(item = name, category, "deleted item");
        Ok(())
    }

    /// Move an item, its script and its index entry to another category.
    ///
    /// Neither the document nor the script may already exist in `target`.
    /// If the script cannot be moved after the document was, the document is
    /// moved back before the error is returned.
    pub fn move_item(&self, name: &str, category: &str, target: &str) -> Result<PathBuf> {
        validate_name("move", name)?;
        validate_category("move", category)?;
        validate_category("move", target)?;

        let source = self.workspace.document_path(name, category);
        let mut item = read_item(&source)?;

        if category == target {
            return Ok(source);
        }

        let destination = self.workspace.document_path(name, target);
        let source_script = self.workspace.script_path(&source);
        let destination_script = self.workspace.script_path(&destination);
        for occupied in [&destination, &destination_script] {
            if occupied.exists() {
                return Err(CatalogError::AlreadyExists {
                    op: "move",
                    path: occupied.clone(),
                });
            }
        }

        let target_dir = self.workspace.category_dir(target);
        fs::create_dir_all(&target_dir).map_err(|e| CatalogError::Io {
            op: "create category",
            path: target_dir.clone(),
            source: e,
        })?;

        rename(&source, &destination)?;

        if source_script.exists() {
            if let Err(e) = rename(&source_script, &destination_script) {
                if let Err(rollback) = fs::rename(&destination, &source) {
                    warn!(
                        path = %destination.display(),
                        error = %rollback,
                        "failed to roll back document move"
                    );
                }
                return Err(e);
            }
        }

        let mut errors = Vec::new();

        item.category = target.to_string();
        item.path = Some(destination.clone());
        if let Err(e) = write_item(&item, &destination) {
            errors.push(e);
        }

        if let Err(e) = self.recategorize_in_index(name, category, target) {
            errors.push(e);
        }

        if !errors.is_empty() {
            return Err(CatalogError::PartialFailure { op: "move", errors });
        }

        info!(item = name, from = category, to = target, "moved item");
        Ok(destination)
    }

    fn write_starter_script(&self, item: &Item, document: &Path) -> Result<()> {
        let script_path = self.workspace.script_path(document);
        if script_path.exists() {
            return Ok(());
        }
        let content = script::render(self.workspace.script_template(), item)?;
        write_script(&script_path, &content)
    }

    fn ensure_indexed(&self, name: &str, category: &str) -> Result<()> {
        let mut entries = self.index.load_or_empty()?;
        if entries.iter().any(|e| e.refers_to(name, category)) {
            return Ok(());
        }
        entries.push(IndexEntry::new(name, category));
        self.index.save(&entries)
    }

    fn drop_from_index(&self, name: &str, category: &str) -> Result<()> {
        let mut entries = self.index.load_or_empty()?;
        let before = entries.len();
        entries.retain(|e| !e.refers_to(name, category));
        if entries.len() == before {
            return Ok(());
        }
        self.index.save(&entries)
    }

    fn recategorize_in_index(&self, name: &str, category: &str, target: &str) -> Result<()> {
        let mut entries = self.index.load_or_empty()?;
        match entries.iter_mut().find(|e| e.refers_to(name, category)) {
            Some(entry) => entry.category = target.to_string(),
            None => {
                warn!(item = name, category, "moved item had no index entry, adding one");
                entries.push(IndexEntry::new(name, target));
            }
        }
        self.index.save(&entries)
    }
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| CatalogError::io("move", from, e))
}
