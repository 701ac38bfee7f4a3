//! Read-side catalog operations: phase listings, phase counts, categories
//! and the consistency check.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::Catalog;
use crate::error::{CatalogError, Result};
use crate::fs::{read_item, IndexEntry, DOCUMENT_EXTENSION};
use crate::models::{phase, Item, Phase};
use crate::utils::title_case;

/// A category directory under the content root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Directory name, used verbatim for lookups.
    pub name: String,
    /// Title-cased name for display.
    pub display: String,
}

/// Differences between the index and the documents on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Index entries whose document does not exist.
    pub missing_documents: Vec<IndexEntry>,
    /// Documents with no index entry.
    pub unindexed_documents: Vec<PathBuf>,
    /// Entries that point at the same document as an earlier entry.
    pub duplicate_entries: Vec<IndexEntry>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.missing_documents.is_empty()
            && self.unindexed_documents.is_empty()
            && self.duplicate_entries.is_empty()
    }
}

impl Catalog {
    /// Every indexed item currently in `target`, ordered by publish date.
    ///
    /// Any unreadable document fails the whole call. Items without a usable
    /// date come first; ties keep index order.
    pub fn list_by_phase(&self, target: Phase) -> Result<Vec<Item>> {
        let entries = self.index.load()?;
        let mut items = Vec::new();

        for entry in &entries {
            let item = read_item(&self.workspace.document_path(&entry.name, &entry.category))?;
            if phase(&item) == target {
                items.push(item);
            }
        }

        items.sort_by_key(Item::date_sort_key);
        debug!(phase = %target, count = items.len(), "listed items by phase");
        Ok(items)
    }

    /// Number of indexed items in each phase. Every phase is present.
    ///
    /// Best-effort: documents that cannot be read are logged and skipped.
    pub fn counts_by_phase(&self) -> Result<BTreeMap<Phase, usize>> {
        let entries = self.index.load()?;
        let mut counts: BTreeMap<Phase, usize> = Phase::ALL.iter().map(|p| (*p, 0)).collect();

        for entry in &entries {
            let path = self.workspace.document_path(&entry.name, &entry.category);
            match read_item(&path) {
                Ok(item) => *counts.entry(phase(&item)).or_insert(0) += 1,
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable document"),
            }
        }

        Ok(counts)
    }

    /// Category directories under the content root, sorted by display name.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let root = self.workspace.root();
        let entries = fs::read_dir(root).map_err(|e| CatalogError::io("list categories", root, e))?;

        let mut categories = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::io("list categories", root, e))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            categories.push(Category {
                name: name.to_string(),
                display: title_case(name),
            });
        }

        categories.sort_by(|a, b| a.display.cmp(&b.display).then_with(|| a.name.cmp(&b.name)));
        Ok(categories)
    }

    /// Compare the index with the documents on disk. Read-only: nothing is
    /// repaired.
    pub fn check(&self) -> Result<ConsistencyReport> {
        let entries = self.index.load()?;
        let mut report = ConsistencyReport::default();
        let mut indexed = HashSet::new();

        for entry in &entries {
            let path = self.workspace.document_path(&entry.name, &entry.category);
            if !indexed.insert(path.clone()) {
                report.duplicate_entries.push(entry.clone());
                continue;
            }
            if !path.is_file() {
                report.missing_documents.push(entry.clone());
            }
        }

        for category in self.list_categories()? {
            let dir = self.workspace.category_dir(&category.name);
            let files = fs::read_dir(&dir).map_err(|e| CatalogError::io("check", &dir, e))?;
            for file in files {
                let path = file.map_err(|e| CatalogError::io("check", &dir, e))?.path();
                let is_document = path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(DOCUMENT_EXTENSION)
                    && path != self.index.path();
                if is_document && !indexed.contains(&path) {
                    report.unindexed_documents.push(path);
                }
            }
        }

        report.unindexed_documents.sort();
        Ok(report)
    }
}
