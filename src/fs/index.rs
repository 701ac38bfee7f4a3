//! The catalog index: an ordered list of `(name, category)` pairs stored as
//! a single YAML file and always read and written as a whole.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::atomic::write_atomic;
use super::naming::sanitize_name;
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub category: String,
}

impl IndexEntry {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    /// True when this entry addresses the same document as `(name, category)`.
    ///
    /// Categories compare verbatim; names compare by their sanitized form
    /// since that is what determines the document path.
    pub fn refers_to(&self, name: &str, category: &str) -> bool {
        self.category == category && sanitize_name(&self.name) == sanitize_name(name)
    }
}

pub struct CatalogIndex {
    path: PathBuf,
}

impl CatalogIndex {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load every entry. Fails with `NotFound` if the index file is absent
    /// and `Corrupt` if it does not parse.
    pub fn load(&self) -> Result<Vec<IndexEntry>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| CatalogError::io("load index", &self.path, e))?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<IndexEntry> =
            serde_yaml::from_str(&content).map_err(|e| CatalogError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        debug!(path = %self.path.display(), entries = entries.len(), "loaded index");
        Ok(entries)
    }

    /// Load the index, treating a missing file as empty.
    pub fn load_or_empty(&self) -> Result<Vec<IndexEntry>> {
        match self.load() {
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            other => other,
        }
    }

    /// Replace the whole index with `entries`.
    pub fn save(&self, entries: &[IndexEntry]) -> Result<()> {
        let yaml = serde_yaml::to_string(entries).map_err(|e| CatalogError::Io {
            op: "serialize index",
            path: self.path.clone(),
            source: io::Error::other(e),
        })?;

        write_atomic(&self.path, &yaml).map_err(|e| CatalogError::Io {
            op: "save index",
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), entries = entries.len(), "saved index");
        Ok(())
    }
}
