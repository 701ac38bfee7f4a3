use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::naming;

/// Default extension of the script written beside each document.
pub const DEFAULT_SCRIPT_EXTENSION: &str = "md";

/// On-disk layout of a catalog: the content root holding one directory per
/// category, and the index file.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    index_path: PathBuf,
    script_extension: String,
    script_template: Option<PathBuf>,
}

impl Workspace {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(root: P, index_path: Q) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            index_path: index_path.as_ref().to_path_buf(),
            script_extension: DEFAULT_SCRIPT_EXTENSION.to_string(),
            script_template: None,
        }
    }

    /// Layout used when no configuration exists: `manuscript/` and
    /// `index.yaml` under `base`.
    pub fn default_in<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        Self::new(base.join("manuscript"), base.join("index.yaml"))
    }

    pub fn with_script_extension(mut self, extension: impl Into<String>) -> Self {
        self.script_extension = extension.into();
        self
    }

    pub fn with_script_template(mut self, template: Option<PathBuf>) -> Self {
        self.script_template = template;
        self
    }

    /// Create the content root and an empty index if they are missing.
    /// Existing content is left untouched.
    ///
    /// Returns `true` if anything was created.
    pub fn initialize(&self) -> Result<bool> {
        let mut created = false;

        if !self.root.exists() {
            fs::create_dir_all(&self.root).with_context(|| {
                format!("Failed to create content directory: {}", self.root.display())
            })?;
            created = true;
        }

        if !self.index_path.exists() {
            crate::fs::index::CatalogIndex::new(&self.index_path)
                .save(&[])
                .with_context(|| {
                    format!("Failed to create index: {}", self.index_path.display())
                })?;
            created = true;
        }

        Ok(created)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn script_extension(&self) -> &str {
        &self.script_extension
    }

    pub fn script_template(&self) -> Option<&Path> {
        self.script_template.as_deref()
    }

    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.root.join(category)
    }

    pub fn document_path(&self, name: &str, category: &str) -> PathBuf {
        naming::document_path(&self.root, category, name)
    }

    pub fn script_path(&self, document_path: &Path) -> PathBuf {
        naming::script_path(document_path, &self.script_extension)
    }
}
