//! Catalog configuration loaded from `reel.toml`.
//!
//! ```toml
//! [catalog]
//! root = "manuscript"
//! index = "index.yaml"
//! script_extension = "md"
//! script_template = "templates/script.md"
//! ```
//!
//! Relative paths resolve against the directory holding the config file.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs::workspace::{Workspace, DEFAULT_SCRIPT_EXTENSION};
use crate::fs::DOCUMENT_EXTENSION;

/// Name of the project-level config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "reel.toml";

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "REEL_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_index")]
    pub index: PathBuf,
    #[serde(default = "default_script_extension")]
    pub script_extension: String,
    #[serde(default)]
    pub script_template: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            index: default_index(),
            script_extension: default_script_extension(),
            script_template: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("manuscript")
}

fn default_index() -> PathBuf {
    PathBuf::from("index.yaml")
}

fn default_script_extension() -> String {
    DEFAULT_SCRIPT_EXTENSION.to_string()
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        let ext = self.catalog.script_extension.trim_start_matches('.');
        if ext.is_empty() {
            bail!("script_extension cannot be empty");
        }
        if ext == DOCUMENT_EXTENSION {
            bail!("script_extension '{ext}' collides with the document extension");
        }
        Ok(())
    }

    /// Resolve this configuration into a workspace, anchoring relative paths
    /// at `base_dir`.
    pub fn workspace(&self, base_dir: &Path) -> Workspace {
        let catalog = &self.catalog;
        Workspace::new(base_dir.join(&catalog.root), base_dir.join(&catalog.index))
            .with_script_extension(catalog.script_extension.trim_start_matches('.'))
            .with_script_template(catalog.script_template.as_ref().map(|t| base_dir.join(t)))
    }
}

/// Find the configuration that applies to this invocation and resolve it.
///
/// Lookup order:
/// 1. `explicit` (from `--config`), which must exist
/// 2. the file named by `REEL_CONFIG`, which must exist
/// 3. `reel.toml` in `cwd`
/// 4. `reel/config.toml` in the user config directory
/// 5. built-in defaults rooted at `cwd`
pub fn resolve_workspace(explicit: Option<&Path>, cwd: &Path) -> Result<Workspace> {
    let from_env = env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);

    if let Some(required) = explicit.map(Path::to_path_buf).or(from_env) {
        let path = if required.is_absolute() {
            required
        } else {
            cwd.join(required)
        };
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        return workspace_from_file(&path);
    }

    let project = cwd.join(CONFIG_FILE_NAME);
    if project.is_file() {
        return workspace_from_file(&project);
    }

    if let Some(user) = dirs::config_dir().map(|d| d.join("reel").join("config.toml")) {
        if user.is_file() {
            return workspace_from_file(&user);
        }
    }

    Ok(Config::default().workspace(cwd))
}

fn workspace_from_file(path: &Path) -> Result<Workspace> {
    let config = Config::load_from(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(config.workspace(base_dir))
}
