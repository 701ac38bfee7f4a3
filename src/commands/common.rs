//! Helpers shared by the command implementations.

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use std::env;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config::resolve_workspace;
use crate::fs::Workspace;
use crate::models::Phase;

/// Resolve the workspace for this invocation from `--config`, the
/// environment or the current directory.
pub fn load_workspace(config: Option<&Path>) -> Result<Workspace> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    resolve_workspace(config, &cwd)
}

/// Open the catalog, failing early if the workspace was never initialized.
pub fn open_catalog(config: Option<&Path>) -> Result<Catalog> {
    let workspace = load_workspace(config)?;

    if !workspace.root().exists() {
        anyhow::bail!(
            "Content directory not found: {}. Run 'reel init' first.",
            workspace.root().display()
        );
    }

    Ok(Catalog::new(workspace))
}

/// Phase label colored by how close the item is to release.
pub fn colored_phase(phase: Phase) -> ColoredString {
    let label = phase.label();
    match phase {
        Phase::Ideas => label.dimmed(),
        Phase::Started | Phase::MaterialDone => label.blue(),
        Phase::EditRequested | Phase::PublishPending => label.cyan(),
        Phase::Published => label.green(),
        Phase::Delayed => label.yellow(),
        Phase::SponsoredBlocked => label.red(),
    }
}
