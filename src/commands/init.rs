use anyhow::Result;
use colored::Colorize;

use crate::fs::Workspace;
use crate::utils::display_path;

/// Create the content directory and an empty index.
pub fn execute(workspace: &Workspace) -> Result<()> {
    let created = workspace.initialize()?;
    let base = std::env::current_dir().unwrap_or_default();

    if created {
        println!(
            "{} Initialized catalog in {}",
            "✓".green().bold(),
            display_path(workspace.root(), &base).cyan()
        );
    } else {
        println!(
            "{} Catalog already initialized in {}",
            "ℹ".blue(),
            display_path(workspace.root(), &base).cyan()
        );
    }
    println!("  {} {}", "index:".dimmed(), display_path(workspace.index_path(), &base));

    Ok(())
}
