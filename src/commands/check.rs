use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::catalog::Catalog;
use crate::utils::display_path;

/// Report disagreements between the index and the documents on disk.
/// Read-only; exits non-zero when anything is out of place.
pub fn execute(catalog: &Catalog) -> Result<()> {
    let report = catalog.check().context("Failed to check catalog")?;
    let root = catalog.workspace().root();

    if report.is_consistent() {
        println!("{} Index and documents agree", "✓".green().bold());
        return Ok(());
    }

    if !report.missing_documents.is_empty() {
        println!("\n{}", "Indexed but missing".bold());
        for entry in &report.missing_documents {
            println!("  {} {} ({})", "✗".red(), entry.name, entry.category.dimmed());
        }
    }

    if !report.unindexed_documents.is_empty() {
        println!("\n{}", "Not in index".bold());
        for path in &report.unindexed_documents {
            println!("  {} {}", "?".yellow(), display_path(path, root));
        }
    }

    if !report.duplicate_entries.is_empty() {
        println!("\n{}", "Duplicate entries".bold());
        for entry in &report.duplicate_entries {
            println!("  {} {} ({})", "!".yellow(), entry.name, entry.category.dimmed());
        }
    }

    let problems = report.missing_documents.len()
        + report.unindexed_documents.len()
        + report.duplicate_entries.len();
    bail!("Catalog is inconsistent: {problems} problem(s) found");
}
