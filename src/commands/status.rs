use anyhow::{Context, Result};
use colored::Colorize;

use super::common::colored_phase;
use crate::catalog::Catalog;
use crate::models::Phase;

/// Show how many items sit in each phase.
pub fn execute(catalog: &Catalog, json: bool) -> Result<()> {
    let counts = catalog
        .counts_by_phase()
        .context("Failed to count items by phase")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    println!("{}", "reel Status".bold().blue());
    println!("{}", "=".repeat(32));

    let mut total = 0;
    let mut in_overrides = false;
    for phase in Phase::ALL {
        let count = counts.get(&phase).copied().unwrap_or(0);
        total += count;

        if phase.is_override() && !in_overrides {
            println!("{}", "─".repeat(32).dimmed());
            in_overrides = true;
        }
        let count_str = if count == 0 {
            count.to_string().dimmed()
        } else {
            count.to_string().bold()
        };
        println!("  {:24} {:>5}", colored_phase(phase), count_str);
    }

    println!("{}", "=".repeat(32));
    println!("  {:24} {:>5}", "Total".bold(), total);

    Ok(())
}
