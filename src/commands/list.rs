//! Listing commands: items by phase, categories.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::catalog::Catalog;
use crate::models::Phase;
use crate::utils::truncate;

/// List every item in `phase`, earliest publish date first.
pub fn by_phase(catalog: &Catalog, phase: &str, json: bool) -> Result<()> {
    let phase: Phase = phase.parse()?;
    let items = catalog
        .list_by_phase(phase)
        .with_context(|| format!("Failed to list items in phase '{phase}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("{} No items in {}", "ℹ".blue(), phase.label());
        return Ok(());
    }

    println!(
        "{:30} {:20} {:18} {}",
        "NAME".bold(),
        "CATEGORY".bold(),
        "DATE".bold(),
        "TITLE".bold()
    );
    println!("{}", "─".repeat(90));

    for item in &items {
        let date = match (&item.date, item.publish_date()) {
            (Some(_), Some(parsed)) => parsed.format("%Y-%m-%d %H:%M").to_string().normal(),
            (Some(raw), None) => truncate(raw, 18).yellow(),
            (None, _) => "-".dimmed(),
        };
        println!(
            "{:30} {:20} {:18} {}",
            truncate(&item.name, 30).cyan(),
            truncate(&item.category, 20),
            date,
            item.title.as_deref().unwrap_or_default()
        );
    }

    Ok(())
}

/// List category directories with their display names.
pub fn categories(catalog: &Catalog, json: bool) -> Result<()> {
    let categories = catalog
        .list_categories()
        .context("Failed to list categories")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    if categories.is_empty() {
        println!("{} No categories yet", "ℹ".blue());
        return Ok(());
    }

    for category in &categories {
        println!("  {:24} {}", category.display, category.name.dimmed());
    }

    Ok(())
}
