//! Item command implementations: create, show, delete and move.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::common::colored_phase;
use crate::catalog::Catalog;
use crate::models::{phase, Channel, Item, Phase, Stage};
use crate::utils::display_path;

#[derive(Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    item: &'a Item,
    phase: Phase,
}

pub fn create(catalog: &Catalog, name: &str, category: &str) -> Result<()> {
    let outcome = catalog
        .create(name, category)
        .with_context(|| format!("Failed to create '{name}' in '{category}'"))?;
    let shown = display_path(&outcome.path, catalog.workspace().root());

    if outcome.created {
        println!("{} Created {}", "✓".green().bold(), shown.cyan());
    } else {
        println!("{} Already exists: {}", "ℹ".blue(), shown.cyan());
    }
    Ok(())
}

pub fn show(catalog: &Catalog, name: &str, category: &str, json: bool) -> Result<()> {
    let item = catalog
        .get(name, category)
        .with_context(|| format!("Failed to read '{name}' in '{category}'"))?;
    let current = phase(&item);

    if json {
        let output = ShowOutput {
            item: &item,
            phase: current,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", item.name.bold(), format!("({})", item.category).dimmed());
    println!("  {:12} {}", "phase:", colored_phase(current));
    if let Some(title) = &item.title {
        println!("  {:12} {}", "title:", title);
    }
    if let Some(date) = &item.date {
        let note = if item.publish_date().is_none() {
            " (unparsable)".yellow().to_string()
        } else {
            String::new()
        };
        println!("  {:12} {date}{note}", "date:");
    }
    if item.delayed {
        println!("  {:12} {}", "delayed:", "yes".yellow());
    }
    if item.sponsorship.is_blocked() {
        let reason = item.sponsorship.blocked.as_deref().unwrap_or_default();
        println!("  {:12} {}", "blocked:", reason.trim().red());
    }

    println!("\n{}", "Stages".bold());
    for stage in Stage::ALL {
        let state = item.stages.get(stage);
        let marker = if state.is_done() {
            "✓".green()
        } else {
            "·".dimmed()
        };
        println!("  {marker} {:12} {}", stage.to_string(), state);
    }

    let posted: Vec<String> = [Channel::Email, Channel::Slack, Channel::Calendar]
        .into_iter()
        .filter(|c| item.posted.get(*c))
        .map(|c| c.to_string())
        .collect();
    if !posted.is_empty() {
        println!("\n  {:12} {}", "posted:", posted.join(", "));
    }
    if let Some(id) = &item.video_id {
        println!("  {:12} {}", "video id:", id);
    }

    Ok(())
}

pub fn delete(catalog: &Catalog, name: &str, category: &str) -> Result<()> {
    catalog
        .delete(name, category)
        .with_context(|| format!("Failed to delete '{name}' from '{category}'"))?;
    println!("{} Deleted '{}' from {}", "✓".green().bold(), name, category.cyan());
    Ok(())
}

pub fn move_to(catalog: &Catalog, name: &str, category: &str, target: &str) -> Result<()> {
    let destination = catalog
        .move_item(name, category, target)
        .with_context(|| format!("Failed to move '{name}' from '{category}' to '{target}'"))?;
    println!(
        "{} Moved '{}' to {}",
        "✓".green().bold(),
        name,
        display_path(&destination, catalog.workspace().root()).cyan()
    );
    Ok(())
}
