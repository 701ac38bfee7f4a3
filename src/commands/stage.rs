//! Stage state manipulation
//! Usage: reel mark|progress|delay <name> <category> ...

use anyhow::{Context, Result};
use colored::Colorize;

use super::common::colored_phase;
use crate::catalog::Catalog;
use crate::models::{phase, Item, Stage, StageState};

/// Read an item, apply `change` and write it back. Returns the updated item.
fn modify(
    catalog: &Catalog,
    name: &str,
    category: &str,
    change: impl FnOnce(&mut Item),
) -> Result<Item> {
    let mut item = catalog
        .get(name, category)
        .with_context(|| format!("Failed to read '{name}' in '{category}'"))?;
    change(&mut item);
    catalog
        .update(&item)
        .with_context(|| format!("Failed to update '{name}' in '{category}'"))?;
    Ok(item)
}

fn report(item: &Item, what: String) {
    println!(
        "{} {} {} → {}",
        "✓".green().bold(),
        item.name.cyan(),
        what,
        colored_phase(phase(item))
    );
}

/// Set a stage to done, or back to pending with `undo`.
pub fn mark(catalog: &Catalog, name: &str, category: &str, stage: &str, undo: bool) -> Result<()> {
    let stage: Stage = stage.parse()?;
    let item = modify(catalog, name, category, |item| {
        item.stages.set(stage, StageState::Flag(!undo));
    })?;

    let verb = if undo { "unmarked" } else { "marked" };
    report(&item, format!("{verb} {stage}"));
    Ok(())
}

/// Record counter progress (`completed/total`) for a stage.
pub fn progress(catalog: &Catalog, name: &str, category: &str, stage: &str, value: &str) -> Result<()> {
    let stage: Stage = stage.parse()?;
    let state = StageState::parse_counter(value)?;
    let item = modify(catalog, name, category, |item| {
        item.stages.set(stage, state);
    })?;

    report(&item, format!("{stage} at {state}"));
    Ok(())
}

/// Flag an item as delayed, or clear the flag.
pub fn delay(catalog: &Catalog, name: &str, category: &str, clear: bool) -> Result<()> {
    let item = modify(catalog, name, category, |item| item.delayed = !clear)?;

    let what = if clear { "no longer delayed" } else { "delayed" };
    report(&item, what.to_string());
    Ok(())
}
