use anyhow::Result;
use reel::commands::common::{load_workspace, open_catalog};
use reel::commands::{check, init, item, list, stage, status};
use reel::completions::{generate_completions, Shell};
use std::path::Path;
use std::str::FromStr;

use super::types::{Cli, Commands};

pub fn dispatch(command: Commands, config: Option<&Path>) -> Result<()> {
    match command {
        Commands::Init => init::execute(&load_workspace(config)?),
        Commands::Create { name, category } => item::create(&open_catalog(config)?, &name, &category),
        Commands::Show {
            name,
            category,
            json,
        } => item::show(&open_catalog(config)?, &name, &category, json),
        Commands::Mark {
            name,
            category,
            stage: stage_name,
            undo,
        } => stage::mark(&open_catalog(config)?, &name, &category, &stage_name, undo),
        Commands::Progress {
            name,
            category,
            stage: stage_name,
            value,
        } => stage::progress(&open_catalog(config)?, &name, &category, &stage_name, &value),
        Commands::Delay {
            name,
            category,
            clear,
        } => stage::delay(&open_catalog(config)?, &name, &category, clear),
        Commands::Delete { name, category } => item::delete(&open_catalog(config)?, &name, &category),
        Commands::Move {
            name,
            category,
            target,
        } => item::move_to(&open_catalog(config)?, &name, &category, &target),
        Commands::List { phase, json } => list::by_phase(&open_catalog(config)?, &phase, json),
        Commands::Status { json } => status::execute(&open_catalog(config)?, json),
        Commands::Categories { json } => list::categories(&open_catalog(config)?, json),
        Commands::Check => check::execute(&open_catalog(config)?),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}
