mod cli;

use anyhow::Result;
use clap::Parser;
use reel::logging::init_tracing;

use cli::{dispatch, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    dispatch(cli.command, cli.config.as_deref())
}
