use clap::{Parser, Subcommand};
use reel::validation::{clap_category_validator, clap_name_validator};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "
   ┬─┐┌─┐┌─┐┬
   ├┬┘├┤ ├┤ │
   ┴└─└─┘└─┘┴─┘

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Video production pipeline tracker", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Path to a reel.toml (overrides REEL_CONFIG and ./reel.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the content directory and an empty index
    Init,

    /// Create a new item with all stages pending
    Create {
        /// Item name (sanitized to form the file name)
        #[arg(value_parser = clap_name_validator)]
        name: String,

        /// Category directory to create the item in
        #[arg(value_parser = clap_category_validator)]
        category: String,
    },

    /// Show an item's stages and phase
    Show {
        #[arg(value_parser = clap_name_validator)]
        name: String,

        #[arg(value_parser = clap_category_validator)]
        category: String,

        /// Print the item as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a stage done (initiation, material, definition, edit, publish)
    Mark {
        #[arg(value_parser = clap_name_validator)]
        name: String,

        #[arg(value_parser = clap_category_validator)]
        category: String,

        /// Stage to mark
        stage: String,

        /// Set the stage back to pending
        #[arg(long)]
        undo: bool,
    },

    /// Record task progress on a stage as <completed>/<total>
    Progress {
        #[arg(value_parser = clap_name_validator)]
        name: String,

        #[arg(value_parser = clap_category_validator)]
        category: String,

        /// Stage to update
        stage: String,

        /// Progress such as 3/5
        #[arg(value_name = "COMPLETED/TOTAL")]
        value: String,
    },

    /// Flag an item as delayed
    Delay {
        #[arg(value_parser = clap_name_validator)]
        name: String,

        #[arg(value_parser = clap_category_validator)]
        category: String,

        /// Clear the delayed flag instead
        #[arg(long)]
        clear: bool,
    },

    /// Delete an item's document, script and index entry
    Delete {
        #[arg(value_parser = clap_name_validator)]
        name: String,

        #[arg(value_parser = clap_category_validator)]
        category: String,
    },

    /// Move an item to another category
    Move {
        #[arg(value_parser = clap_name_validator)]
        name: String,

        /// Current category
        #[arg(value_parser = clap_category_validator)]
        category: String,

        /// Destination category
        #[arg(value_parser = clap_category_validator)]
        target: String,
    },

    /// List items in a phase, earliest publish date first
    List {
        /// Phase (ideas, started, material-done, edit-requested,
        /// publish-pending, published, delayed, sponsored-blocked)
        phase: String,

        /// Print items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show item counts per phase
    Status {
        /// Print counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// List category directories
    Categories {
        /// Print categories as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare the index against documents on disk (read-only)
    Check,

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}
