use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "hiit")]
#[command(about = "A terminal interval-training timer", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Path to the routines file (or set HIIT_FILE env var)
    #[arg(long, short = 'f', value_name = "FILE", env = "HIIT_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Prefix for navigation paths (or set HIIT_BASE_PATH env var)
    #[arg(long, value_name = "PATH", env = "HIIT_BASE_PATH", global = true)]
    pub base_path: Option<String>,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Routine operations
    Routine(RoutineCommand),
    /// Item operations
    Item(ItemCommand),
    /// Open the TUI on a navigation path such as /<id>/play
    Open {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Routine commands
#[derive(Args)]
pub struct RoutineCommand {
    #[command(subcommand)]
    pub action: RoutineAction,
}

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Create a new routine
    Create {
        #[arg(long)]
        name: Option<String>,
    },
    /// List all routines
    List,
    /// Get a specific routine
    Get {
        #[arg(long)]
        id: String,
    },
    /// Rename a routine
    Rename {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a routine
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Move a routine to another routine's position
    Move {
        #[arg(long)]
        id: String,
        /// Id of the routine whose position to take
        #[arg(long)]
        to: String,
    },
}

// Item commands
#[derive(Args)]
pub struct ItemCommand {
    #[command(subcommand)]
    pub action: ItemAction,
}

#[derive(Subcommand)]
pub enum ItemAction {
    /// Append an item to a routine
    Add(ItemAddArgs),
    /// List the items of a routine
    List {
        #[arg(long)]
        routine_id: String,
    },
    /// Update an item
    Update(ItemUpdateArgs),
    /// Delete an item
    Delete {
        #[arg(long)]
        routine_id: String,
        #[arg(long)]
        id: String,
    },
    /// Move an item to another item's position
    Move {
        #[arg(long)]
        routine_id: String,
        #[arg(long)]
        id: String,
        /// Id of the item whose position to take
        #[arg(long)]
        to: String,
    },
}

#[derive(Args)]
pub struct ItemAddArgs {
    #[arg(long)]
    pub routine_id: String,
    #[arg(long)]
    pub name: Option<String>,
    /// Seconds, clamped to 1..=5999
    #[arg(long, allow_hyphen_values = true)]
    pub duration: Option<String>,
    /// Do not flash near the end of this item
    #[arg(long)]
    pub no_flash: bool,
}

#[derive(Args)]
pub struct ItemUpdateArgs {
    #[arg(long)]
    pub routine_id: String,
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    /// Seconds, clamped to 1..=5999
    #[arg(long, allow_hyphen_values = true)]
    pub duration: Option<String>,
    #[arg(long)]
    pub flash: Option<bool>,
}
