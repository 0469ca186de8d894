use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Command-line front end for drafting activities against a shared task pool.
///
/// Every subcommand reads the pool from `--db`, falling back to `$PLANNER_DB`
/// and then `~/.planner/tasks.json`. Activities themselves are never stored.
#[derive(Parser)]
#[command(name = "planner", version, about = "Plan activities made of dependent tasks")]
pub struct Cli {
    /// Task pool file (JSON). Overrides $PLANNER_DB.
    #[arg(long, global = true, value_name = "FILE")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
