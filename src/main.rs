//! # planner
//!
//! Command-line driver for the activity planning core.
//!
//! ```bash
//! # Build a small task pool
//! planner task add "Collect sources"
//! planner task add "Draft outline" --depends 1
//! planner task done 1
//!
//! # See which tasks a new activity could use
//! planner activity options
//!
//! # Check a draft, then create it
//! planner activity check --name "Essay" --quantity 3 --duration 90 --quantity-type Pages --task 2
//! planner activity new --name "Essay" --quantity 3 --duration 90 --date friday \
//!     --quantity-type Pages --task 2 > essay.json
//!
//! # Change the tasks on an existing activity
//! planner activity edit essay.json --remove 2 --add 1
//! ```
//!
//! Set `PLANNER_LOG=debug` to see readiness transitions on stderr.

use clap::Parser;

use activity_planner::cli::Cli;
use activity_planner::cmd::run;
use activity_planner::db::resolve_db_path;
use activity_planner::logging;

fn main() {
    logging::init();
    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db);

    if let Err(e) = run(cli.command, &db_path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
