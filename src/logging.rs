//! Log output for the `planner` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PLANNER_LOG=debug`.
pub const LOG_ENV: &str = "PLANNER_LOG";

/// Install a stderr subscriber filtered by `PLANNER_LOG` (default `warn`).
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
