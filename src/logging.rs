//! Diagnostic logging (tracing) on stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `rworklogs=debug`).
pub const LOG_ENV: &str = "RWORKLOGS_LOG";

/// Install the global subscriber. `verbose` forces debug output for this crate;
/// otherwise `RWORKLOGS_LOG` applies, defaulting to warnings only.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rworklogs=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
