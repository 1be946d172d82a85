//! Diagnostic logging.
//!
//! Logs go to stderr through `tracing`. The filter comes from `RYOMEN_LOG`
//! (e.g. `RYOMEN_LOG=ryomen=debug`) and defaults to warnings only, or errors
//! only in quiet mode.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "RYOMEN_LOG";

const fn default_directive(quiet: bool) -> &'static str {
    if quiet { "error" } else { "warn" }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(quiet: bool, no_color: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .try_init();
}
