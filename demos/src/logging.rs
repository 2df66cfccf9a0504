//! Log output for the demo binary.
//!
//! The library crates log through the `log` facade. `tracing-subscriber`
//! bridges those records (via its default `tracing-log` feature) and prints
//! them to stderr, filtered by the `WAVEPATH_LOG` environment variable
//! (e.g. `WAVEPATH_LOG=debug` or `WAVEPATH_LOG=wavepath_paths=trace`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "WAVEPATH_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Build the filter from `directives`, falling back to `warn` when they are
/// missing or do not parse.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the stderr subscriber. Stdout stays reserved for the map.
pub fn init() {
    let directives = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(directives.as_deref()))
        .try_init();
}
