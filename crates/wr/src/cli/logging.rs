//! Diagnostic logging setup.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "WR_LOG";

/// Installs the global subscriber, writing to stderr.
///
/// `-v` selects `debug` and `-vv` selects `trace`. Without flags the filter comes
/// from `WR_LOG`, falling back to `warn`.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
