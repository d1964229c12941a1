//! Logging setup shared by the desktop app and the CLI.

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count: warn, info, debug, then trace
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this again after a
/// subscriber is installed does nothing.
pub fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("Logging already initialized");
    }
}
