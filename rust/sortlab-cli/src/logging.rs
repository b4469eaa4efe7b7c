//! `tracing` subscriber setup. Logs go to stderr so reports on stdout stay
//! machine-readable.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `sortlab=debug`.
pub const LOG_ENV: &str = "SORTLAB_LOG";

/// Filter directive for a `-v` count.
pub fn default_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!(
        "sortlab={level},sortlab_cli={level},sortlab_core={level}",
        level = level
    )
}

/// Install the global subscriber. `SORTLAB_LOG` wins over `verbose`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    // a subscriber may already be installed (tests); keep the first one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
