//! # Buildkit Logging Setup
//!
//! File: cli/src/core/logging.rs
//! Author: Christi Mahu
//!
//! Installs the global `tracing` subscriber. Logs go to stderr so that the
//! status lines printed on stdout stay readable for the build orchestrator.
//! `RUST_LOG` wins over the `-v` count when set.
//!
use tracing_subscriber::{fmt, EnvFilter};

/// Maps the `-v` count to a default filter directive.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes logging. Safe to call more than once; later calls are ignored.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
