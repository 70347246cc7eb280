//! Tracing subscriber setup for the command-line tool
//!
//! Events go to stderr so they never mix with the output document. The
//! filter comes from `RUST_LOG` when set, otherwise from the verbosity flag.

use crate::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Build the event filter for the given verbosity
pub fn build_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global stderr subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
