//! Logger setup for the binary and tests

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the global logger.
///
/// `verbose` lowers the default filter from info to debug. `RUST_LOG`
/// overrides both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());

    // A second call (tests, embedding) keeps the first logger.
    let _ = Builder::from_env(env).format_timestamp_millis().try_init();
}
