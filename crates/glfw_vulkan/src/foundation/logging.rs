//! Logging setup for hosts embedding the bridge
//!
//! The bridge itself only uses the `log` facade; hosts that have no logger of
//! their own can install `env_logger` through these helpers.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    // A host may already have installed a logger
    let _ = env_logger::try_init();
}

/// Initialize the logging system with a default level
///
/// `RUST_LOG` still takes precedence when set.
pub fn init_with_level(level: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .try_init();
}
