//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Sets up logging of the events reported by this crate.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to log only the content pointer decoder:
///   RUST_LOG=ens_attributes::multicodec=DEBUG
///
/// Calling this again after logging has been set up has no effect.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
