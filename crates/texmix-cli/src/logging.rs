//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `filter`.
///
/// An unparsable filter falls back to `info` with a warning.
pub fn init(filter: &str) {
    let (env_filter, invalid) = match EnvFilter::try_new(filter) {
        Ok(f) => (f, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();
    if let (true, Some(e)) = (installed, invalid) {
        tracing::warn!("invalid log filter {filter:?}: {e}");
    }
}
