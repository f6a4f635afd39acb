//! Tracing subscriber setup shared by all binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `name` is the binary name (used as the default filter target) and
/// `default_level` is the level applied when `RUST_LOG` is not set.
pub fn setup_logger(name: &str, default_level: &str) {
    // Cargo bin names use dashes, tracing targets use underscores
    let target = name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{target}={default_level},tower_http={default_level}"))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::debug!("Logger initialized for '{}'", name);
}
