//! Diagnostic logging to stderr, enabled through `RUST_LOG`.

use tracing_subscriber::prelude::*;

/// Installs a stderr subscriber when `RUST_LOG` is set.
///
/// Returns `true` if a subscriber was installed. Standard output is left
/// untouched in every case.
pub fn init() -> bool {
    if std::env::var("RUST_LOG").is_err() {
        return false;
    }

    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let init_result = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    if let Err(err) = init_result {
        tracing::warn!(error = %err, "tracing already initialized; skipping env tracing setup");
    }
    true
}
