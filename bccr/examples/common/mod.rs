use bccr::BccrConnector;
use std::sync::Arc;

/// Fixture-backed connector; there is no live transport in this workspace.
#[must_use]
pub fn get_connector() -> Arc<dyn BccrConnector> {
    Arc::new(bccr_mock::MockConnector::new())
}

/// Log to stderr, filtered by `RUST_LOG` (e.g. `RUST_LOG=bccr=debug`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
