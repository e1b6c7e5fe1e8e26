//! Tracing (logging)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise tracing (logging)
///
/// Filters events based on the `RUST_LOG` environment variable, falling back
/// to debug level for this crate when it is not set.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "searise=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
