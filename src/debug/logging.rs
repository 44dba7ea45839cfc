//! Tracing subscriber installation.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the filter directives read by
/// [`install_tracing`], for example `CASCADE_LOG=cascade=trace`.
pub const LOG_ENV: &str = "CASCADE_LOG";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();

/// Installs a `fmt` subscriber filtered by [`LOG_ENV`] (idempotent).
///
/// Falls back to `info` when the variable is unset or invalid. Does nothing
/// if a global subscriber is already installed.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(DEFAULT_LOG_LEVEL.into())
            .with_env_var(LOG_ENV)
            .from_env_lossy();
        install(filter);
    });
}

/// Installs a `fmt` subscriber with explicit filter `directives` (idempotent).
///
/// Invalid directives are skipped.
pub fn install_tracing_with(directives: &str) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(DEFAULT_LOG_LEVEL.into())
            .parse_lossy(directives);
        install(filter);
    });
}

fn install(filter: EnvFilter) {
    let console = fmt::layer().with_target(true).with_filter(filter);
    // another global subscriber wins; that is not an error for a library
    let _ = tracing_subscriber::registry().with(console).try_init();
}
