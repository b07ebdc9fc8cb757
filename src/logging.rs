//! Tracing setup for the `shapes` binary.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Settings;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber when a log filter is configured.
///
/// Safe to call more than once; only the first call has any effect. An
/// invalid directive falls back to `warn` instead of aborting the run.
pub fn init_tracing(settings: &Settings) {
    let Some(directive) = settings.log_filter.as_deref() else {
        return;
    };

    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
