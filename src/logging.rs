//! Logging configuration.
//!
//! Tracing-based logging with a quiet `info` default; `RUST_LOG` overrides
//! the filter for debugging sessions.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging system. Called once at application startup.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fair_validator=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false),
    );

    // Ignore the error if a subscriber is already installed (tests).
    let _ = subscriber.try_init();
}
