//! Diagnostics for the `passgen` binary.
//!
//! Logs go to stderr so that stdout carries nothing but the generated
//! secrets. Filtering follows `RUST_LOG` and defaults to `warn`. Secrets are
//! never logged at any level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global `tracing` subscriber.
///
/// Library spans and events are only emitted when the `tracing` feature is
/// enabled; without it the subscriber stays silent.
pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_line_number(true),
        )
        .try_init()?;
    Ok(())
}
