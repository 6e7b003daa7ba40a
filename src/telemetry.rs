//! Telemetry helpers for hosts embedding `inventory-charts`.
//!
//! The presenter and renderers only emit `tracing` events. Hosts either call
//! `init_default_tracing` or install their own subscriber and filters.

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
/// Returns `false` when the feature is disabled or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
