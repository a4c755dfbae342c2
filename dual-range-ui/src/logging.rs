//! Tracing initialisation for hosts and demos.

/// Installs a `tracing` subscriber for the process.
///
/// The filter is read from `RUST_LOG`; without it only errors and
/// component-level info are shown. Calling this more than once is harmless.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,dual_range_ui=info,dual_range_components=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
