/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate, filtered through the
/// `RUST_LOG` environment variable:
/// - `RUST_LOG=info` - lifecycle events and successful registrations
/// - `RUST_LOG=debug` - every request the registry receives
/// - `RUST_LOG=registry_sample=debug` - debug only for this crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
