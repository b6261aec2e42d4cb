use tracing_subscriber::EnvFilter;

/// Installs the process-wide fmt subscriber, filtered by `RUST_LOG`
/// (default `info`). Logs go to stderr since stdout carries the report.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
