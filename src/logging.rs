use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. Output goes to stderr so that
/// stdout only carries what the tool produces; `RUST_LOG` overrides the
/// default `warn` level.
pub fn init() -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
