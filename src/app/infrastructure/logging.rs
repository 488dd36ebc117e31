use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "kitab=info";

/// Install the global stderr subscriber.
///
/// `RUST_LOG` overrides the default filter. Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
