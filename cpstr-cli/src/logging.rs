use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CPSTR_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the log subscriber, writing to stderr.
///
/// An explicit filter wins over the environment, which wins over the
/// default.
pub(crate) fn init(filter: Option<&str>) {
    let filter = match filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
