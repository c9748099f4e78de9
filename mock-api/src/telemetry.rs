//! Log output for the mock server. `RUST_LOG` overrides the default filter
//! given by the caller.

use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Compact stderr lines, one per event, plus a line when each request span
/// closes.
pub fn get_subscriber(
    default_filter: &str,
) -> impl Subscriber + Send + Sync + use<> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .with_span_events(fmt::format::FmtSpan::CLOSE);
    Registry::default().with(filter).with(stderr)
}

/// Install `subscriber` globally and forward `log` records to it. Fails if
/// either was already installed.
pub fn init_subscriber(
    subscriber: impl Subscriber + Send + Sync,
) -> anyhow::Result<()> {
    LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
