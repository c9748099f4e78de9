//! Browser console logging.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

const DEFAULT_FILTER: &str = "error,ui=debug,client=debug";

/// Install the console subscriber. The filter can be replaced at build time
/// through UI_LOG.
pub fn init_logging() {
    let filter = option_env!("UI_LOG").unwrap_or(DEFAULT_FILTER);

    // no clock on wasm32
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(console)
        .init();

    tracing::debug!(filter, "console logging ready");
}
