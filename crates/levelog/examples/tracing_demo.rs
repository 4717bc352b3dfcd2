//! Routes `tracing` events through a colorized logger on standard error.
//!
//! Run with `cargo run -p levelog --example tracing_demo --features tracing`.
//! Set `RUST_LOG` to filter events before they reach the logger.

use std::error::Error;
use std::sync::{Arc, Mutex};

use levelog::{Destination, Level, Logger, init_tracing_with_filter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let mut logger = Logger::new("demo");
    logger.set_destination(Destination::stderr());
    logger.set_output_level(Level::Debug);

    let logger = Arc::new(Mutex::new(logger));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    init_tracing_with_filter(Arc::clone(&logger), filter)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    tracing::debug!(items = 3, "loaded queue");
    tracing::warn!("queue is nearly full");
    tracing::error!(code = 42, "worker crashed");

    logger
        .lock()
        .map_err(|_| "logger lock poisoned")?
        .set_output_level(Level::Warning);
    tracing::info!("not shown after raising the threshold");
    tracing::warn!("still shown");

    Ok(())
}
