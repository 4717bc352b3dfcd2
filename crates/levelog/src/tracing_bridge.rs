//! crates/levelog/src/tracing_bridge.rs
//! Bridge between the tracing crate and a [`Logger`].
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that renders each event's
//! message and fields into one line and prints it through the sink matching
//! the event level. The logger's own threshold decides whether the line is
//! kept, exactly as for direct calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::{Arc, Mutex};
//! use levelog::{Logger, init_tracing};
//!
//! let logger = Arc::new(Mutex::new(Logger::new("app")));
//! init_tracing(Arc::clone(&logger))?;
//!
//! tracing::warn!(path = "/tmp/x", "disk almost full");
//! ```

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, PoisonError};

use levelog_sink::Level;
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::logger::Logger;

/// A tracing layer that forwards events to a shared [`Logger`].
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    logger: Arc<Mutex<Logger>>,
}

impl LoggerLayer {
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Mutex<Logger>>) -> Self {
        Self { logger }
    }

    /// Returns the shared logger.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Mutex<Logger>> {
        &self.logger
    }

    /// Map a tracing level to a logger level.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
        }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(event.metadata().level());
        let logger = self.logger.lock().unwrap_or_else(PoisonError::into_inner);
        let sink = logger.sink(level);
        if sink.is_discarding() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        sink.print(visitor.finish());
    }
}

/// Collects the `message` field followed by the remaining fields as
/// ` name=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(mut self) -> String {
        self.message.push_str(&self.fields);
        self.message
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Installs a [`LoggerLayer`] for `logger` as the global default subscriber.
///
/// Fails when a global subscriber is already set.
pub fn init_tracing(logger: Arc<Mutex<Logger>>) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .try_init()
}

/// Installs a [`LoggerLayer`] behind an additional filter layer, such as
/// `tracing_subscriber::EnvFilter`.
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(logger, EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(
    logger: Arc<Mutex<Logger>>,
    filter: F,
) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::new(logger))
        .try_init()
}
