#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levelog` provides a named logger with seven fixed severity levels. Every
//! level owns a [`LevelSink`] with its own destination and message template,
//! so callers emit through the level directly:
//! `logger.notice().print("ready")`.
//!
//! # Design
//!
//! [`Logger`] holds an output threshold and a default [`Destination`].
//! Changing either re-routes the sinks: levels enabled at the threshold write
//! to the default destination, all others write to the discard destination.
//! Filtering therefore happens while configuring, and an emit call on a
//! disabled level only pays for checking its destination.
//!
//! Per-level tweaks go through the `*_mut` accessors. Destinations set that
//! way last until the next [`Logger::set_destination`] or
//! [`Logger::set_output_level`]; templates set that way last until the next
//! [`Logger::set_format`].
//!
//! # Invariants
//!
//! - A logger always has exactly seven sinks, one per [`Level`].
//! - A level writes to the default destination if and only if its severity is
//!   at or below the threshold.
//! - A failed [`Logger::set_format`] leaves every template untouched.
//!
//! # Errors
//!
//! Emitting never reports failures; use the sink's `try_*` methods for that.
//! Configuration returns [`Error`], which wraps template, time format and
//! level parse failures.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Level`] and [`LoggerConfig`].
//! - `tracing`: `LoggerLayer` and `init_tracing`, which forward `tracing`
//!   events into a shared logger.
//!
//! # Examples
//!
//! ```
//! use levelog::{Level, Logger, MemoryBuffer, log_notice};
//!
//! let out = MemoryBuffer::new();
//! let mut logger = Logger::plain("app");
//! logger.set_destination(&out);
//! logger.set_format("> {Level} {Message}")?;
//!
//! logger.notice().print("hi");
//! log_notice!(logger, "count: {}", 12306);
//! logger.debug().print("dropped");
//!
//! logger.set_output_level(Level::Error);
//! logger.notice().print("dropped too");
//!
//! assert_eq!(out.to_string_lossy(), "> NOTICE hi\n> NOTICE count: 12306\n");
//! # Ok::<(), levelog::Error>(())
//! ```

mod config;
mod error;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use error::{Error, Result};
pub use levelog_sink::{
    ANSIC, Destination, Field, Level, LevelSink, LogRecord, MemoryBuffer, PLAIN_FORMAT,
    ParseLevelError, Template, TemplateError, TemplateErrorKind, TimeFormat, TimeFormatError,
    colored_format,
};
pub use logger::Logger;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing, init_tracing_with_filter};
