#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/levelog-sink/src/lib.rs
//!
//! # Overview
//!
//! `levelog-sink` provides the per-level building blocks of the `levelog`
//! logger: the seven [`Level`]s, the [`Destination`] handles log lines are
//! written to, the [`Template`] that turns a [`LogRecord`] into text, the
//! [`TimeFormat`] used for timestamps, and [`LevelSink`], which ties one level
//! to one destination and one template.
//!
//! # Design
//!
//! A [`LevelSink`] is always ready to write: every constructor installs a
//! destination, a template and a time format. Emitting a line renders the
//! template into a single buffer, appends `"\n"`, and hands the complete line
//! to the destination in one `write_all` call.
//!
//! # Invariants
//!
//! - Level ordering is fixed: `FATAL < CRITICAL < ERROR < WARNING < NOTICE <
//!   INFO < DEBUG`, where a lower value is more severe.
//! - Templates reject unknown placeholders at parse time, so rendering never
//!   fails.
//! - Destinations are never closed by a sink.
//!
//! # Errors
//!
//! [`LevelSink::print`] and friends swallow write failures so logging never
//! disrupts the caller. The `try_*` variants surface the underlying
//! [`std::io::Error`] instead.
//!
//! # Examples
//!
//! ```
//! use levelog_sink::{Level, LevelSink, MemoryBuffer, Template};
//!
//! let buffer = MemoryBuffer::new();
//! let template = Template::parse("[{Level}] {Message}").unwrap();
//! let mut sink = LevelSink::new(Level::Warning);
//! sink.set_destination(buffer.destination());
//! sink.set_template(template);
//!
//! sink.print("disk almost full");
//! sink.printf(format_args!("{} bytes left", 512));
//!
//! assert_eq!(
//!     buffer.to_string_lossy(),
//!     "[WARN] disk almost full\n[WARN] 512 bytes left\n"
//! );
//! ```

mod destination;
mod level;
mod record;
mod sink;
mod template;
mod time_format;

pub use destination::{Destination, MemoryBuffer};
pub use level::{Level, ParseLevelError};
pub use record::LogRecord;
pub use sink::LevelSink;
pub use template::{
    Field, PLAIN_FORMAT, Template, TemplateError, TemplateErrorKind, colored_format,
};
pub use time_format::{ANSIC, TimeFormat, TimeFormatError};
