use std::fmt;

use crate::destination::Destination;
use crate::level::Level;
use crate::template::Template;
use crate::time_format::TimeFormat;

/// One severity level's destination and template.
///
/// A sink renders every line through its current [`Template`], timestamps it
/// with its current [`TimeFormat`], and writes the result plus `"\n"` to its
/// current [`Destination`]. The level is fixed at construction; everything
/// else can be replaced at any time and stays replaced until something
/// overwrites it again.
///
/// # Examples
///
/// ```
/// use levelog_sink::{Level, LevelSink, MemoryBuffer, Template};
///
/// let buffer = MemoryBuffer::new();
/// let sink = LevelSink::with_parts(
///     Level::Error,
///     buffer.destination(),
///     Template::parse("{Level}: {Message}").unwrap(),
///     Default::default(),
/// );
///
/// sink.print_all(["disk ", "full"]);
/// assert_eq!(buffer.to_string_lossy(), "ERROR: disk full\n");
/// ```
#[derive(Clone)]
pub struct LevelSink {
    level: Level,
    destination: Destination,
    template: Template,
    time_format: TimeFormat,
}

mod configure;
mod constructors;
mod writing;

impl LevelSink {
    /// Returns the fixed level of this sink.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Borrows the current destination.
    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Borrows the current template.
    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.template
    }

    /// Borrows the current time format.
    #[must_use]
    pub const fn time_format(&self) -> &TimeFormat {
        &self.time_format
    }

    /// Reports whether lines written to this sink are dropped.
    #[must_use]
    pub const fn is_discarding(&self) -> bool {
        self.destination.is_discard()
    }
}

impl fmt::Debug for LevelSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelSink")
            .field("level", &self.level)
            .field("destination", &self.destination)
            .field("template", &self.template)
            .field("time_format", &self.time_format)
            .finish()
    }
}
