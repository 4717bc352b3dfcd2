use super::LevelSink;
use crate::destination::Destination;
use crate::template::Template;
use crate::time_format::TimeFormat;
use std::mem;

impl LevelSink {
    /// Replaces the destination.
    ///
    /// No check is made that the destination is usable; a broken destination
    /// only shows up as a failed write later.
    pub fn set_destination(&mut self, destination: impl Into<Destination>) {
        self.destination = destination.into();
    }

    /// Replaces the destination and returns the previous one.
    #[must_use = "the returned destination is the one previously in use"]
    pub fn replace_destination(&mut self, destination: impl Into<Destination>) -> Destination {
        mem::replace(&mut self.destination, destination.into())
    }

    /// Replaces the template.
    pub fn set_template(&mut self, template: Template) {
        self.template = template;
    }

    /// Replaces the time format used for `{Time}`.
    ///
    /// Inside a `Logger` this is a per-level override: the logger's
    /// `set_time_format` reassigns the time format of every sink.
    pub fn set_time_format(&mut self, time_format: TimeFormat) {
        self.time_format = time_format;
    }
}
