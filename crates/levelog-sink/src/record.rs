//! crates/levelog-sink/src/record.rs
//! The per-call value a template renders.

use crate::template::Field;

/// One log line before rendering.
///
/// Records borrow everything they show and live only for a single render.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogRecord<'a> {
    time: &'a str,
    level: &'a str,
    message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Creates a record from already formatted parts.
    #[must_use]
    pub const fn new(time: &'a str, level: &'a str, message: &'a str) -> Self {
        Self {
            time,
            level,
            message,
        }
    }

    /// Timestamp text.
    #[must_use]
    pub const fn time(&self) -> &'a str {
        self.time
    }

    /// Level display name.
    #[must_use]
    pub const fn level(&self) -> &'a str {
        self.level
    }

    /// Message body.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Returns the text substituted for `field`.
    #[must_use]
    pub const fn field(&self, field: Field) -> &'a str {
        match field {
            Field::Time => self.time,
            Field::Level => self.level,
            Field::Message => self.message,
        }
    }
}
