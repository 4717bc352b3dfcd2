use super::LevelSink;
use crate::destination::Destination;
use crate::level::Level;
use crate::template::Template;
use crate::time_format::TimeFormat;

impl LevelSink {
    /// Creates a sink writing plain lines with ANSI C timestamps to standard
    /// output.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self::with_parts(
            level,
            Destination::stdout(),
            Template::plain(),
            TimeFormat::ansic(),
        )
    }

    /// Creates a sink from explicit parts.
    #[must_use]
    pub const fn with_parts(
        level: Level,
        destination: Destination,
        template: Template,
        time_format: TimeFormat,
    ) -> Self {
        Self {
            level,
            destination,
            template,
            time_format,
        }
    }

    /// Consumes the sink and returns its destination, template and time format.
    #[must_use]
    pub fn into_parts(self) -> (Destination, Template, TimeFormat) {
        (self.destination, self.template, self.time_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let sink = LevelSink::new(Level::Info);
        assert_eq!(sink.level(), Level::Info);
        assert!(sink.destination().same_as(&Destination::stdout()));
        assert!(sink.template().same_as(&Template::plain()));
        assert_eq!(sink.time_format().description(), crate::ANSIC);
        assert!(!sink.is_discarding());
    }

    #[test]
    fn into_parts_returns_what_with_parts_took() {
        let template = Template::parse("{Message}").unwrap();
        let sink = LevelSink::with_parts(
            Level::Fatal,
            Destination::discard(),
            template.clone(),
            TimeFormat::rfc3339(),
        );
        assert!(sink.is_discarding());

        let (destination, returned, time_format) = sink.into_parts();
        assert!(destination.is_discard());
        assert!(returned.same_as(&template));
        assert_eq!(time_format.description(), "rfc3339");
    }
}
