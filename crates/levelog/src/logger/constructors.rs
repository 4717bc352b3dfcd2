use super::Logger;
use crate::error::Result;
use levelog_sink::{Destination, Level, LevelSink, Template, TimeFormat};

impl Logger {
    /// Creates a logger with the colorized default template on every level.
    ///
    /// The threshold is [`Level::Notice`] and lines go to standard output.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut logger = Self::plain(name);
        for sink in &mut logger.sinks {
            sink.set_template(Template::colored(sink.level()));
        }
        logger
    }

    /// Creates a logger with the monochrome default template,
    /// `{Time} [{Level}] {Message}`.
    ///
    /// The threshold is [`Level::Notice`] and lines go to standard output.
    #[must_use]
    pub fn plain(name: impl Into<String>) -> Self {
        Self::assemble(name.into(), Template::plain())
    }

    /// Creates a logger whose sinks all share the template parsed from
    /// `format`.
    ///
    /// Unlike [`new`](Self::new) and [`plain`](Self::plain), the format comes
    /// from the caller, so a parse failure is returned instead of treated as a
    /// bug.
    pub fn with_format(name: impl Into<String>, format: &str) -> Result<Self> {
        let template = Template::parse(format)?;
        Ok(Self::assemble(name.into(), template))
    }

    fn assemble(name: String, template: Template) -> Self {
        let time_format = TimeFormat::ansic();
        let sinks = Level::ALL.map(|level| {
            LevelSink::with_parts(
                level,
                Destination::discard(),
                template.clone(),
                time_format.clone(),
            )
        });

        let mut logger = Self {
            name,
            output_level: Level::default(),
            default_destination: Destination::stdout(),
            time_format,
            sinks,
        };
        logger.set_destination(Destination::stdout());
        logger
    }
}
