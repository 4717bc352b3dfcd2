//! crates/levelog/src/config.rs
//! Declarative logger configuration.

use crate::error::Result;
use crate::logger::Logger;
use levelog_sink::{Level, Template, TimeFormat};

/// Settings used to build or reconfigure a [`Logger`].
///
/// With the `serde` feature the configuration can be read from any serde
/// format. Missing fields take their [`Default`] values. The level is written
/// in lowercase and read with [`Level`]'s `FromStr`, so `"WARN"` and `"crit"`
/// are accepted too:
///
/// ```text
/// { "name": "worker", "output_level": "debug", "format": "{Level} {Message}" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Logger name.
    pub name: String,
    /// Output threshold.
    pub output_level: Level,
    /// Template shared by every level. The built-in templates are used when
    /// absent.
    pub format: Option<String>,
    /// `time` crate format description for `{Time}`. ANSI C layout when
    /// absent.
    pub time_format: Option<String>,
    /// Selects the per-level colorized templates over the monochrome one.
    /// Ignored when `format` is set.
    pub colorized: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            output_level: Level::Notice,
            format: None,
            time_format: None,
            colorized: true,
        }
    }
}

/// Everything a configuration needs, parsed up front.
struct Resolved {
    template: Option<Template>,
    time_format: TimeFormat,
}

impl LoggerConfig {
    /// Creates a configuration with default settings for `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parses a level name such as `"warn"` or `"DEBUG"` into
    /// [`output_level`](Self::output_level).
    pub fn set_output_level_from_str(&mut self, token: &str) -> Result<()> {
        self.output_level = token.parse()?;
        Ok(())
    }

    /// Builds a new logger from this configuration.
    pub fn build(&self) -> Result<Logger> {
        let resolved = self.resolve()?;
        let mut logger = Logger::plain(self.name.clone());
        self.install(&mut logger, resolved);
        Ok(logger)
    }

    /// Reapplies the threshold, template and time format to `logger`.
    ///
    /// The logger name and destinations are kept. All strings are parsed
    /// before the logger is touched, so on error it is left as it was.
    pub fn apply(&self, logger: &mut Logger) -> Result<()> {
        let resolved = self.resolve()?;
        self.install(logger, resolved);
        Ok(())
    }

    fn resolve(&self) -> Result<Resolved> {
        let template = self.format.as_deref().map(Template::parse).transpose()?;
        let time_format = match self.time_format.as_deref() {
            Some(description) => TimeFormat::parse(description)?,
            None => TimeFormat::ansic(),
        };
        Ok(Resolved {
            template,
            time_format,
        })
    }

    fn install(&self, logger: &mut Logger, resolved: Resolved) {
        match resolved.template {
            Some(template) => logger.set_template(&template),
            None if self.colorized => {
                for level in Level::ALL {
                    logger.sink_mut(level).set_template(Template::colored(level));
                }
            }
            None => logger.set_template(&Template::plain()),
        }
        logger.set_time_format(resolved.time_format);
        logger.set_output_level(self.output_level);
    }
}

impl Logger {
    /// Builds a logger from `config`.
    ///
    /// Equivalent to [`LoggerConfig::build`].
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelog_sink::{MemoryBuffer, PLAIN_FORMAT};

    #[test]
    fn default_config_matches_new_logger() {
        let logger = LoggerConfig::new("svc").build().expect("valid config");

        assert_eq!(logger.name(), "svc");
        assert_eq!(logger.output_level(), Level::Notice);
        for sink in logger.sinks() {
            assert!(sink.template().same_as(&Template::colored(sink.level())));
        }
    }

    #[test]
    fn monochrome_config_uses_plain_template() {
        let config = LoggerConfig {
            colorized: false,
            ..LoggerConfig::new("svc")
        };
        let logger = Logger::from_config(&config).expect("valid config");

        for sink in logger.sinks() {
            assert_eq!(sink.template().source(), PLAIN_FORMAT);
        }
    }

    #[test]
    fn format_overrides_colorized() {
        let config = LoggerConfig {
            format: Some("{Level}|{Message}".to_owned()),
            colorized: true,
            ..LoggerConfig::new("svc")
        };
        let logger = config.build().expect("valid config");

        for sink in logger.sinks() {
            assert_eq!(sink.template().source(), "{Level}|{Message}");
        }
    }

    #[test]
    fn invalid_time_format_is_reported() {
        let config = LoggerConfig {
            time_format: Some("[hour".to_owned()),
            ..LoggerConfig::new("svc")
        };

        let error = config.build().expect_err("bad description");
        assert!(matches!(error, crate::Error::TimeFormat(_)));
    }

    #[test]
    fn apply_is_atomic() {
        let buffer = MemoryBuffer::new();
        let mut logger = Logger::with_format("svc", "{Message}").expect("valid");
        logger.set_destination(&buffer);

        let config = LoggerConfig {
            output_level: Level::Debug,
            format: Some("{Message}".to_owned()),
            time_format: Some("[nope]".to_owned()),
            ..LoggerConfig::default()
        };
        assert!(config.apply(&mut logger).is_err());

        assert_eq!(logger.output_level(), Level::Notice);
        assert!(logger.debug().is_discarding());
    }

    #[test]
    fn apply_keeps_name_and_destination() {
        let buffer = MemoryBuffer::new();
        let mut logger = Logger::plain("svc");
        logger.set_destination(&buffer);

        let config = LoggerConfig {
            name: "ignored".to_owned(),
            output_level: Level::Info,
            format: Some("{Level}: {Message}".to_owned()),
            time_format: Some("[hour]:[minute]".to_owned()),
            colorized: false,
        };
        config.apply(&mut logger).expect("valid config");
        logger.info().print("hello");

        assert_eq!(logger.name(), "svc");
        assert_eq!(logger.time_format().description(), "[hour]:[minute]");
        assert_eq!(buffer.to_string_lossy(), "INFO: hello\n");
    }

    #[test]
    fn output_level_from_str_accepts_aliases() {
        let mut config = LoggerConfig::default();

        config.set_output_level_from_str("warning").expect("alias");
        assert_eq!(config.output_level, Level::Warning);
        config.set_output_level_from_str("CRIT").expect("name");
        assert_eq!(config.output_level, Level::Critical);

        let error = config.set_output_level_from_str("loud").expect_err("unknown");
        assert!(matches!(error, crate::Error::Level(_)));
        assert_eq!(config.output_level, Level::Critical);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_json() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"name":"worker","output_level":"debug"}"#)
                .expect("valid json");

        assert_eq!(config.name, "worker");
        assert_eq!(config.output_level, Level::Debug);
        assert!(config.colorized);
        assert_eq!(config.format, None);
    }
}
