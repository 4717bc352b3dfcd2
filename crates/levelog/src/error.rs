//! crates/levelog/src/error.rs
//! Errors reported while configuring a logger.

use levelog_sink::{ParseLevelError, TemplateError, TimeFormatError};
use thiserror::Error;

/// Failure to configure a [`Logger`](crate::Logger).
///
/// Emitting lines never fails visibly; only configuration does.
#[derive(Clone, Debug, Error)]
pub enum Error {
    /// A message format string could not be parsed.
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// A time format description could not be parsed.
    #[error(transparent)]
    TimeFormat(#[from] TimeFormatError),
    /// A string did not name a severity level.
    #[error(transparent)]
    Level(#[from] ParseLevelError),
}

/// Result alias for logger configuration.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use levelog_sink::{Level, Template, TimeFormat};

    #[test]
    fn wraps_leaf_errors_transparently() {
        let template = Template::parse("{Nope}").expect_err("unknown placeholder");
        let error = Error::from(template.clone());
        assert_eq!(error.to_string(), template.to_string());

        let level = "loud".parse::<Level>().expect_err("unknown level");
        assert_eq!(Error::from(level).to_string(), "unknown log level `loud`");

        let time = TimeFormat::parse("[hour").expect_err("unterminated");
        assert!(matches!(Error::from(time), Error::TimeFormat(_)));
    }
}
