//! Built-in templates installed by the logger constructors.

use std::sync::OnceLock;

use super::Template;
use crate::level::Level;

/// Monochrome default format.
pub const PLAIN_FORMAT: &str = "{Time} [{Level}] {Message}";

/// Returns the colorized default format for `level`.
///
/// The level tag and message are wrapped in an ANSI color sequence and a
/// trailing reset: white for DEBUG, green for INFO, blue for NOTICE, yellow for
/// WARNING, red for ERROR, magenta for CRITICAL and black on red for FATAL.
#[must_use]
pub const fn colored_format(level: Level) -> &'static str {
    match level {
        Level::Debug => "{Time} \x1b[37m[{Level}] {Message} \x1b[0m",
        Level::Info => "{Time} \x1b[32m[{Level}] {Message} \x1b[0m",
        Level::Notice => "{Time} \x1b[34m[{Level}] {Message} \x1b[0m",
        Level::Warning => "{Time} \x1b[33m[{Level}] {Message} \x1b[0m",
        Level::Error => "{Time} \x1b[31m[{Level}] {Message} \x1b[0m",
        Level::Critical => "{Time} \x1b[35m[{Level}] {Message} \x1b[0m",
        Level::Fatal => "{Time} \x1b[30;41m[{Level}] {Message} \x1b[0m",
    }
}

fn builtin(source: &'static str) -> Template {
    Template::parse(source)
        .unwrap_or_else(|error| panic!("built-in template {source:?} is invalid: {error}"))
}

impl Template {
    /// Returns the shared monochrome default template.
    #[must_use]
    pub fn plain() -> Self {
        static PLAIN: OnceLock<Template> = OnceLock::new();
        PLAIN.get_or_init(|| builtin(PLAIN_FORMAT)).clone()
    }

    /// Returns the shared colorized default template for `level`.
    #[must_use]
    pub fn colored(level: Level) -> Self {
        static COLORED: OnceLock<[Template; Level::COUNT]> = OnceLock::new();
        COLORED.get_or_init(|| Level::ALL.map(|each| builtin(colored_format(each))))
            [level.index()]
        .clone()
    }
}
