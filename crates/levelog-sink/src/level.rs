//! crates/levelog-sink/src/level.rs
//! Severity levels and the threshold visibility rule.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log line.
///
/// Variants are declared from most to least severe, so the derived ordering
/// matches the numeric severity: `Fatal` (0) is the smallest value and `Debug`
/// (6) the largest. A level is visible at a threshold when its severity is
/// less than or equal to the threshold's (see [`Level::is_enabled_at`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// Unrecoverable failures.
    Fatal = 0,
    /// Critical conditions.
    Critical = 1,
    /// Error conditions.
    Error = 2,
    /// Warning conditions.
    Warning = 3,
    /// Normal but significant events. The default threshold.
    #[default]
    Notice = 4,
    /// Informational messages.
    Info = 5,
    /// Debug-level chatter.
    Debug = 6,
}

impl Level {
    /// Number of severity levels.
    pub const COUNT: usize = 7;

    /// Every level, ordered from most to least severe.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Fatal,
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the numeric severity. Lower is more severe.
    #[must_use]
    pub const fn severity(self) -> u8 {
        self as u8
    }

    /// Returns the position of the level in [`Level::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a level by numeric severity.
    #[must_use]
    pub const fn from_severity(severity: u8) -> Option<Self> {
        match severity {
            0 => Some(Self::Fatal),
            1 => Some(Self::Critical),
            2 => Some(Self::Error),
            3 => Some(Self::Warning),
            4 => Some(Self::Notice),
            5 => Some(Self::Info),
            6 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns the name rendered into the `{Level}` placeholder.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Critical => "CRIT",
            Self::Fatal => "FATAL",
        }
    }

    /// Reports whether a line at this level reaches the real destination when
    /// the logger's output threshold is `threshold`.
    ///
    /// ```
    /// use levelog_sink::Level;
    ///
    /// assert!(Level::Error.is_enabled_at(Level::Notice));
    /// assert!(Level::Notice.is_enabled_at(Level::Notice));
    /// assert!(!Level::Debug.is_enabled_at(Level::Notice));
    /// ```
    #[must_use]
    pub const fn is_enabled_at(self, threshold: Self) -> bool {
        self.severity() <= threshold.severity()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a [`Level`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level `{name}`")]
pub struct ParseLevelError {
    name: String,
}

impl ParseLevelError {
    /// Returns the rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name, ignoring ASCII case and surrounding whitespace.
    ///
    /// Both the display names (`WARN`, `CRIT`) and the long forms (`warning`,
    /// `critical`) are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let level = match trimmed.to_ascii_lowercase().as_str() {
            "fatal" => Self::Fatal,
            "crit" | "critical" => Self::Critical,
            "error" => Self::Error,
            "warn" | "warning" => Self::Warning,
            "notice" => Self::Notice,
            "info" => Self::Info,
            "debug" => Self::Debug,
            _ => {
                return Err(ParseLevelError {
                    name: trimmed.to_owned(),
                });
            }
        };
        Ok(level)
    }
}

/// Accepts every spelling [`FromStr`] does, so configuration files may use
/// `"warn"` or `"CRIT"` as well as the lowercase variant names written by
/// `Serialize`.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
