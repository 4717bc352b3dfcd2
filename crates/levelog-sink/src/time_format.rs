//! crates/levelog-sink/src/time_format.rs
//! Timestamp layouts for the `{Time}` placeholder.

use std::fmt;
use std::io;
use std::sync::{Arc, OnceLock};

use thiserror::Error;
use time::OffsetDateTime;
use time::error::InvalidFormatDescription;
use time::format_description::OwnedFormatItem;
use time::format_description::well_known::Rfc3339;

/// Format description of the ANSI C clock layout, `Mon Jan  2 15:04:05 2006`.
pub const ANSIC: &str = "[weekday repr:short] [month repr:short] [day padding:space] [hour]:[minute]:[second] [year]";

/// Error returned when a time format description cannot be parsed.
#[derive(Clone, Debug, Error)]
#[error("invalid time format `{description}`: {source}")]
pub struct TimeFormatError {
    description: String,
    #[source]
    source: InvalidFormatDescription,
}

impl TimeFormatError {
    /// Returns the rejected description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Layout used to render timestamps.
///
/// Descriptions use the `time` crate's format description syntax, for
/// example `[hour]:[minute]:[second]`. Clones share the parsed layout.
#[derive(Clone)]
pub struct TimeFormat {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Described {
        description: Arc<str>,
        items: Arc<OwnedFormatItem>,
    },
    Rfc3339,
}

impl TimeFormat {
    /// Parses a format description.
    pub fn parse(description: &str) -> Result<Self, TimeFormatError> {
        let items = time::format_description::parse_owned::<1>(description).map_err(|source| {
            TimeFormatError {
                description: description.to_owned(),
                source,
            }
        })?;
        Ok(Self {
            repr: Repr::Described {
                description: description.into(),
                items: Arc::new(items),
            },
        })
    }

    /// Returns the shared ANSI C layout, the logger default.
    #[must_use]
    pub fn ansic() -> Self {
        static ANSIC_FORMAT: OnceLock<TimeFormat> = OnceLock::new();
        ANSIC_FORMAT
            .get_or_init(|| {
                Self::parse(ANSIC).unwrap_or_else(|error| panic!("built-in time format: {error}"))
            })
            .clone()
    }

    /// RFC 3339 timestamps, such as `2006-01-02T15:04:05Z`.
    #[must_use]
    pub const fn rfc3339() -> Self {
        Self {
            repr: Repr::Rfc3339,
        }
    }

    /// Returns the description this layout was parsed from, or `rfc3339`.
    #[must_use]
    pub fn description(&self) -> &str {
        match &self.repr {
            Repr::Described { description, .. } => description,
            Repr::Rfc3339 => "rfc3339",
        }
    }

    /// Formats `moment`.
    pub fn format(&self, moment: OffsetDateTime) -> Result<String, time::error::Format> {
        match &self.repr {
            Repr::Described { items, .. } => moment.format(items.as_ref()),
            Repr::Rfc3339 => moment.format(&Rfc3339),
        }
    }

    /// Formats the current local time, falling back to UTC when the local
    /// offset cannot be determined.
    pub fn format_now(&self) -> io::Result<String> {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        self.format(now).map_err(io::Error::other)
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::ansic()
    }
}

impl fmt::Debug for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TimeFormat")
            .field(&self.description())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn ansic_matches_c_clock_layout() {
        let moment = datetime!(2006-01-02 15:04:05 UTC);
        assert_eq!(
            TimeFormat::ansic().format(moment).unwrap(),
            "Mon Jan  2 15:04:05 2006"
        );
    }

    #[test]
    fn ansic_pads_two_digit_days_without_space() {
        let moment = datetime!(2014-11-08 19:16:54 UTC);
        assert_eq!(
            TimeFormat::ansic().format(moment).unwrap(),
            "Sat Nov  8 19:16:54 2014"
        );
        let moment = datetime!(2014-11-18 09:06:04 UTC);
        assert_eq!(
            TimeFormat::ansic().format(moment).unwrap(),
            "Tue Nov 18 09:06:04 2014"
        );
    }

    #[test]
    fn default_is_ansic() {
        assert_eq!(TimeFormat::default().description(), ANSIC);
    }

    #[test]
    fn custom_description_formats() {
        let format = TimeFormat::parse("[year]-[month]-[day]").unwrap();
        let moment = datetime!(2006-01-02 15:04:05 UTC);
        assert_eq!(format.format(moment).unwrap(), "2006-01-02");
        assert_eq!(format.description(), "[year]-[month]-[day]");
    }

    #[test]
    fn rfc3339_formats() {
        let moment = datetime!(2006-01-02 15:04:05 UTC);
        assert_eq!(
            TimeFormat::rfc3339().format(moment).unwrap(),
            "2006-01-02T15:04:05Z"
        );
    }

    #[test]
    fn invalid_description_is_rejected() {
        let err = TimeFormat::parse("[hour").unwrap_err();
        assert_eq!(err.description(), "[hour");
        assert!(err.to_string().starts_with("invalid time format `[hour`"));

        assert!(TimeFormat::parse("[not_a_component]").is_err());
    }

    #[test]
    fn format_now_produces_text() {
        let stamp = TimeFormat::parse("[year]").unwrap().format_now().unwrap();
        assert_eq!(stamp.len(), 4);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
