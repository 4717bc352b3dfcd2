//! Integration tests for declarative logger configuration.

use levelog::{Level, Logger, LoggerConfig, MemoryBuffer, PLAIN_FORMAT};

// ============================================================================
// Building
// ============================================================================

/// Verifies a configured logger emits with its format and threshold.
#[test]
fn built_logger_follows_config() {
    let buffer = MemoryBuffer::new();
    let config = LoggerConfig {
        output_level: Level::Info,
        format: Some("{Level}: {Message}".to_owned()),
        ..LoggerConfig::new("worker")
    };

    let mut logger = Logger::from_config(&config).expect("valid config");
    logger.set_destination(&buffer);
    logger.info().print("started");
    logger.debug().print("hidden");

    assert_eq!(logger.name(), "worker");
    assert_eq!(buffer.to_string_lossy(), "INFO: started\n");
}

/// Verifies invalid templates are reported by `from_config`.
#[test]
fn bad_format_fails_build() {
    let config = LoggerConfig {
        format: Some("{Level".to_owned()),
        ..LoggerConfig::new("worker")
    };

    let error = Logger::from_config(&config).expect_err("unterminated");
    assert!(error.to_string().contains("unterminated placeholder"));
}

// ============================================================================
// Reapplying
// ============================================================================

/// Verifies `apply` restores default templates when no format is set.
#[test]
fn apply_without_format_restores_defaults() {
    let mut logger = Logger::with_format("worker", "{Message}").expect("valid format");
    let config = LoggerConfig {
        colorized: false,
        ..LoggerConfig::default()
    };

    config.apply(&mut logger).expect("valid config");

    for sink in logger.sinks() {
        assert_eq!(sink.template().source(), PLAIN_FORMAT);
    }
}

/// Verifies `apply` overwrites per-level templates like `set_format`.
#[test]
fn apply_overwrites_template_overrides() {
    let buffer = MemoryBuffer::new();
    let mut logger = Logger::plain("worker");
    logger.set_destination(&buffer);
    logger
        .error_mut()
        .set_template(levelog::Template::parse("!! {Message}").expect("valid"));

    let config = LoggerConfig {
        format: Some("{Level} {Message}".to_owned()),
        ..LoggerConfig::default()
    };
    config.apply(&mut logger).expect("valid config");
    logger.error().print("boom");

    assert_eq!(buffer.to_string_lossy(), "ERROR boom\n");
}

/// Verifies a failing `apply` leaves templates, threshold and time format.
#[test]
fn failed_apply_changes_nothing() {
    let mut logger = Logger::with_format("worker", "{Message}").expect("valid format");
    let config = LoggerConfig {
        output_level: Level::Fatal,
        format: Some("{Level} {Message}".to_owned()),
        time_format: Some("[hour".to_owned()),
        colorized: false,
        ..LoggerConfig::default()
    };

    assert!(config.apply(&mut logger).is_err());

    assert_eq!(logger.output_level(), Level::Notice);
    assert_eq!(logger.notice().template().source(), "{Message}");
    assert_eq!(logger.time_format().description(), levelog::ANSIC);
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    /// Verifies a configuration survives a JSON round trip.
    #[test]
    fn config_json_round_trip() {
        let config = LoggerConfig {
            output_level: Level::Warning,
            format: Some("{Level} {Message}".to_owned()),
            time_format: Some("[hour]:[minute]".to_owned()),
            ..LoggerConfig::new("worker")
        };

        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains(r#""output_level":"warning""#), "{json}");
        let parsed: LoggerConfig = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(parsed, config);
    }

    /// Verifies configuration files accept the same level spellings as
    /// `set_output_level_from_str`.
    #[test]
    fn config_json_accepts_level_aliases() {
        for (token, expected) in [
            ("warn", Level::Warning),
            ("CRIT", Level::Critical),
            ("Debug", Level::Debug),
        ] {
            let json = format!(r#"{{"output_level":"{token}"}}"#);
            let parsed: LoggerConfig = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(parsed.output_level, expected, "{token}");

            let mut config = LoggerConfig::default();
            config.set_output_level_from_str(token).expect("parse");
            assert_eq!(config.output_level, parsed.output_level);
        }
    }

    /// Verifies an empty JSON object yields the defaults.
    #[test]
    fn empty_json_is_default() {
        let parsed: LoggerConfig = serde_json::from_str("{}").expect("deserialize");

        assert_eq!(parsed, LoggerConfig::default());
    }
}
