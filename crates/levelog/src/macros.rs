//! crates/levelog/src/macros.rs
//! Format-string shorthands for emitting through a [`Logger`](crate::Logger).
//!
//! Each macro takes the logger first and forwards the remaining tokens to
//! [`format_args!`], writing the result through the matching sink's
//! [`printf`](crate::LevelSink::printf).

/// Emit a line through the logger's DEBUG sink.
///
/// # Example
/// ```
/// # let logger = levelog::Logger::plain("app");
/// levelog::log_debug!(logger, "cache size {}", 42);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug().printf(::core::format_args!($($arg)+))
    };
}

/// Emit a line through the logger's INFO sink.
///
/// # Example
/// ```
/// # let logger = levelog::Logger::plain("app");
/// levelog::log_info!(logger, "listening on {}", "127.0.0.1:8080");
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info().printf(::core::format_args!($($arg)+))
    };
}

/// Emit a line through the logger's NOTICE sink.
///
/// # Example
/// ```
/// # let logger = levelog::Logger::plain("app");
/// levelog::log_notice!(logger, "count: {}", 12306);
/// ```
#[macro_export]
macro_rules! log_notice {
    ($logger:expr, $($arg:tt)+) => {
        $logger.notice().printf(::core::format_args!($($arg)+))
    };
}

/// Emit a line through the logger's WARN sink.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn().printf(::core::format_args!($($arg)+))
    };
}

/// Emit a line through the logger's ERROR sink.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error().printf(::core::format_args!($($arg)+))
    };
}

/// Emit a line through the logger's CRIT sink.
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.critical().printf(::core::format_args!($($arg)+))
    };
}

/// Emit a line through the logger's FATAL sink.
///
/// Only writes the line; the caller decides whether to exit.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal().printf(::core::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Level, Logger, MemoryBuffer};

    fn logger() -> (Logger, MemoryBuffer) {
        let buffer = MemoryBuffer::new();
        let mut logger = Logger::with_format("macros", "{Level} {Message}").expect("valid");
        logger.set_destination(&buffer);
        logger.set_output_level(Level::Debug);
        (logger, buffer)
    }

    #[test]
    fn every_macro_targets_its_level() {
        let (logger, buffer) = logger();

        log_debug!(logger, "d{}", 1);
        log_info!(logger, "i{}", 2);
        log_notice!(logger, "n{}", 3);
        log_warn!(logger, "w{}", 4);
        log_error!(logger, "e{}", 5);
        log_critical!(logger, "c{}", 6);
        log_fatal!(logger, "f{}", 7);

        assert_eq!(
            buffer.to_string_lossy(),
            "DEBUG d1\nINFO i2\nNOTICE n3\nWARN w4\nERROR e5\nCRIT c6\nFATAL f7\n"
        );
    }

    #[test]
    fn macros_accept_inline_arguments() {
        let (logger, buffer) = logger();
        let count = 12306;

        log_notice!(logger, "count: {count}");

        assert_eq!(buffer.to_string_lossy(), "NOTICE count: 12306\n");
    }

    #[test]
    fn macros_respect_threshold() {
        let (mut logger, buffer) = logger();
        logger.set_output_level(Level::Error);

        log_warn!(logger, "hidden");
        log_error!(logger, "shown");

        assert_eq!(buffer.to_string_lossy(), "ERROR shown\n");
    }
}
