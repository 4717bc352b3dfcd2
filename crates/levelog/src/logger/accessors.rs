use super::Logger;
use levelog_sink::{Level, LevelSink};

macro_rules! level_accessors {
    ($($level:ident => $get:ident, $get_mut:ident;)*) => {
        $(
            #[doc = concat!("Borrows the `", stringify!($level), "` sink for emitting lines.")]
            #[must_use]
            pub fn $get(&self) -> &LevelSink {
                self.sink(Level::$level)
            }

            #[doc = concat!("Mutably borrows the `", stringify!($level), "` sink for per-level overrides.")]
            #[must_use]
            pub fn $get_mut(&mut self) -> &mut LevelSink {
                self.sink_mut(Level::$level)
            }
        )*
    };
}

impl Logger {
    /// Returns the logger name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the sink for `level`.
    #[must_use]
    pub fn sink(&self, level: Level) -> &LevelSink {
        &self.sinks[level.index()]
    }

    /// Mutably borrows the sink for `level`.
    ///
    /// Changes made through the returned reference persist until a
    /// logger-wide operation overwrites them.
    #[must_use]
    pub fn sink_mut(&mut self, level: Level) -> &mut LevelSink {
        &mut self.sinks[level.index()]
    }

    /// Iterates over the sinks from most to least severe.
    pub fn sinks(&self) -> impl Iterator<Item = &LevelSink> {
        self.sinks.iter()
    }

    level_accessors! {
        Debug => debug, debug_mut;
        Info => info, info_mut;
        Notice => notice, notice_mut;
        Warning => warn, warn_mut;
        Error => error, error_mut;
        Critical => critical, critical_mut;
        Fatal => fatal, fatal_mut;
    }
}
