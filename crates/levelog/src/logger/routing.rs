use super::Logger;
use levelog_sink::{Destination, Level};

impl Logger {
    /// Returns the output threshold.
    #[must_use]
    pub const fn output_level(&self) -> Level {
        self.output_level
    }

    /// Returns the destination enabled levels are routed to.
    #[must_use]
    pub const fn default_destination(&self) -> &Destination {
        &self.default_destination
    }

    /// Routes every enabled level to `destination` and every other level to
    /// the discard destination, then remembers `destination` as the default
    /// for later threshold changes.
    ///
    /// Every sink's destination is reassigned, including destinations set
    /// directly on a sink. Templates are left alone.
    pub fn set_destination(&mut self, destination: impl Into<Destination>) {
        let destination = destination.into();
        let threshold = self.output_level;
        for sink in &mut self.sinks {
            if sink.level().is_enabled_at(threshold) {
                sink.set_destination(destination.clone());
            } else {
                sink.set_destination(Destination::discard());
            }
        }
        self.default_destination = destination;
    }

    /// Changes the output threshold and re-routes every sink.
    ///
    /// Newly enabled levels are attached to the current default destination,
    /// not to whatever destination they had before they were discarded.
    pub fn set_output_level(&mut self, level: Level) {
        self.output_level = level;
        let destination = self.default_destination.clone();
        self.set_destination(destination);
    }

    /// Reports whether `level` is enabled at the current output level.
    ///
    /// Only the threshold is consulted. A destination set directly on the
    /// level's sink is not reflected here until the next routing change
    /// replaces it.
    #[must_use]
    pub const fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled_at(self.output_level)
    }
}
