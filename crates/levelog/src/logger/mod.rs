use levelog_sink::{Destination, Level, LevelSink, TimeFormat};

mod accessors;
mod constructors;
mod formatting;
mod routing;

/// A named logger owning one [`LevelSink`] per severity [`Level`].
///
/// The logger decides, at configuration time, which sinks write to its
/// default destination and which discard their output: a level is routed to
/// the real destination when it is enabled at the current output level (see
/// [`Level::is_enabled_at`]). Emitting a line goes straight to the sink, so
/// nothing is decided at emit time.
///
/// Per-level overrides made through the `*_mut` accessors behave differently
/// for destinations and templates:
///
/// - a sink's destination is reassigned by every
///   [`set_destination`](Self::set_destination) and
///   [`set_output_level`](Self::set_output_level) call;
/// - a sink's template is only reassigned by [`set_format`](Self::set_format).
///
/// The logger performs no locking. Wrap it in a `Mutex` to share it between
/// threads.
///
/// # Examples
///
/// ```
/// use levelog::{Level, Logger, MemoryBuffer};
///
/// let out = MemoryBuffer::new();
/// let mut logger = Logger::plain("app");
/// logger.set_destination(&out);
/// logger.set_format("{Level} {Message}")?;
///
/// logger.debug().print("hidden at the default NOTICE threshold");
/// logger.notice().print("visible");
/// logger.set_output_level(Level::Debug);
/// logger.debug().printf(format_args!("now {} too", "visible"));
///
/// assert_eq!(out.to_string_lossy(), "NOTICE visible\nDEBUG now visible too\n");
/// # Ok::<(), levelog::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    name: String,
    output_level: Level,
    default_destination: Destination,
    time_format: TimeFormat,
    sinks: [LevelSink; Level::COUNT],
}
