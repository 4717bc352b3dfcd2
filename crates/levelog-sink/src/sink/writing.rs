use super::LevelSink;
use crate::record::LogRecord;
use std::fmt::{self, Display, Write as _};
use std::io;

impl LevelSink {
    fn emit(&self, message: &str) -> io::Result<()> {
        // Nothing to render for a discarded level.
        if self.destination.is_discard() {
            return Ok(());
        }

        let time = self.time_format.format_now()?;
        let record = LogRecord::new(&time, self.level.name(), message);
        let mut line = String::with_capacity(time.len() + message.len() + 32);
        self.template.render_into(&record, &mut line);
        line.push('\n');
        self.destination.write_all(line.as_bytes())
    }

    /// Writes one line whose message is `message`.
    ///
    /// Rendering and write failures are swallowed so logging never disrupts
    /// the caller. Use [`try_print`](Self::try_print) to observe them.
    pub fn print<M: Display>(&self, message: M) {
        let _ = self.try_print(message);
    }

    /// Writes one line whose message concatenates `parts` without separators.
    ///
    /// No space is inserted between adjacent values, numeric or not:
    /// `print_all([1, 2, 3])` writes `123`. Use [`printf`](Self::printf) when
    /// separators are wanted.
    pub fn print_all<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let _ = self.try_print_all(parts);
    }

    /// Writes one line whose message is produced by `format_args!`.
    ///
    /// ```
    /// use levelog_sink::{Level, LevelSink, MemoryBuffer, Template};
    ///
    /// let buffer = MemoryBuffer::new();
    /// let mut sink = LevelSink::new(Level::Notice);
    /// sink.set_destination(&buffer);
    /// sink.set_template(Template::parse("{Message}").unwrap());
    ///
    /// sink.printf(format_args!("count: {}", 12306));
    /// assert_eq!(buffer.to_string_lossy(), "count: 12306\n");
    /// ```
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        let _ = self.try_printf(args);
    }

    /// Like [`print`](Self::print), reporting failures.
    pub fn try_print<M: Display>(&self, message: M) -> io::Result<()> {
        self.emit(&message.to_string())
    }

    /// Like [`print_all`](Self::print_all), reporting failures.
    pub fn try_print_all<I>(&self, parts: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut message = String::new();
        for part in parts {
            write!(message, "{part}").map_err(io::Error::other)?;
        }
        self.emit(&message)
    }

    /// Like [`printf`](Self::printf), reporting failures.
    pub fn try_printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        match args.as_str() {
            Some(message) => self.emit(message),
            None => self.emit(&fmt::format(args)),
        }
    }
}
