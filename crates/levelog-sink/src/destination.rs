//! crates/levelog-sink/src/destination.rs
//! Byte destinations that level sinks write rendered lines into.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

/// Handle to the place a [`LevelSink`](crate::LevelSink) writes its lines.
///
/// Cloning a destination is cheap and yields a handle to the same target, so
/// one destination can back several sinks at once. Caller supplied writers are
/// kept behind an `Arc<Mutex<_>>` for that reason; the standard streams lock
/// themselves and the discard destination holds nothing.
///
/// Destinations are never closed by the logger. Dropping the last handle to a
/// caller supplied writer drops the writer, as usual.
#[derive(Clone)]
pub struct Destination {
    kind: Kind,
}

#[derive(Clone)]
enum Kind {
    Stdout,
    Stderr,
    Discard,
    Shared(Arc<Mutex<dyn Write + Send>>),
}

impl Destination {
    /// Writes to the process's standard output.
    #[must_use]
    pub const fn stdout() -> Self {
        Self { kind: Kind::Stdout }
    }

    /// Writes to the process's standard error.
    #[must_use]
    pub const fn stderr() -> Self {
        Self { kind: Kind::Stderr }
    }

    /// Accepts every write and keeps nothing.
    #[must_use]
    pub const fn discard() -> Self {
        Self {
            kind: Kind::Discard,
        }
    }

    /// Takes ownership of `writer`.
    pub fn from_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::shared(Arc::new(Mutex::new(writer)))
    }

    /// Wraps a writer the caller keeps a handle to.
    pub fn shared<W>(writer: Arc<Mutex<W>>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            kind: Kind::Shared(writer),
        }
    }

    /// Opens `path` for appending, creating it when missing.
    pub fn file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(file))
    }

    /// Reports whether this is the discard destination.
    #[must_use]
    pub const fn is_discard(&self) -> bool {
        matches!(self.kind, Kind::Discard)
    }

    /// Reports whether both handles point at the same target.
    ///
    /// Standard streams and the discard destination compare by kind; caller
    /// supplied writers compare by identity.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (Kind::Stdout, Kind::Stdout)
            | (Kind::Stderr, Kind::Stderr)
            | (Kind::Discard, Kind::Discard) => true,
            (Kind::Shared(left), Kind::Shared(right)) => {
                std::ptr::addr_eq(Arc::as_ptr(left), Arc::as_ptr(right))
            }
            _ => false,
        }
    }

    /// Writes `bytes` in full and flushes the target.
    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        match &self.kind {
            Kind::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Kind::Stderr => io::stderr().lock().write_all(bytes),
            Kind::Discard => Ok(()),
            Kind::Shared(writer) => {
                let mut writer = writer
                    .lock()
                    .map_err(|_| io::Error::other("log destination lock poisoned"))?;
                writer.write_all(bytes)?;
                writer.flush()
            }
        }
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            Kind::Stdout => "Stdout",
            Kind::Stderr => "Stderr",
            Kind::Discard => "Discard",
            Kind::Shared(_) => "Shared",
        };
        f.debug_tuple("Destination").field(&label).finish()
    }
}

/// Growable in-memory destination.
///
/// Clones share the same storage, so a caller can hand
/// [`destination`](Self::destination) to a logger and read back everything it
/// wrote through another clone.
#[derive(Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a destination writing into this buffer.
    #[must_use]
    pub fn destination(&self) -> Destination {
        Destination::shared(Arc::clone(&self.bytes))
    }

    /// Returns a copy of the bytes written so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the bytes written so far as text, replacing invalid UTF-8.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops everything written so far.
    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl fmt::Debug for MemoryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryBuffer")
            .field("len", &self.len())
            .finish()
    }
}

impl From<&MemoryBuffer> for Destination {
    fn from(buffer: &MemoryBuffer) -> Self {
        buffer.destination()
    }
}
