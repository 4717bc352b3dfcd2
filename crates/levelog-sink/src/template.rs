//! crates/levelog-sink/src/template.rs
//! Message templates with `{Time}`, `{Level}` and `{Message}` placeholders.

use std::fmt;
use std::sync::Arc;

use crate::record::LogRecord;

mod error;
mod presets;

pub use error::{TemplateError, TemplateErrorKind};
pub use presets::{PLAIN_FORMAT, colored_format};

/// A value a template can substitute.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    /// `{Time}`: the timestamp rendered with the sink's time format.
    Time,
    /// `{Level}`: the level display name.
    Level,
    /// `{Message}`: the formatted message body.
    Message,
}

impl Field {
    /// Returns the placeholder name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Level => "Level",
            Self::Message => "Message",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Time" => Some(Self::Time),
            "Level" => Some(Self::Level),
            "Message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Segment {
    Literal(Box<str>),
    Field(Field),
}

/// A parsed message template.
///
/// Placeholders are written `{Time}`, `{Level}` and `{Message}`; `{{` and `}}`
/// produce literal braces. Parsing validates every placeholder, so rendering
/// cannot fail.
///
/// Templates are immutable. Cloning shares the parsed segments, which lets a
/// logger hand one parsed template to all of its sinks.
///
/// ```
/// use levelog_sink::{LogRecord, Template};
///
/// let template = Template::parse("> {Level} {Message}").unwrap();
/// let record = LogRecord::new("", "NOTICE", "hi");
/// assert_eq!(template.render(&record), "> NOTICE hi");
/// ```
#[derive(Clone)]
pub struct Template {
    inner: Arc<Inner>,
}

struct Inner {
    source: Box<str>,
    segments: Box<[Segment]>,
}

impl Template {
    /// Parses `source` into a template.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let segments = parse_segments(source)?;
        Ok(Self {
            inner: Arc::new(Inner {
                source: source.into(),
                segments: segments.into_boxed_slice(),
            }),
        })
    }

    /// Returns the text the template was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.inner.source
    }

    /// Iterates over the placeholders in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.inner.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(*field),
            Segment::Literal(_) => None,
        })
    }

    /// Reports whether both values share one parsed template.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Renders `record` without a line terminator.
    #[must_use]
    pub fn render(&self, record: &LogRecord<'_>) -> String {
        let mut out = String::with_capacity(self.inner.source.len() + record.message().len());
        self.render_into(record, &mut out);
        out
    }

    /// Appends the rendering of `record` to `out`.
    pub fn render_into(&self, record: &LogRecord<'_>, out: &mut String) {
        for segment in &self.inner.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(record.field(*field)),
            }
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Template").field(&self.source()).finish()
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.inner.segments == other.inner.segments
    }
}

impl Eq for Template {}

fn parse_segments(source: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = source.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    literal.push('{');
                    continue;
                }

                let start = position + 1;
                let end = source[start..]
                    .find('}')
                    .map(|offset| start + offset)
                    .ok_or_else(|| {
                        TemplateError::new(TemplateErrorKind::UnterminatedPlaceholder, position)
                    })?;
                let name = source[start..end].trim();
                if name.is_empty() {
                    return Err(TemplateError::new(
                        TemplateErrorKind::EmptyPlaceholder,
                        position,
                    ));
                }
                let field = Field::from_name(name).ok_or_else(|| {
                    TemplateError::new(
                        TemplateErrorKind::UnknownPlaceholder(name.to_owned()),
                        position,
                    )
                })?;

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal).into()));
                }
                segments.push(Segment::Field(field));

                while chars.next_if(|&(index, _)| index <= end).is_some() {}
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_some() {
                    literal.push('}');
                    continue;
                }
                return Err(TemplateError::new(
                    TemplateErrorKind::UnmatchedClosingBrace,
                    position,
                ));
            }
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal.into()));
    }
    Ok(segments)
}
