//! Errors produced while parsing message templates.

use std::fmt;

use thiserror::Error;

/// Classification of a template parse failure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TemplateErrorKind {
    /// A `{` was never closed.
    UnterminatedPlaceholder,
    /// A placeholder had no name, as in `{}`.
    EmptyPlaceholder,
    /// A placeholder named something other than `Time`, `Level` or `Message`.
    UnknownPlaceholder(String),
    /// A `}` appeared outside a placeholder without being doubled.
    UnmatchedClosingBrace,
}

impl fmt::Display for TemplateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedPlaceholder => f.write_str("unterminated placeholder"),
            Self::EmptyPlaceholder => f.write_str("empty placeholder"),
            Self::UnknownPlaceholder(name) => write!(
                f,
                "unknown placeholder `{name}`; expected Time, Level or Message"
            ),
            Self::UnmatchedClosingBrace => f.write_str("unmatched `}`; write `}}` for a literal brace"),
        }
    }
}

/// Error returned when a [`Template`](super::Template) cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid log template: {kind} at byte {position}")]
pub struct TemplateError {
    kind: TemplateErrorKind,
    position: usize,
}

impl TemplateError {
    pub(crate) const fn new(kind: TemplateErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Returns the classification describing why parsing failed.
    #[must_use]
    pub const fn kind(&self) -> &TemplateErrorKind {
        &self.kind
    }

    /// Returns the byte offset of the offending brace.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}
