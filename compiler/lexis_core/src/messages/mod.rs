//! Append-only message sink shared by literal parsers and handlers.
//!
//! A scan never owns its messages: the caller passes `&mut Messages` and
//! inspects it afterwards. Parsers append an error when they fail and may
//! append warnings when they succeed; handlers may append anything.

use std::fmt;

use crate::Span;

/// Message severity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One message attached to a source range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub severity: Severity,
    pub span: Span,
    pub text: String,
}

impl Message {
    pub fn error(span: Span, text: impl Into<String>) -> Self {
        Message {
            severity: Severity::Error,
            span,
            text: text.into(),
        }
    }

    pub fn warning(span: Span, text: impl Into<String>) -> Self {
        Message {
            severity: Severity::Warning,
            span,
            text: text.into(),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.span, self.text)
    }
}

/// Append-only list of [`Message`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    items: Vec<Message>,
}

impl Messages {
    pub fn new() -> Self {
        Messages { items: Vec::new() }
    }

    pub fn push(&mut self, message: Message) {
        self.items.push(message);
    }

    /// Append an error.
    pub fn error(&mut self, span: Span, text: impl Into<String>) {
        self.push(Message::error(span, text));
    }

    /// Append a warning.
    pub fn warning(&mut self, span: Span, text: impl Into<String>) {
        self.push(Message::warning(span, text));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.items.last()
    }

    /// Messages appended at or after index `from`.
    ///
    /// The scanner records `len()` before running a literal parser and reads
    /// back what the parser appended with this.
    pub fn since(&self, from: usize) -> &[Message] {
        self.items.get(from..).unwrap_or_default()
    }

    /// Returns `true` if any message is an error.
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Message::is_error)
    }
}

impl<'m> IntoIterator for &'m Messages {
    type Item = &'m Message;
    type IntoIter = std::slice::Iter<'m, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
