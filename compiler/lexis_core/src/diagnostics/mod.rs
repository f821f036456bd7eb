//! Out-of-band diagnostics: three optional callback slots.
//!
//! | slot | event | unset behavior |
//! |------|-------|----------------|
//! | `on_unexpected` | input no rule accepts, or a failed literal | [`UnexpectedPolicy`] (default: abort) |
//! | `on_unknown_operator` | operator-class run with no trie match | ignored |
//! | `on_literal_message` | message appended by a literal parser | ignored |
//!
//! The unexpected-input slot returns `true` to recover and `false` to stop
//! the scan. The other two are notifications and cannot stop anything.

use std::fmt;

use tracing::debug;

use crate::{Message, Span};

/// Where in the engine an unexpected-input event was detected.
///
/// This tags the *engine's* source location (`file!()`/`line!()`), not the
/// scanned input; it exists so an engine bug can be told apart from bad input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DetectionSite {
    pub file: &'static str,
    pub line: u32,
}

impl DetectionSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        DetectionSite { file, line }
    }
}

impl fmt::Display for DetectionSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Tag the current engine source location.
macro_rules! detection_site {
    () => {
        $crate::DetectionSite::new(file!(), line!())
    };
}
pub(crate) use detection_site;

/// Why input was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnexpectedReason {
    /// The character's class has no rule.
    NoRule,
    /// Operator-class input with no trie match.
    UnknownOperator,
    /// A literal sub-parser failed.
    LiteralFailure,
}

impl fmt::Display for UnexpectedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnexpectedReason::NoRule => "unexpected character",
            UnexpectedReason::UnknownOperator => "unknown operator",
            UnexpectedReason::LiteralFailure => "malformed literal",
        })
    }
}

/// Payload of the unexpected-input callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnexpectedInput<'a> {
    /// Offending range. One character for `NoRule`/`UnknownOperator`,
    /// the failed literal's extent for `LiteralFailure`.
    pub span: Span,
    pub text: &'a str,
    pub reason: UnexpectedReason,
    pub site: DetectionSite,
}

/// What an unset unexpected-input slot does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnexpectedPolicy {
    /// Stop the scan.
    #[default]
    Abort,
    /// Skip the input and keep scanning.
    Recover,
}

type UnexpectedFn<'d> = Box<dyn FnMut(&UnexpectedInput<'_>) -> bool + 'd>;
type UnknownOperatorFn<'d> = Box<dyn FnMut(Span, &str) + 'd>;
type LiteralMessageFn<'d> = Box<dyn FnMut(&Message) + 'd>;

/// Diagnostic callbacks for one scan.
#[derive(Default)]
pub struct Diagnostics<'d> {
    unexpected: Option<UnexpectedFn<'d>>,
    unknown_operator: Option<UnknownOperatorFn<'d>>,
    literal_message: Option<LiteralMessageFn<'d>>,
    unexpected_default: UnexpectedPolicy,
}

impl<'d> Diagnostics<'d> {
    /// All slots unset; unexpected input aborts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide unexpected input: `true` recovers, `false` stops the scan.
    #[must_use]
    pub fn on_unexpected(mut self, f: impl FnMut(&UnexpectedInput<'_>) -> bool + 'd) -> Self {
        self.unexpected = Some(Box::new(f));
        self
    }

    /// Observe operator-class runs the trie does not know.
    #[must_use]
    pub fn on_unknown_operator(mut self, f: impl FnMut(Span, &str) + 'd) -> Self {
        self.unknown_operator = Some(Box::new(f));
        self
    }

    /// Observe messages appended by literal parsers.
    #[must_use]
    pub fn on_literal_message(mut self, f: impl FnMut(&Message) + 'd) -> Self {
        self.literal_message = Some(Box::new(f));
        self
    }

    /// Policy used when `on_unexpected` is unset.
    #[must_use]
    pub fn unexpected_default(mut self, policy: UnexpectedPolicy) -> Self {
        self.unexpected_default = policy;
        self
    }

    pub fn policy(&self) -> UnexpectedPolicy {
        self.unexpected_default
    }

    /// Returns `true` to recover.
    pub(crate) fn report_unexpected(&mut self, input: &UnexpectedInput<'_>) -> bool {
        let recover = match self.unexpected.as_mut() {
            Some(f) => f(input),
            None => self.unexpected_default == UnexpectedPolicy::Recover,
        };
        debug!(
            span = %input.span,
            reason = %input.reason,
            site = %input.site,
            recover,
            "unexpected input"
        );
        recover
    }

    pub(crate) fn report_unknown_operator(&mut self, span: Span, text: &str) {
        debug!(span = %span, text, "possible unknown operator");
        if let Some(f) = self.unknown_operator.as_mut() {
            f(span, text);
        }
    }

    pub(crate) fn report_literal_message(&mut self, message: &Message) {
        if let Some(f) = self.literal_message.as_mut() {
            f(message);
        }
    }
}

impl fmt::Debug for Diagnostics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("unexpected", &self.unexpected.is_some())
            .field("unknown_operator", &self.unknown_operator.is_some())
            .field("literal_message", &self.literal_message.is_some())
            .field("unexpected_default", &self.unexpected_default)
            .finish()
    }
}
