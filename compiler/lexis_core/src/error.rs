//! Error types returned by scans and grammar construction.

use crate::{DetectionSite, Span, UnexpectedReason};

/// Why a scan stopped before the end of input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// Input no rule accepts, and the unexpected-input handler declined to
    /// recover.
    #[error("{reason} at {span} (detected at {site})")]
    UnexpectedInput {
        span: Span,
        reason: UnexpectedReason,
        site: DetectionSite,
    },

    /// A literal parser failed and the unexpected-input handler declined to
    /// recover. `message` is the parser's last error message.
    #[error("malformed literal at {span}: {message}")]
    LiteralParseFailure { span: Span, message: String },

    /// A handler returned `false`. `dispatched` counts the tokens delivered
    /// before the stop, the refused one included.
    #[error("scan stopped by handler at {span} after {dispatched} tokens")]
    ChainAbort { span: Span, dispatched: u32 },
}

impl ScanError {
    /// Returns `true` for a deliberate stop by a handler, as opposed to
    /// rejected input.
    pub fn is_chain_abort(&self) -> bool {
        matches!(self, ScanError::ChainAbort { .. })
    }

    pub fn span(&self) -> Span {
        match self {
            ScanError::UnexpectedInput { span, .. }
            | ScanError::LiteralParseFailure { span, .. }
            | ScanError::ChainAbort { span, .. } => *span,
        }
    }
}

/// Invalid grammar configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// A token, keyword or literal opener was registered with an empty key.
    #[error("empty key registered for {what}")]
    EmptyKey { what: &'static str },

    /// A class rule refers to a literal parser that was never registered.
    #[error("class rule refers to unregistered literal parser #{id}")]
    UnknownLiteral { id: usize },
}
