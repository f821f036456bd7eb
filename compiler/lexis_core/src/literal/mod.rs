//! Literal sub-parsers.
//!
//! A literal sub-parser takes over from the scanner at an opening delimiter
//! (a quote, a comment opener) or at the first byte of a class that always
//! starts a literal (digits). It reports how many bytes the literal spans
//! and never reads past end-of-input: every loop in this module is bounded
//! by the cursor's `is_eof` or by a memchr search over `remaining()`.
//!
//! Parsers append to the shared [`Messages`]: an error whenever they return
//! [`LiteralFailure`], optionally warnings on success. What happens after a
//! failure (abort or skip ahead) is decided by the scanner's unexpected-input
//! policy, not by the parser.

mod comment;
mod numeric;
mod quoted;

pub use comment::{BlockComment, LineComment};
pub use numeric::NumericLiteral;
pub use quoted::QuotedLiteral;

use crate::{Cursor, Messages};

/// A successfully parsed literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralMatch<'a, P> {
    /// Bytes consumed, opener and closing delimiter included.
    pub len: u32,
    /// Token kind to emit.
    pub kind: P,
    /// Parsed value, borrowed from the source (e.g. the text between quotes).
    pub value: &'a str,
}

/// A literal that could not be completed.
///
/// `len` is how far the parser got; recovery may skip that many bytes.
/// Always at least 1 for parsers that consumed an opener.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LiteralFailure {
    pub len: u32,
}

/// A literal sub-parser.
///
/// `cursor` is positioned at the first byte of the literal (the opening
/// delimiter). `opener_len` is the number of bytes the scanner already
/// matched as the opener: the trie match length for opener-triggered
/// literals, 0 for class-triggered ones.
pub trait LiteralParser<P>: Send + Sync {
    fn parse<'a>(
        &self,
        cursor: Cursor<'a>,
        opener_len: u32,
        messages: &mut Messages,
    ) -> Result<LiteralMatch<'a, P>, LiteralFailure>;
}
