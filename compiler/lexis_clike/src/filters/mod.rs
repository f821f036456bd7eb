//! Language-level filters for C-family token streams.

use lexis_core::{Messages, Next, Span, Token, TokenHandler};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::TokenKind;

/// Per-kind token counts.
pub type KindCounts = FxHashMap<TokenKind, usize>;

/// Drops whitespace, newlines and comments.
#[derive(Debug)]
pub struct DropTrivia<'h> {
    next: Next<'h, TokenKind>,
}

impl<'h> DropTrivia<'h> {
    pub fn new(next: Next<'h, TokenKind>) -> Self {
        DropTrivia { next }
    }
}

impl TokenHandler<TokenKind> for DropTrivia<'_> {
    #[inline]
    fn handle(&mut self, token: &Token<'_, TokenKind>, messages: &mut Messages) -> bool {
        if token.kind.is_trivia() {
            return true;
        }
        self.next.forward(token, messages)
    }
}

/// Splits `>>` into two `>` tokens.
///
/// Lets a parser close nested generic argument lists (`Vec<Vec<int>>`)
/// without re-lexing. `>>=` is left alone.
#[derive(Debug)]
pub struct SplitShift<'h> {
    next: Next<'h, TokenKind>,
}

impl<'h> SplitShift<'h> {
    pub fn new(next: Next<'h, TokenKind>) -> Self {
        SplitShift { next }
    }
}

impl TokenHandler<TokenKind> for SplitShift<'_> {
    fn handle(&mut self, token: &Token<'_, TokenKind>, messages: &mut Messages) -> bool {
        if token.kind != TokenKind::Shr || token.text.len() != 2 {
            return self.next.forward(token, messages);
        }
        let (first, second) = token.text.split_at(1);
        let mid = token.span.start + 1;
        trace!(span = %token.span, "split shift");

        let left = Token {
            kind: TokenKind::Gt,
            span: Span::new(token.span.start, mid),
            text: first,
            line_start: token.line_start,
        };
        if !self.next.forward(&left, messages) {
            return false;
        }
        let right = Token {
            kind: TokenKind::Gt,
            span: Span::new(mid, token.span.end),
            text: second,
            line_start: false,
        };
        self.next.forward(&right, messages)
    }
}

/// Counts tokens by kind, then forwards them.
#[derive(Debug)]
pub struct Tally<'h> {
    next: Next<'h, TokenKind>,
    counts: &'h mut KindCounts,
}

impl<'h> Tally<'h> {
    /// Counts accumulate into `counts`; install with
    /// `chain.install(|next| Tally::new(next, &mut counts))`.
    pub fn new(next: Next<'h, TokenKind>, counts: &'h mut KindCounts) -> Self {
        Tally { next, counts }
    }
}

impl TokenHandler<TokenKind> for Tally<'_> {
    #[inline]
    fn handle(&mut self, token: &Token<'_, TokenKind>, messages: &mut Messages) -> bool {
        *self.counts.entry(token.kind).or_default() += 1;
        self.next.forward(token, messages)
    }
}

#[cfg(test)]
mod tests;
