//! Quoted string and character literals.

use super::{LiteralFailure, LiteralMatch, LiteralParser};
use crate::{Cursor, Messages, Span};

/// Escape letters accepted by default after the escape byte.
const DEFAULT_ESCAPES: &[u8] = b"nrt0\\\"'";

/// A literal delimited by one quote byte on both ends.
///
/// The value is the raw text between the quotes; escapes are validated
/// (unknown ones produce a warning) but not decoded.
#[derive(Clone, Debug)]
pub struct QuotedLiteral<P> {
    kind: P,
    quote: u8,
    escape: Option<u8>,
    escapes: &'static [u8],
    multiline: bool,
    single_char: bool,
}

impl<P> QuotedLiteral<P> {
    /// A single-line literal closed by `quote`, with `\` escapes.
    pub fn new(quote: u8, kind: P) -> Self {
        QuotedLiteral {
            kind,
            quote,
            escape: Some(b'\\'),
            escapes: DEFAULT_ESCAPES,
            multiline: false,
            single_char: false,
        }
    }

    /// Set or disable the escape byte.
    #[must_use]
    pub fn escape(mut self, escape: Option<u8>) -> Self {
        self.escape = escape;
        self
    }

    /// Bytes accepted after the escape byte without a warning.
    #[must_use]
    pub fn escapes(mut self, allowed: &'static [u8]) -> Self {
        self.escapes = allowed;
        self
    }

    /// Allow raw line breaks inside the literal.
    #[must_use]
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Character literal: exactly one (possibly escaped) character.
    #[must_use]
    pub fn single_char(mut self) -> Self {
        self.single_char = true;
        self
    }

    fn unterminated(&self, start: u32, end: u32, messages: &mut Messages) -> LiteralFailure {
        messages.error(
            Span::new(start, end),
            format!("no closing `{}` found", char::from(self.quote)),
        );
        LiteralFailure { len: end - start }
    }

    /// Number of characters in `content`, an escape and its operand counting
    /// as one.
    fn char_count(&self, content: &str) -> usize {
        let mut count = 0;
        let mut chars = content.chars();
        while let Some(ch) = chars.next() {
            if self.escape.is_some_and(|esc| ch == char::from(esc)) {
                chars.next();
            }
            count += 1;
        }
        count
    }
}

impl<P: Clone + Send + Sync> LiteralParser<P> for QuotedLiteral<P> {
    fn parse<'a>(
        &self,
        cursor: Cursor<'a>,
        opener_len: u32,
        messages: &mut Messages,
    ) -> Result<LiteralMatch<'a, P>, LiteralFailure> {
        let start = cursor.pos();
        let mut c = cursor;
        c.advance_n(opener_len.max(1));
        let content_start = c.pos();

        loop {
            let delim = c.skip_to_quote_delim(self.quote, self.escape);
            if c.is_eof() {
                return Err(self.unterminated(start, c.pos(), messages));
            }
            if delim == self.quote {
                break;
            }
            if Some(delim) == self.escape {
                let esc_pos = c.pos();
                c.advance();
                if c.is_eof() {
                    return Err(self.unterminated(start, c.pos(), messages));
                }
                let operand = c.current();
                if matches!(operand, b'\n' | b'\r') && !self.multiline {
                    return Err(self.unterminated(start, c.pos(), messages));
                }
                c.advance_char();
                if !self.escapes.contains(&operand) {
                    messages.warning(
                        Span::new(esc_pos, c.pos()),
                        format!("unknown escape `{}`", c.slice(esc_pos, c.pos())),
                    );
                }
                continue;
            }
            // `\n` or `\r`
            if !self.multiline {
                return Err(self.unterminated(start, c.pos(), messages));
            }
            c.advance();
        }

        let value = c.slice_from(content_start);
        c.advance();
        let len = c.pos() - start;

        if self.single_char {
            let span = Span::new(start, c.pos());
            match self.char_count(value) {
                1 => {}
                0 => {
                    messages.error(span, "empty character literal");
                    return Err(LiteralFailure { len });
                }
                _ => {
                    messages.error(span, "character literal may only contain one character");
                    return Err(LiteralFailure { len });
                }
            }
        }

        Ok(LiteralMatch {
            len,
            kind: self.kind.clone(),
            value,
        })
    }
}
