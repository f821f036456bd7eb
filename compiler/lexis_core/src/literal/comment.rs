//! Line and block comments.

use memchr::memmem;

use super::{LiteralFailure, LiteralMatch, LiteralParser};
use crate::{Cursor, Messages, Span};

/// Comment running from its opener to the end of the line.
///
/// The line terminator is not part of the comment. Never fails.
#[derive(Clone, Debug)]
pub struct LineComment<P> {
    kind: P,
}

impl<P> LineComment<P> {
    pub fn new(kind: P) -> Self {
        LineComment { kind }
    }
}

impl<P: Clone + Send + Sync> LiteralParser<P> for LineComment<P> {
    fn parse<'a>(
        &self,
        cursor: Cursor<'a>,
        opener_len: u32,
        _messages: &mut Messages,
    ) -> Result<LiteralMatch<'a, P>, LiteralFailure> {
        let start = cursor.pos();
        let mut c = cursor;
        c.advance_n(opener_len);
        let body_start = c.pos();
        c.eat_until_newline_or_eof();
        Ok(LiteralMatch {
            len: c.pos() - start,
            kind: self.kind.clone(),
            value: c.slice_from(body_start),
        })
    }
}

/// Comment between an opener and a closing delimiter, optionally nesting.
#[derive(Clone, Debug)]
pub struct BlockComment<P> {
    kind: P,
    open: &'static str,
    close: &'static str,
    nested: bool,
}

impl<P> BlockComment<P> {
    pub fn new(kind: P, open: &'static str, close: &'static str) -> Self {
        BlockComment {
            kind,
            open,
            close,
            nested: false,
        }
    }

    /// Count inner openers, so `/* a /* b */ c */` is one comment.
    #[must_use]
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    /// Offset of the closer that balances the already-consumed opener,
    /// relative to `body`, or `None` if the comment is unterminated.
    fn closing_offset(&self, body: &[u8]) -> Option<usize> {
        let close = self.close.as_bytes();
        if !self.nested || self.open.is_empty() {
            return memmem::find(body, close);
        }
        let open = self.open.as_bytes();
        let mut depth = 1usize;
        let mut at = 0;
        loop {
            let rest = body.get(at..)?;
            let next_close = memmem::find(rest, close)?;
            match memmem::find(rest, open) {
                Some(next_open) if next_open < next_close => {
                    depth += 1;
                    at += next_open + open.len();
                }
                _ => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(at + next_close);
                    }
                    at += next_close + close.len();
                }
            }
        }
    }
}

impl<P: Clone + Send + Sync> LiteralParser<P> for BlockComment<P> {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets within remaining() fit in u32"
    )]
    fn parse<'a>(
        &self,
        cursor: Cursor<'a>,
        opener_len: u32,
        messages: &mut Messages,
    ) -> Result<LiteralMatch<'a, P>, LiteralFailure> {
        let start = cursor.pos();
        let mut c = cursor;
        let opener = if opener_len == 0 {
            self.open.len() as u32
        } else {
            opener_len
        };
        c.advance_n(opener);
        let body_start = c.pos();

        let Some(offset) = self.closing_offset(c.remaining()) else {
            c.seek_eof();
            messages.error(
                Span::new(start, c.pos()),
                format!("unterminated block comment, expected `{}`", self.close),
            );
            return Err(LiteralFailure {
                len: c.pos() - start,
            });
        };

        c.advance_n(offset as u32);
        let value = c.slice_from(body_start);
        c.advance_n(self.close.len() as u32);
        Ok(LiteralMatch {
            len: c.pos() - start,
            kind: self.kind.clone(),
            value,
        })
    }
}
