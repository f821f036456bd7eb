//! Integer and floating-point literals.
//!
//! Grammar accepted (with every option enabled):
//!
//! ```text
//! int    = dec | "0x" hex+ | "0o" oct+ | "0b" bin+ , suffix?
//! float  = dec ( "." dec )? ( [eE] [+-]? dec )? , suffix?
//! dec    = digit ( digit | "_" )*
//! suffix = [A-Za-z_] [A-Za-z0-9_]*
//! ```
//!
//! A `.` only belongs to the number when a digit follows it, so `1..2` and
//! `x.0.1` style member access are left to the operator trie.

use super::{LiteralFailure, LiteralMatch, LiteralParser};
use crate::{Cursor, Messages, Span};

/// Number literal parser with distinct integer and float kinds.
#[derive(Clone, Debug)]
pub struct NumericLiteral<P> {
    int: P,
    float: P,
    separators: bool,
    radix_prefixes: bool,
    suffixes: bool,
}

impl<P> NumericLiteral<P> {
    /// Decimal, radix-prefixed and float literals with `_` separators and
    /// alphanumeric suffixes.
    pub fn new(int: P, float: P) -> Self {
        NumericLiteral {
            int,
            float,
            separators: true,
            radix_prefixes: true,
            suffixes: true,
        }
    }

    /// Disable `_` digit separators.
    #[must_use]
    pub fn without_separators(mut self) -> Self {
        self.separators = false;
        self
    }

    /// Disable `0x`/`0o`/`0b` prefixes.
    #[must_use]
    pub fn without_radix_prefixes(mut self) -> Self {
        self.radix_prefixes = false;
        self
    }

    /// Disable type suffixes such as `10u` or `1.0f`.
    #[must_use]
    pub fn without_suffixes(mut self) -> Self {
        self.suffixes = false;
        self
    }

    fn eat_digits(&self, c: &mut Cursor<'_>, is_digit: impl Fn(u8) -> bool) {
        let separators = self.separators;
        c.eat_while(|b| is_digit(b) || (separators && b == b'_'));
    }

    fn eat_suffix(&self, c: &mut Cursor<'_>) {
        if self.suffixes && (c.current().is_ascii_alphabetic() || c.current() == b'_') {
            c.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        }
    }

    fn radix_literal<'a>(
        &self,
        start: u32,
        mut c: Cursor<'a>,
        messages: &mut Messages,
    ) -> Result<LiteralMatch<'a, P>, LiteralFailure>
    where
        P: Clone,
    {
        let (radix, name) = match c.peek() {
            b'x' | b'X' => (16, "hexadecimal"),
            b'o' | b'O' => (8, "octal"),
            _ => (2, "binary"),
        };
        c.advance_n(2);
        let digits_start = c.pos();
        // Eat every decimal digit so `0b102` reports the `2` instead of
        // ending the literal before it.
        if radix == 16 {
            self.eat_digits(&mut c, |b| b.is_ascii_hexdigit());
        } else {
            self.eat_digits(&mut c, |b| b.is_ascii_digit());
        }
        let digits = c.slice_from(digits_start);

        if !digits.bytes().any(|b| b != b'_') {
            self.eat_suffix(&mut c);
            let span = Span::new(start, c.pos());
            messages.error(span, format!("{name} literal has no digits"));
            return Err(LiteralFailure { len: span.len() });
        }
        if let Some(offset) = digits
            .bytes()
            .position(|b| b != b'_' && !char::from(b).is_digit(radix))
        {
            self.eat_suffix(&mut c);
            let bad = digits_start + u32::try_from(offset).unwrap_or(0);
            messages.error(
                Span::new(bad, bad + 1),
                format!(
                    "invalid digit `{}` for base {radix} literal",
                    &digits[offset..=offset]
                ),
            );
            return Err(LiteralFailure {
                len: c.pos() - start,
            });
        }

        self.eat_suffix(&mut c);
        Ok(LiteralMatch {
            len: c.pos() - start,
            kind: self.int.clone(),
            value: c.slice_from(start),
        })
    }
}

impl<P: Clone + Send + Sync> LiteralParser<P> for NumericLiteral<P> {
    fn parse<'a>(
        &self,
        cursor: Cursor<'a>,
        _opener_len: u32,
        messages: &mut Messages,
    ) -> Result<LiteralMatch<'a, P>, LiteralFailure> {
        let start = cursor.pos();
        let mut c = cursor;

        if self.radix_prefixes
            && c.current() == b'0'
            && matches!(c.peek(), b'x' | b'X' | b'o' | b'O' | b'b' | b'B')
        {
            return self.radix_literal(start, c, messages);
        }

        self.eat_digits(&mut c, |b| b.is_ascii_digit());
        let mut is_float = false;

        if c.current() == b'.' && c.peek().is_ascii_digit() {
            is_float = true;
            c.advance();
            self.eat_digits(&mut c, |b| b.is_ascii_digit());
        }

        if matches!(c.current(), b'e' | b'E') {
            let exp_start = c.pos();
            c.advance();
            if matches!(c.current(), b'+' | b'-') {
                c.advance();
            }
            if !c.current().is_ascii_digit() {
                self.eat_suffix(&mut c);
                messages.error(
                    Span::new(exp_start, c.pos()),
                    "exponent has no digits",
                );
                return Err(LiteralFailure {
                    len: c.pos() - start,
                });
            }
            is_float = true;
            self.eat_digits(&mut c, |b| b.is_ascii_digit());
        }

        self.eat_suffix(&mut c);
        let kind = if is_float { &self.float } else { &self.int };
        Ok(LiteralMatch {
            len: c.pos() - start,
            kind: kind.clone(),
            value: c.slice_from(start),
        })
    }
}
