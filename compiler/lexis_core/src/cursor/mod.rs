//! Read position over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! The buffer behind a cursor always ends in a run of `0x00` padding, so
//! reading the byte under the cursor never needs a bounds check: at the end
//! of input it reads the first padding byte. End of input is therefore
//! `current() == 0 && pos >= source_len`; a NUL *inside* the source is plain
//! input and classifies like any other byte.
//!
//! Cursors are `Copy`. Matchers look ahead on a copy and report a length,
//! and the scanner commits it with [`Cursor::advance_n`].

use memchr::{memchr, memchr2, memchr3, memmem};

/// Byte cursor over padded source text.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes followed by at least one `0x00`.
    buf: &'a [u8],
    pos: u32,
    /// Length of the source proper.
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets are bounded by source_len, a u32"
)]
fn offset_u32(offset: usize) -> u32 {
    offset as u32
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            buf.get(source_len as usize) == Some(&0),
            "buffer must be NUL-padded past the source"
        );
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte after the current one.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(2))
    }

    #[inline]
    fn byte_at(&self, at: u32) -> u8 {
        self.buf.get(at as usize).copied().unwrap_or(0)
    }

    /// Step one byte. Only valid before end of input.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Step `n` bytes, stopping at end of input.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len.max(self.pos));
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len && self.current() == 0
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes from the cursor to the end of input.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        let from = self.pos.min(self.source_len) as usize;
        self.buf.get(from..self.source_len as usize).unwrap_or_default()
    }

    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Source text in `start..end`.
    ///
    /// Every offset the scanner hands out lies on a character boundary of
    /// the original `&str`. Out-of-range or split-character ranges give `""`.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.source_len, "bad slice {start}..{end}");
        self.buf
            .get(start as usize..end as usize)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Step over bytes while `pred` holds.
    ///
    /// `pred(0)` must be `false`: the padding is what stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Length of the UTF-8 sequence introduced by `lead`. Continuation and
    /// invalid bytes count as one.
    #[inline]
    pub fn utf8_char_width(lead: u8) -> u32 {
        match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Byte width of the character under the cursor, never reaching past
    /// the end of input. `0` at end of input.
    #[inline]
    pub fn char_len(&self) -> u32 {
        if self.is_eof() {
            return 0;
        }
        Self::utf8_char_width(self.current()).min(self.source_len - self.pos)
    }

    #[inline]
    pub fn advance_char(&mut self) {
        self.pos += self.char_len();
    }

    /// Stop on the next `\n` or `\r`, or at end of input.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr2(b'\n', b'\r', self.remaining()) {
            Some(offset) => self.pos += offset_u32(offset),
            None => self.seek_eof(),
        }
    }

    /// Stop on the next byte a quoted literal must look at and return it:
    /// `quote`, `escape`, `\n` or `\r`. Returns `0` at end of input.
    pub fn skip_to_quote_delim(&mut self, quote: u8, escape: Option<u8>) -> u8 {
        let rest = self.remaining();
        let hit = match escape {
            None => memchr3(quote, b'\n', b'\r', rest),
            // memchr3 takes three needles; search `\r` separately.
            Some(esc) => match (memchr3(quote, esc, b'\n', rest), memchr(b'\r', rest)) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            },
        };
        match hit {
            Some(offset) => {
                self.pos += offset_u32(offset);
                self.current()
            }
            None => {
                self.seek_eof();
                0
            }
        }
    }

    /// Distance from the cursor to the first `needle` in the remaining input.
    pub fn find(&self, needle: &[u8]) -> Option<u32> {
        memmem::find(self.remaining(), needle).map(offset_u32)
    }

    pub fn seek_eof(&mut self) {
        self.pos = self.source_len.max(self.pos);
    }
}
