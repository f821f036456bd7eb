//! Owned, NUL-padded copy of the text being scanned.
//!
//! The scanner and the trie read one byte past the current position on
//! nearly every step. Padding the copy with zeros lets those reads go
//! unchecked: the first padding byte doubles as the end-of-input marker
//! (see [`Cursor`]), and the rest keeps `peek`/`peek2` inside the
//! allocation. The padded length is a multiple of [`PAD_TO`].

use crate::{Cursor, LineCol, LineIndex, Span};

/// Padded buffers are sized to a multiple of this (one cache line).
pub(crate) const PAD_TO: usize = 64;

/// Source text prepared for scanning.
///
/// ```text
/// | source bytes | 0x00 | 0x00 ... |
/// 0              len    next multiple of PAD_TO
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    padded: Vec<u8>,
    len: u32,
    lines: LineIndex,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// Offsets are `u32` throughout the crate, so text beyond `u32::MAX`
    /// bytes is dropped (at a character boundary).
    pub fn new(source: &str) -> Self {
        let source = clip(source);
        let len = source.len();
        let mut padded = source.as_bytes().to_vec();
        padded.resize((len / PAD_TO + 1) * PAD_TO, 0);

        SourceBuffer {
            padded,
            len: u32::try_from(len).unwrap_or(u32::MAX),
            lines: LineIndex::build(source),
        }
    }

    /// The source bytes, without padding.
    pub fn as_bytes(&self) -> &[u8] {
        self.padded.get(..self.len as usize).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// A cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.padded, self.len)
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.lines
    }

    /// 1-based line and column of a byte offset.
    pub fn line_col(&self, offset: u32) -> LineCol {
        self.lines.line_col(self.as_str(), offset)
    }

    /// Text under `span`; `""` when out of range.
    pub fn text(&self, span: Span) -> &str {
        self.as_str().get(span.to_range()).unwrap_or_default()
    }
}

/// Longest prefix of `source` addressable with `u32` offsets.
fn clip(source: &str) -> &str {
    let mut end = source.len().min(u32::MAX as usize);
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    source.get(..end).unwrap_or_default()
}

#[cfg(test)]
mod tests;
