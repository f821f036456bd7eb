//! Line/column recovery from byte offsets.
//!
//! Tokens and diagnostics carry byte spans only. [`LineIndex`] pre-computes
//! the offset of every line start so a human-readable position can be
//! recovered in O(log L) when a diagnostic is rendered.

use std::fmt;

/// 1-based line and column. Columns count characters, not bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Pre-computed line offset table.
///
/// ```
/// use lexis_core::{LineCol, LineIndex};
///
/// let source = "line1\nline2\nline3";
/// let index = LineIndex::build(source);
///
/// assert_eq!(index.line_col(source, 0), LineCol { line: 1, col: 1 });
/// assert_eq!(index.line_col(source, 6), LineCol { line: 2, col: 1 });
/// assert_eq!(index.line_col(source, 14), LineCol { line: 3, col: 3 });
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineIndex {
    /// Build the table with a single `memchr` pass over the source.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`, the same terminators the
    /// scanner recognizes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "sources are addressed with u32 offsets throughout the crate"
    )]
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut offsets = vec![0u32];
        offsets.extend(
            memchr::memchr2_iter(b'\n', b'\r', bytes)
                // `\r\n` starts its line after the `\n`.
                .filter(|&i| !(bytes.get(i) == Some(&b'\r') && bytes.get(i + 1) == Some(&b'\n')))
                .map(|i| (i + 1) as u32),
        );
        LineIndex { offsets }
    }

    /// Number of lines (an empty source has one line).
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// 1-based line containing `offset`.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the u32 source length"
    )]
    pub fn line(&self, offset: u32) -> u32 {
        let idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        idx as u32 + 1
    }

    /// Byte offset where 1-based `line` starts, if it exists.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = usize::try_from(line.checked_sub(1)?).ok()?;
        self.offsets.get(idx).copied()
    }

    /// 1-based (line, column) of `offset` within `source`.
    ///
    /// Offsets past the end clamp to the end of the source.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "column is bounded by the u32 source length"
    )]
    pub fn line_col(&self, source: &str, offset: u32) -> LineCol {
        let line = self.line(offset);
        let start = self.line_start(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len()).max(start);
        let col = source
            .get(start..end)
            .map_or(end - start, |text| text.chars().count());
        LineCol {
            line,
            col: col as u32 + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_has_one_line() {
        let index = LineIndex::build("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col("", 0), LineCol { line: 1, col: 1 });
    }

    #[test]
    fn offsets_on_newline_belong_to_that_line() {
        let source = "ab\ncd";
        let index = LineIndex::build(source);
        assert_eq!(index.line(2), 1);
        assert_eq!(index.line(3), 2);
        assert_eq!(index.line_col(source, 2), LineCol { line: 1, col: 3 });
    }

    #[test]
    fn columns_count_characters() {
        let source = "x = \"\u{e9}t\u{e9}\" + y";
        let index = LineIndex::build(source);
        // 'é' is two bytes; '+' sits at byte 12, character 10.
        let plus = source.find('+').unwrap_or_default();
        assert_eq!(plus, 12);
        assert_eq!(
            index.line_col(source, u32::try_from(plus).unwrap_or(0)),
            LineCol { line: 1, col: 11 }
        );
    }

    #[test]
    fn offset_past_end_clamps() {
        let source = "a\nb";
        let index = LineIndex::build(source);
        assert_eq!(index.line_col(source, 99), LineCol { line: 2, col: 2 });
    }

    #[test]
    fn carriage_returns_end_lines() {
        let source = "a\rb\r\nc\nd";
        let index = LineIndex::build(source);
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.line_col(source, 2), LineCol { line: 2, col: 1 });
        // `\r\n` is one terminator: its `\n` stays on line 2.
        assert_eq!(index.line_col(source, 4), LineCol { line: 2, col: 3 });
        assert_eq!(index.line_col(source, 5), LineCol { line: 3, col: 1 });
        assert_eq!(index.line_col(source, 7), LineCol { line: 4, col: 1 });
    }

    #[test]
    fn line_start_lookup() {
        let index = LineIndex::build("a\nbb\nccc");
        assert_eq!(index.line_start(1), Some(0));
        assert_eq!(index.line_start(3), Some(5));
        assert_eq!(index.line_start(0), None);
        assert_eq!(index.line_start(4), None);
    }
}
