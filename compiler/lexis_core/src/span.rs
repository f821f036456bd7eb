//! Byte ranges into the scanned source.

use std::fmt;

/// `start..end` in source bytes, half-open.
///
/// Offsets are `u32` like [`Cursor`](crate::Cursor) positions, which keeps
/// tokens small; a source is limited to `u32::MAX` bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Span>() == 8);

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`, for positions rather than ranges.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span::new(offset, offset)
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The same range as `usize` indices, for slicing.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

// Debug and Display agree: spans show up in test diffs and in messages.
impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_queries() {
        let span = Span::new(4, 9);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(span.contains(4));
        assert!(span.contains(8));
        assert!(!span.contains(9));
        assert_eq!(span.to_range(), 4..9);
    }

    #[test]
    fn points_contain_nothing() {
        let point = Span::point(7);
        assert!(point.is_empty());
        assert_eq!(point.len(), 0);
        assert!(!point.contains(7));
    }

    #[test]
    fn renders_as_a_range() {
        assert_eq!(Span::new(3, 9).to_string(), "3..9");
        assert_eq!(format!("{:?}", Span::new(0, 1)), "0..1");
    }
}
