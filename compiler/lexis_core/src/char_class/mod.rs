//! Character classification lookup table.
//!
//! Every byte maps to exactly one [`CharClass`] through a 128-entry table
//! indexed by ASCII code. Bytes outside the table (non-ASCII lead and
//! continuation bytes) classify as [`CharClass::Other`], so classification
//! is a total function with a single indexed read.
//!
//! Tables are built with `const fn` builders, so a language configuration
//! can keep its table in a `static`.

use bitflags::bitflags;

/// Number of table entries (ASCII).
const TABLE_LEN: usize = 128;

/// Coarse character class consulted by the scan engine.
///
/// What each class *means* is decided by the configuration's class rules;
/// the names describe the usual assignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CharClass {
    /// Unrecognized input, including every non-ASCII byte.
    #[default]
    Other = 0,
    /// Horizontal whitespace.
    Whitespace = 1,
    /// Line terminators (`\n`, `\r`).
    Newline = 2,
    Digit = 3,
    Letter = 4,
    /// Identifier connectors such as `_` and `$`.
    Connector = 5,
    /// Characters that start operators.
    Operator = 6,
    /// Brackets and separators.
    Delimiter = 7,
    /// Characters that open quoted literals.
    Quote = 8,
}

impl CharClass {
    /// All classes, in discriminant order.
    pub const ALL: [CharClass; 9] = [
        CharClass::Other,
        CharClass::Whitespace,
        CharClass::Newline,
        CharClass::Digit,
        CharClass::Letter,
        CharClass::Connector,
        CharClass::Operator,
        CharClass::Delimiter,
        CharClass::Quote,
    ];

    /// Index of this class in per-class tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

bitflags! {
    /// A set of [`CharClass`] values, used for class-run continuation.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ClassSet: u16 {
        const OTHER = 1 << 0;
        const WHITESPACE = 1 << 1;
        const NEWLINE = 1 << 2;
        const DIGIT = 1 << 3;
        const LETTER = 1 << 4;
        const CONNECTOR = 1 << 5;
        const OPERATOR = 1 << 6;
        const DELIMITER = 1 << 7;
        const QUOTE = 1 << 8;
    }
}

impl ClassSet {
    /// Identifier continuation: letters, digits and connectors.
    pub const WORD: ClassSet = ClassSet::LETTER
        .union(ClassSet::DIGIT)
        .union(ClassSet::CONNECTOR);

    /// The singleton set for `class`.
    #[inline]
    pub const fn of(class: CharClass) -> ClassSet {
        ClassSet::from_bits_truncate(1 << class as u16)
    }

    /// Returns `true` if `class` is in the set.
    #[inline]
    pub const fn has(self, class: CharClass) -> bool {
        self.contains(ClassSet::of(class))
    }
}

impl From<CharClass> for ClassSet {
    fn from(class: CharClass) -> Self {
        ClassSet::of(class)
    }
}

/// Immutable byte → [`CharClass`] table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharClassTable {
    classes: [CharClass; TABLE_LEN],
}

impl CharClassTable {
    /// Conventional ASCII classification.
    ///
    /// | class | bytes |
    /// |-------|-------|
    /// | `Whitespace` | space, `\t`, VT, FF |
    /// | `Newline` | `\n`, `\r` |
    /// | `Digit` | `0-9` |
    /// | `Letter` | `a-z`, `A-Z` |
    /// | `Connector` | `_`, `$` |
    /// | `Operator` | `+ - * / % ^ & \| = ! < > ~ ? : . # @` |
    /// | `Delimiter` | `( ) [ ] { } , ;` |
    /// | `Quote` | `"`, `'`, `` ` `` |
    ///
    /// Everything else (control characters, `\`, DEL) is `Other`.
    pub const ASCII: CharClassTable = CharClassTable::new()
        .with_bytes(b" \t\x0B\x0C", CharClass::Whitespace)
        .with_bytes(b"\n\r", CharClass::Newline)
        .with_range(b'0', b'9', CharClass::Digit)
        .with_range(b'a', b'z', CharClass::Letter)
        .with_range(b'A', b'Z', CharClass::Letter)
        .with_bytes(b"_$", CharClass::Connector)
        .with_bytes(b"+-*/%^&|=!<>~?:.#@", CharClass::Operator)
        .with_bytes(b"()[]{},;", CharClass::Delimiter)
        .with_bytes(b"\"'`", CharClass::Quote);

    /// A table mapping every byte to [`CharClass::Other`].
    pub const fn new() -> Self {
        CharClassTable {
            classes: [CharClass::Other; TABLE_LEN],
        }
    }

    /// Assign `class` to one byte. Non-ASCII bytes are ignored.
    #[must_use]
    pub const fn with(mut self, byte: u8, class: CharClass) -> Self {
        if (byte as usize) < TABLE_LEN {
            self.classes[byte as usize] = class;
        }
        self
    }

    /// Assign `class` to every byte in `lo..=hi`.
    #[must_use]
    pub const fn with_range(mut self, lo: u8, hi: u8, class: CharClass) -> Self {
        let mut b = lo as usize;
        while b <= hi as usize && b < TABLE_LEN {
            self.classes[b] = class;
            b += 1;
        }
        self
    }

    /// Assign `class` to each byte of `bytes`.
    #[must_use]
    pub const fn with_bytes(mut self, bytes: &[u8], class: CharClass) -> Self {
        let mut i = 0;
        while i < bytes.len() {
            self = self.with(bytes[i], class);
            i += 1;
        }
        self
    }

    /// Classify one byte. Total: bytes ≥ 128 are [`CharClass::Other`].
    #[inline]
    pub fn classify(&self, byte: u8) -> CharClass {
        self.classes
            .get(byte as usize)
            .copied()
            .unwrap_or(CharClass::Other)
    }

    /// Returns `true` if `byte` classifies into `set`.
    #[inline]
    pub fn is_in(&self, byte: u8, set: ClassSet) -> bool {
        set.has(self.classify(byte))
    }
}

impl Default for CharClassTable {
    fn default() -> Self {
        CharClassTable::ASCII
    }
}
