//! Token kinds for the C family.

use std::fmt;

/// Token kinds produced by the C-family grammar.
///
/// Literal kinds carry no value: the token's text is the literal body (for
/// strings and chars, the raw text between the quotes).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum TokenKind {
    Ident,
    /// Decimal or radix-prefixed integer, with optional suffix: `42`, `0xFFu`
    Int,
    /// `1.5`, `2e-8`, `1.0f`
    Float,
    /// `"hello"`
    Str,
    /// `'a'`, `'\n'`
    Char,

    Auto,
    Break,
    Case,
    Const,
    Continue,
    Default,
    Do,
    Else,
    Enum,
    Extern,
    False,
    For,
    Goto,
    If,
    Inline,
    Null,
    Return,
    Sizeof,
    Static,
    Struct,
    Switch,
    True,
    Typedef,
    Union,
    Volatile,
    While,

    LParen,     // (
    RParen,     // )
    LBracket,   // [
    RBracket,   // ]
    LBrace,     // {
    RBrace,     // }
    Comma,      // ,
    Semicolon,  // ;
    Dot,        // .
    Ellipsis,   // ...
    Arrow,      // ->
    Colon,      // :
    ColonColon, // ::
    Question,   // ?
    Hash,       // #
    HashHash,   // ##
    At,         // @

    Plus,       // +
    PlusPlus,   // ++
    PlusEq,     // +=
    Minus,      // -
    MinusMinus, // --
    MinusEq,    // -=
    Star,       // *
    StarEq,     // *=
    Slash,      // /
    SlashEq,    // /=
    Percent,    // %
    PercentEq,  // %=
    Eq,         // =
    EqEq,       // ==
    Bang,       // !
    NotEq,      // !=
    Lt,         // <
    LtEq,       // <=
    Shl,        // <<
    ShlEq,      // <<=
    Gt,         // >
    GtEq,       // >=
    Shr,        // >>
    ShrEq,      // >>=
    Amp,        // &
    AmpAmp,     // &&
    AmpEq,      // &=
    Pipe,       // |
    PipePipe,   // ||
    PipeEq,     // |=
    Caret,      // ^
    CaretEq,    // ^=
    Tilde,      // ~

    Whitespace,
    Newline,
    LineComment,
    BlockComment,
}

/// Reserved words, registered as exact trie keys.
pub(crate) const KEYWORDS: &[(&str, TokenKind)] = &[
    ("auto", TokenKind::Auto),
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("default", TokenKind::Default),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("enum", TokenKind::Enum),
    ("extern", TokenKind::Extern),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("goto", TokenKind::Goto),
    ("if", TokenKind::If),
    ("inline", TokenKind::Inline),
    ("NULL", TokenKind::Null),
    ("return", TokenKind::Return),
    ("sizeof", TokenKind::Sizeof),
    ("static", TokenKind::Static),
    ("struct", TokenKind::Struct),
    ("switch", TokenKind::Switch),
    ("true", TokenKind::True),
    ("typedef", TokenKind::Typedef),
    ("union", TokenKind::Union),
    ("volatile", TokenKind::Volatile),
    ("while", TokenKind::While),
];

/// Operators and delimiters, matched longest-first through the trie.
pub(crate) const OPERATORS: &[(&str, TokenKind)] = &[
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (".", TokenKind::Dot),
    ("...", TokenKind::Ellipsis),
    ("->", TokenKind::Arrow),
    (":", TokenKind::Colon),
    ("::", TokenKind::ColonColon),
    ("?", TokenKind::Question),
    ("#", TokenKind::Hash),
    ("##", TokenKind::HashHash),
    ("@", TokenKind::At),
    ("+", TokenKind::Plus),
    ("++", TokenKind::PlusPlus),
    ("+=", TokenKind::PlusEq),
    ("-", TokenKind::Minus),
    ("--", TokenKind::MinusMinus),
    ("-=", TokenKind::MinusEq),
    ("*", TokenKind::Star),
    ("*=", TokenKind::StarEq),
    ("/", TokenKind::Slash),
    ("/=", TokenKind::SlashEq),
    ("%", TokenKind::Percent),
    ("%=", TokenKind::PercentEq),
    ("=", TokenKind::Eq),
    ("==", TokenKind::EqEq),
    ("!", TokenKind::Bang),
    ("!=", TokenKind::NotEq),
    ("<", TokenKind::Lt),
    ("<=", TokenKind::LtEq),
    ("<<", TokenKind::Shl),
    ("<<=", TokenKind::ShlEq),
    (">", TokenKind::Gt),
    (">=", TokenKind::GtEq),
    (">>", TokenKind::Shr),
    (">>=", TokenKind::ShrEq),
    ("&", TokenKind::Amp),
    ("&&", TokenKind::AmpAmp),
    ("&=", TokenKind::AmpEq),
    ("|", TokenKind::Pipe),
    ("||", TokenKind::PipePipe),
    ("|=", TokenKind::PipeEq),
    ("^", TokenKind::Caret),
    ("^=", TokenKind::CaretEq),
    ("~", TokenKind::Tilde),
];

impl TokenKind {
    /// Fixed source text of keywords, operators and delimiters.
    ///
    /// `None` for kinds whose text varies (identifiers, literals, trivia).
    pub fn lexeme(self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .chain(OPERATORS)
            .find(|&&(_, kind)| kind == self)
            .map(|&(text, _)| text)
    }

    /// Whitespace, line terminators and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::Auto && self <= TokenKind::While
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::Str | TokenKind::Char
        )
    }

    /// Human-readable name for listings and diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::Str => "string",
            TokenKind::Char => "char",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            other => other.lexeme().unwrap_or("token"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(text) => write!(f, "`{text}`"),
            None => f.write_str(self.display_name()),
        }
    }
}

#[cfg(test)]
mod tests;
