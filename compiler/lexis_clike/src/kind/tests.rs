use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

use super::*;

#[test]
fn fixed_kinds_have_unique_lexemes() {
    let mut seen = FxHashSet::default();
    for &(text, kind) in KEYWORDS.iter().chain(OPERATORS) {
        assert!(seen.insert(text), "duplicate lexeme {text:?}");
        assert_eq!(kind.lexeme(), Some(text));
    }
}

#[test]
fn variable_kinds_have_no_lexeme() {
    for kind in [
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Str,
        TokenKind::Char,
        TokenKind::Whitespace,
        TokenKind::Newline,
        TokenKind::LineComment,
        TokenKind::BlockComment,
    ] {
        assert_eq!(kind.lexeme(), None, "{kind:?}");
    }
}

#[test]
fn keyword_range_matches_keyword_table() {
    for &(_, kind) in KEYWORDS {
        assert!(kind.is_keyword(), "{kind:?}");
    }
    for &(_, kind) in OPERATORS {
        assert!(!kind.is_keyword(), "{kind:?}");
    }
    assert!(!TokenKind::Ident.is_keyword());
    assert!(!TokenKind::Char.is_keyword());
}

#[test]
fn trivia_and_literals() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Newline.is_trivia());
    assert!(TokenKind::LineComment.is_trivia());
    assert!(TokenKind::BlockComment.is_trivia());
    assert!(!TokenKind::Ident.is_trivia());
    assert!(!TokenKind::Str.is_trivia());

    assert!(TokenKind::Float.is_literal());
    assert!(!TokenKind::Ident.is_literal());
}

#[test]
fn display() {
    assert_eq!(TokenKind::ShrEq.to_string(), "`>>=`");
    assert_eq!(TokenKind::While.to_string(), "`while`");
    assert_eq!(TokenKind::Str.to_string(), "string");
    assert_eq!(TokenKind::LineComment.display_name(), "line comment");
    assert_eq!(TokenKind::Arrow.display_name(), "->");
}
