#![allow(clippy::unwrap_used, clippy::expect_used)]

use lexis_core::{from_fn, HandlerChain, Messages, OwnedToken, Span, Token};
use pretty_assertions::assert_eq;

use super::*;

fn token(kind: TokenKind, start: u32, text: &str) -> Token<'_, TokenKind> {
    Token {
        kind,
        span: Span::new(start, start + u32::try_from(text.len()).unwrap()),
        text,
        line_start: start == 0,
    }
}

#[test]
fn drop_trivia_keeps_everything_else() {
    let mut out: Vec<OwnedToken<TokenKind>> = Vec::new();
    let mut messages = Messages::new();
    {
        let mut chain = HandlerChain::new(&mut out).with(DropTrivia::new);
        for tok in [
            token(TokenKind::Ident, 0, "a"),
            token(TokenKind::Whitespace, 1, " "),
            token(TokenKind::LineComment, 2, " x"),
            token(TokenKind::Newline, 5, "\n"),
            token(TokenKind::Ident, 6, "b"),
        ] {
            assert!(chain.dispatch(&tok, &mut messages));
        }
    }
    let texts: Vec<_> = out.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["a", "b"]);
}

#[test]
fn split_shift_halves_the_span() {
    let mut out: Vec<OwnedToken<TokenKind>> = Vec::new();
    let mut messages = Messages::new();
    {
        let mut chain = HandlerChain::new(&mut out).with(SplitShift::new);
        assert!(chain.dispatch(&token(TokenKind::Shr, 0, ">>"), &mut messages));
        assert!(chain.dispatch(&token(TokenKind::ShrEq, 2, ">>="), &mut messages));
    }
    assert_eq!(
        out,
        [
            OwnedToken {
                kind: TokenKind::Gt,
                span: Span::new(0, 1),
                text: ">".to_owned(),
                line_start: true,
            },
            OwnedToken {
                kind: TokenKind::Gt,
                span: Span::new(1, 2),
                text: ">".to_owned(),
                line_start: false,
            },
            OwnedToken {
                kind: TokenKind::ShrEq,
                span: Span::new(2, 5),
                text: ">>=".to_owned(),
                line_start: false,
            },
        ]
    );
}

#[test]
fn split_shift_stops_after_refused_half() {
    let mut seen = 0;
    let mut messages = Messages::new();
    let mut chain = HandlerChain::new(from_fn(|_: &Token<'_, TokenKind>, _: &mut Messages| {
        seen += 1;
        false
    }))
    .with(SplitShift::new);
    assert!(!chain.dispatch(&token(TokenKind::Shr, 0, ">>"), &mut messages));
    drop(chain);
    assert_eq!(seen, 1);
}

#[test]
fn tally_counts_what_it_sees() {
    let mut counts = KindCounts::default();
    let mut out: Vec<OwnedToken<TokenKind>> = Vec::new();
    let mut messages = Messages::new();
    {
        let mut chain = HandlerChain::new(&mut out);
        chain.install(DropTrivia::new);
        chain.install(|next| Tally::new(next, &mut counts));
        for tok in [
            token(TokenKind::Ident, 0, "a"),
            token(TokenKind::Whitespace, 1, " "),
            token(TokenKind::Plus, 2, "+"),
            token(TokenKind::Whitespace, 3, " "),
            token(TokenKind::Ident, 4, "b"),
        ] {
            chain.dispatch(&tok, &mut messages);
        }
    }
    // Tally sits in front of DropTrivia, so it still counts whitespace.
    assert_eq!(counts.get(&TokenKind::Ident), Some(&2));
    assert_eq!(counts.get(&TokenKind::Whitespace), Some(&2));
    assert_eq!(counts.get(&TokenKind::Plus), Some(&1));
    assert_eq!(out.len(), 3);
}
