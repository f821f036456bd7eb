#![allow(clippy::unwrap_used, clippy::expect_used)]

use lexis_clike::{lex, LexOptions, TokenKind};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn location_is_one_based() {
    let map = SourceMap::new("a.c", "x\n  y");
    assert_eq!(map.location(0), "a.c:1:1");
    assert_eq!(map.location(4), "a.c:2:3");
}

#[test]
fn token_listing() {
    let source = "a >>\n b";
    let output = lex(source, &LexOptions::default()).unwrap();
    let map = SourceMap::new("t.c", source);
    assert_eq!(
        render_tokens(&map, &output),
        "Tokens for 't.c' (3 tokens):\n\
         \x20 ^    1:1   Ident \"a\" @ 0..1\n\
         \x20      1:3   Shr \">>\" @ 2..4\n\
         \x20 ^    2:2   Ident \"b\" @ 6..7\n"
    );
}

#[test]
fn diagnostics_are_sorted_by_position() {
    let source = "x = \"a\\q\";\ny = ` \u{e9};\nz = 0x;\n";
    let output = lex(source, &LexOptions::default()).unwrap();
    let map = SourceMap::new("d.c", source);
    assert_eq!(
        render_diagnostics(&map, &output),
        [
            "d.c:1:7: warning: unknown escape `\\q`",
            "d.c:2:5: error: unknown operator ```",
            "d.c:2:5: note: no operator matches ```",
            "d.c:2:7: error: unexpected character `\u{e9}`",
            "d.c:3:5: error: hexadecimal literal has no digits",
        ]
    );
}

#[test]
fn stopped_scan_is_a_diagnostic() {
    let source = "a\n  \"open";
    let options = LexOptions {
        recover: false,
        ..LexOptions::default()
    };
    let output = lex(source, &options).unwrap();
    let map = SourceMap::new("s.c", source);
    assert_eq!(
        render_diagnostics(&map, &output),
        [
            "s.c:2:3: error: no closing `\"` found",
            "s.c:2:3: error: malformed literal at 4..9: no closing `\"` found",
        ]
    );
}

#[test]
fn stats_include_trivia() {
    let source = "a + b\n";
    let (counts, result) = tally(source).unwrap();
    assert_eq!(counts.get(&TokenKind::Ident), Some(&2));
    assert_eq!(counts.get(&TokenKind::Whitespace), Some(&2));
    assert_eq!(counts.get(&TokenKind::Newline), Some(&1));
    assert_eq!(result.as_ref().unwrap().tokens, 6);
    assert_eq!(
        render_stats(&SourceMap::new("s.c", source), &counts, &result),
        "       2  identifier\n\
         \x20      2  whitespace\n\
         \x20      1  +\n\
         \x20      1  newline\n\
         \x20      6  tokens (6 bytes, 0 skipped)\n"
    );
}

#[test]
fn stopped_scan_has_no_totals() {
    let source = "a\nb c";
    let (counts, _) = tally(source).unwrap();
    let stopped = Err(lexis_core::ScanError::ChainAbort {
        span: lexis_core::Span::new(4, 5),
        dispatched: 4,
    });
    let rendered = render_stats(&SourceMap::new("s.c", source), &counts, &stopped);
    assert!(!rendered.contains("tokens ("), "{rendered}");
    assert!(
        rendered.ends_with("s.c:2:3: error: scan stopped early: scan stopped by handler at 4..5 after 4 tokens\n"),
        "{rendered}"
    );
}
