#![allow(clippy::unwrap_used, clippy::expect_used)]

use lexis_core::{Configuration, Entry};
use pretty_assertions::assert_eq;

use super::*;
use crate::{lex, LexOptions};

#[test]
fn shared_grammar_is_built_once() {
    let a = grammar().unwrap();
    let b = grammar().unwrap();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.recovery(), Recovery::SkipRange);
}

#[test]
fn fresh_grammar_takes_recovery_mode() {
    let g = build_grammar(Recovery::NextLine).unwrap();
    assert_eq!(g.recovery(), Recovery::NextLine);
    // Quoted strings, chars, line and block comments, numbers.
    assert_eq!(g.literal_count(), 5);
}

#[test]
fn every_operator_scans_to_its_kind() {
    for &(text, kind) in OPERATORS {
        let output = lex(text, &LexOptions::default()).unwrap();
        assert!(!output.has_errors(), "{text:?}");
        assert_eq!(output.tokens.kinds(), [kind], "{text:?}");
        assert_eq!(output.tokens.get(0).unwrap().text, text);
    }
}

#[test]
fn every_keyword_scans_to_its_kind() {
    for &(word, kind) in KEYWORDS {
        let output = lex(word, &LexOptions::default()).unwrap();
        assert_eq!(output.tokens.kinds(), [kind], "{word:?}");
    }
}

#[test]
fn keywords_need_an_exact_match() {
    let output = lex("iffy _if if2 $while If", &LexOptions::default()).unwrap();
    assert_eq!(output.tokens.kinds(), [TokenKind::Ident; 5]);
}

#[test]
fn openers_live_in_the_trie() {
    let g = grammar().unwrap();
    for opener in ["\"", "'", "//", "/*"] {
        assert!(
            matches!(g.trie().get(opener.as_bytes()), Some(Entry::Literal(_))),
            "{opener:?}"
        );
    }
}
