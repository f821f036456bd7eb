//! The C-family grammar.
//!
//! | class | rule |
//! |-------|------|
//! | `Letter`, `Connector` | identifier run over letters, digits and `_`/`$`; keywords promoted |
//! | `Whitespace` | trivia run |
//! | `Newline` | `\n`, `\r`, `\r\n` |
//! | `Digit` | numeric literal |
//! | `Operator`, `Delimiter`, `Quote` | trie: operators, `"` `'` `//` `/*` openers |
//! | `Other` | unexpected |
//!
//! Block comments do not nest, as in C.

use std::sync::OnceLock;

use lexis_core::{
    BlockComment, CharClass, CharClassTable, ClassRule, ClassSet, Grammar, GrammarError,
    LineComment, NumericLiteral, QuotedLiteral, Recovery, RunRule, Tokenizer,
};

use crate::kind::{KEYWORDS, OPERATORS};
use crate::TokenKind;

/// Assemble a fresh C-family grammar.
pub fn build_grammar(recovery: Recovery) -> Result<Grammar<TokenKind>, GrammarError> {
    let ident = RunRule::new(TokenKind::Ident)
        .continues(ClassSet::WORD)
        .keywords();

    let mut builder = Grammar::builder(CharClassTable::ASCII)
        .rule(CharClass::Letter, ClassRule::Run(ident.clone()))
        .rule(CharClass::Connector, ClassRule::Run(ident))
        .rule(
            CharClass::Whitespace,
            ClassRule::Run(RunRule::new(TokenKind::Whitespace).trivia()),
        )
        .rule(
            CharClass::Newline,
            ClassRule::Newline {
                kind: TokenKind::Newline,
            },
        )
        .rule(CharClass::Operator, ClassRule::Trie)
        .rule(CharClass::Delimiter, ClassRule::Trie)
        .rule(CharClass::Quote, ClassRule::Trie)
        .literal_class(
            CharClass::Digit,
            NumericLiteral::new(TokenKind::Int, TokenKind::Float),
        )
        .literal_opener("\"", QuotedLiteral::new(b'"', TokenKind::Str))
        .literal_opener("'", QuotedLiteral::new(b'\'', TokenKind::Char).single_char())
        .literal_opener("//", LineComment::new(TokenKind::LineComment))
        .literal_opener(
            "/*",
            BlockComment::new(TokenKind::BlockComment, "/*", "*/"),
        )
        .recovery(recovery);

    for &(text, kind) in OPERATORS {
        builder = builder.token(text, kind);
    }
    for &(word, kind) in KEYWORDS {
        builder = builder.keyword(word, kind);
    }
    builder.build()
}

static GRAMMAR: OnceLock<Result<Grammar<TokenKind>, GrammarError>> = OnceLock::new();

/// The shared C-family grammar, built on first use.
///
/// Grammars are immutable, so every scan in the process can borrow this one.
pub fn grammar() -> Result<&'static Grammar<TokenKind>, GrammarError> {
    GRAMMAR
        .get_or_init(|| build_grammar(Recovery::SkipRange))
        .as_ref()
        .map_err(Clone::clone)
}

/// A tokenizer over [`grammar`].
pub fn tokenizer() -> Result<Tokenizer<&'static Grammar<TokenKind>>, GrammarError> {
    Ok(Tokenizer::new(grammar()?))
}

#[cfg(test)]
mod tests;
