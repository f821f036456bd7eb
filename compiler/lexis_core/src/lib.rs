//! Trie-accelerated tokenizer engine with a composable filter pipeline.
//!
//! This crate is standalone: it knows nothing about any particular language.
//! A language plugs in through a [`Configuration`] (usually a [`Grammar`]):
//! a character class table, the trie of operators and keywords, class rules,
//! and literal sub-parsers. Recognized tokens are dispatched through a
//! [`HandlerChain`] of filters ending in a final consumer.
//!
//! ```text
//! source → SourceBuffer → Cursor
//!        → classify / trie / literal parsers (Scanner)
//!        → HandlerChain (filters, most recently installed first)
//!        → final consumer
//! ```
//!
//! Diagnostics (unexpected input, possible unknown operators, literal
//! messages) leave the scan through the optional callbacks in
//! [`Diagnostics`], independent of the token flow.
//!
//! # Example
//!
//! ```
//! use lexis_core::{
//!     CharClass, CharClassTable, ClassRule, ClassSet, Diagnostics, Grammar, HandlerChain,
//!     Messages, OwnedToken, RunRule, SourceBuffer, Tokenizer,
//! };
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Kind { Ident, Plus, PlusPlus, Space }
//!
//! let grammar = Grammar::builder(CharClassTable::ASCII)
//!     .rule(CharClass::Letter, ClassRule::Run(RunRule::new(Kind::Ident)))
//!     .rule(CharClass::Whitespace, ClassRule::Run(RunRule::new(Kind::Space).trivia()))
//!     .rule(CharClass::Operator, ClassRule::Trie)
//!     .token("+", Kind::Plus)
//!     .token("++", Kind::PlusPlus)
//!     .build()
//!     .unwrap();
//!
//! let tokenizer = Tokenizer::new(grammar);
//! let source = SourceBuffer::new("a ++ b");
//! let mut tokens: Vec<OwnedToken<Kind>> = Vec::new();
//! let mut chain = HandlerChain::new(&mut tokens);
//! let mut messages = Messages::new();
//! tokenizer
//!     .scan(&source, &mut chain, &mut Diagnostics::new(), &mut messages)
//!     .unwrap();
//! drop(chain);
//!
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
//! assert_eq!(kinds, [Kind::Ident, Kind::Space, Kind::PlusPlus, Kind::Space, Kind::Ident]);
//! ```

mod char_class;
mod cursor;
mod diagnostics;
mod error;
mod grammar;
mod handler;
mod line_index;
mod literal;
mod messages;
mod scanner;
mod source_buffer;
mod span;
mod trie;

pub use char_class::{CharClass, CharClassTable, ClassSet};
pub use cursor::Cursor;
pub use diagnostics::{DetectionSite, Diagnostics, UnexpectedInput, UnexpectedPolicy, UnexpectedReason};
pub use error::{GrammarError, ScanError};
pub use grammar::{ClassRule, Configuration, Entry, Grammar, GrammarBuilder, LiteralId, Recovery, RunRule};
pub use handler::{
    filter_fn, from_fn, FnFilter, FnHandler, HandlerChain, Next, OwnedToken, PassThrough,
    Reclassify, Suppress, Token, TokenHandler, TraceTokens,
};
pub use line_index::{LineCol, LineIndex};
pub use literal::{
    BlockComment, LineComment, LiteralFailure, LiteralMatch, LiteralParser, NumericLiteral,
    QuotedLiteral,
};
pub use messages::{Message, Messages, Severity};
pub use scanner::{ScanState, ScanSummary, Scanner, Tokenizer};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use trie::{NodeId, Trie, TrieMatch, TrieNode};
