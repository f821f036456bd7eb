//! C-family language preset for the lexis tokenizer.
//!
//! Provides [`TokenKind`], a shared [`grammar`] (identifiers, keywords,
//! numbers, strings, chars, line and block comments, ~50 operators and
//! delimiters), language-level filters, and [`lex`] for one-call lexing into
//! a [`TokenList`].
//!
//! ```
//! use lexis_clike::{lex, LexOptions, TokenKind};
//!
//! let output = lex("if (x >= 10) return 0;", &LexOptions::default()).unwrap();
//! assert!(!output.has_errors());
//! assert_eq!(
//!     output.tokens.kinds(),
//!     [
//!         TokenKind::If,
//!         TokenKind::LParen,
//!         TokenKind::Ident,
//!         TokenKind::GtEq,
//!         TokenKind::Int,
//!         TokenKind::RParen,
//!         TokenKind::Return,
//!         TokenKind::Int,
//!         TokenKind::Semicolon,
//!     ]
//! );
//! ```

mod filters;
mod grammar;
mod kind;
mod lex;

pub use filters::{DropTrivia, KindCounts, SplitShift, Tally};
pub use grammar::{build_grammar, grammar, tokenizer};
pub use kind::TokenKind;
pub use lex::{lex, LexOptions, LexOutput, TokenList, UnexpectedReport};
