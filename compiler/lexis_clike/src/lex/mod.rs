//! One-call lexing into owned output.

use lexis_core::{
    Diagnostics, GrammarError, HandlerChain, Messages, OwnedToken, ScanError, ScanSummary,
    SourceBuffer, Span, Token, TokenHandler, UnexpectedInput, UnexpectedReason,
};
use tracing::debug;

use crate::filters::{DropTrivia, SplitShift};
use crate::{tokenizer, TokenKind};

/// Tokens collected from one scan, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<OwnedToken<TokenKind>>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: OwnedToken<TokenKind>) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&OwnedToken<TokenKind>> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OwnedToken<TokenKind>> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[OwnedToken<TokenKind>] {
        &self.tokens
    }

    /// Just the kinds, for quick comparisons.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl TokenHandler<TokenKind> for TokenList {
    #[inline]
    fn handle(&mut self, token: &Token<'_, TokenKind>, _messages: &mut Messages) -> bool {
        self.tokens.push(token.to_owned_token());
        true
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a OwnedToken<TokenKind>;
    type IntoIter = std::slice::Iter<'a, OwnedToken<TokenKind>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Which filters [`lex`] installs and how it treats bad input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Keep whitespace, newlines and comments.
    pub keep_trivia: bool,
    /// Split `>>` into two `>` tokens.
    pub split_shift: bool,
    /// Skip unexpected input and keep going instead of stopping.
    pub recover: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            keep_trivia: false,
            split_shift: false,
            recover: true,
        }
    }
}

/// Owned copy of an unexpected-input report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnexpectedReport {
    pub span: Span,
    pub text: String,
    pub reason: UnexpectedReason,
}

impl From<&UnexpectedInput<'_>> for UnexpectedReport {
    fn from(input: &UnexpectedInput<'_>) -> Self {
        UnexpectedReport {
            span: input.span,
            text: input.text.to_owned(),
            reason: input.reason,
        }
    }
}

/// Everything one [`lex`] call produced.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    /// Literal parser errors and warnings.
    pub messages: Messages,
    pub unexpected: Vec<UnexpectedReport>,
    /// Runs of operator characters that matched no operator.
    pub unknown_operators: Vec<Span>,
    /// Set when the scan stopped before the end of input.
    pub error: Option<ScanError>,
    pub summary: ScanSummary,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        self.error.is_some() || !self.unexpected.is_empty() || self.messages.has_errors()
    }
}

/// Lex `source` with the shared C-family grammar.
///
/// Filters run in this order: `SplitShift`, then `DropTrivia`, then the
/// token list.
pub fn lex(source: &str, options: &LexOptions) -> Result<LexOutput, GrammarError> {
    let tokenizer = tokenizer()?;
    let buffer = SourceBuffer::new(source);
    let mut output = LexOutput::default();
    let recover = options.recover;

    let result = {
        let mut chain: HandlerChain<'_, TokenKind> = HandlerChain::new(&mut output.tokens);
        if !options.keep_trivia {
            chain.install(DropTrivia::new);
        }
        if options.split_shift {
            chain.install(SplitShift::new);
        }
        let unexpected = &mut output.unexpected;
        let unknown_operators = &mut output.unknown_operators;
        let mut diagnostics = Diagnostics::new()
            .on_unexpected(|input| {
                unexpected.push(UnexpectedReport::from(input));
                recover
            })
            .on_unknown_operator(|span, _text| unknown_operators.push(span));
        tokenizer.scan(&buffer, &mut chain, &mut diagnostics, &mut output.messages)
    };

    match result {
        Ok(summary) => output.summary = summary,
        Err(error) => {
            debug!(%error, "lex stopped early");
            output.error = Some(error);
        }
    }
    Ok(output)
}
