//! The scan engine.
//!
//! [`Tokenizer`] pairs a [`Configuration`] with the scan entry point;
//! [`Scanner`] is the per-scan state machine. Each step looks at one byte,
//! classifies it and applies the class's [`ClassRule`]:
//!
//! | rule | action |
//! |------|--------|
//! | `Trie` | longest match; a token entry emits, a literal entry delegates |
//! | `Run` | extend over the continuation classes, promote keywords |
//! | `Newline` | emit the terminator (`\r\n` as one token), set line start |
//! | `Literal` | delegate to the sub-parser |
//! | `Unexpected` | report one character |
//!
//! Every recognized token is dispatched to the chain head immediately, in
//! input order. Consecutive tokens never overlap, and under
//! [`Recovery::SkipRange`] every byte of the input lies in exactly one
//! token or one recovered diagnostic range.
//!
//! # Terminal states
//!
//! `Done` (input exhausted) and `Error` (a handler returned `false`, or the
//! unexpected-input handler declined to recover). Once terminal, the scanner
//! makes no further handler or diagnostic calls.

use tracing::{debug, trace};

use crate::diagnostics::detection_site;
use crate::{
    CharClass, ClassRule, Configuration, Cursor, DetectionSite, Diagnostics, Entry, HandlerChain,
    LiteralFailure, LiteralId, Messages, Recovery, RunRule, ScanError, SourceBuffer, Span, Token,
    UnexpectedInput, UnexpectedReason,
};

/// Scan engine state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// No non-trivia token on the current line yet.
    AtLineStart,
    /// Mid-line, recognizing an operator, run or line terminator.
    InToken,
    /// Delegated to a literal sub-parser.
    InLiteral,
    /// Stopped early. Terminal.
    Error,
    /// Input exhausted. Terminal.
    Done,
}

impl ScanState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ScanState::Error | ScanState::Done)
    }
}

/// Counters for a finished scan.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Tokens dispatched to the chain.
    pub tokens: u32,
    /// Unexpected-input events the handler chose to recover from.
    pub recovered: u32,
    /// Bytes consumed.
    pub bytes: u32,
}

/// A configured tokenizer. Cheap to share: scanning takes `&self`.
#[derive(Debug)]
pub struct Tokenizer<C> {
    config: C,
}

impl<C: Configuration> Tokenizer<C> {
    pub fn new(config: C) -> Self {
        Tokenizer { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Scan `source` to the end, dispatching tokens to `chain`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn scan(
        &self,
        source: &SourceBuffer,
        chain: &mut HandlerChain<'_, C::Payload>,
        diagnostics: &mut Diagnostics<'_>,
        messages: &mut Messages,
    ) -> Result<ScanSummary, ScanError> {
        Scanner::new(&self.config, source.cursor(), chain, diagnostics, messages).run()
    }
}

/// State of one scan.
pub struct Scanner<'s, 'a, 'h, 'd, C: Configuration> {
    config: &'s C,
    cursor: Cursor<'a>,
    chain: &'s mut HandlerChain<'h, C::Payload>,
    diagnostics: &'s mut Diagnostics<'d>,
    messages: &'s mut Messages,
    state: ScanState,
    line_start: bool,
    /// End of the last run reported as a possible unknown operator.
    hinted_to: u32,
    summary: ScanSummary,
    failure: Option<ScanError>,
}

impl<'s, 'a, 'h, 'd, C: Configuration> Scanner<'s, 'a, 'h, 'd, C> {
    pub fn new(
        config: &'s C,
        cursor: Cursor<'a>,
        chain: &'s mut HandlerChain<'h, C::Payload>,
        diagnostics: &'s mut Diagnostics<'d>,
        messages: &'s mut Messages,
    ) -> Self {
        Scanner {
            config,
            cursor,
            chain,
            diagnostics,
            messages,
            state: ScanState::AtLineStart,
            line_start: true,
            hinted_to: 0,
            summary: ScanSummary::default(),
            failure: None,
        }
    }

    /// `AtLineStart` before [`run`](Self::run), then `Done` or `Error`.
    /// The in-progress states are internal to a run.
    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Run to a terminal state. Calling again afterwards returns the same
    /// outcome without touching any handler.
    pub fn run(&mut self) -> Result<ScanSummary, ScanError> {
        while !self.state.is_terminal() {
            if let Err(error) = self.step() {
                debug!(%error, tokens = self.summary.tokens, "scan stopped");
                self.state = ScanState::Error;
                self.failure = Some(error);
            }
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.summary),
        }
    }

    /// Recognize one token (or one diagnostic event).
    fn step(&mut self) -> Result<(), ScanError> {
        if self.cursor.is_eof() {
            self.state = ScanState::Done;
            self.summary.bytes = self.cursor.pos();
            debug!(
                tokens = self.summary.tokens,
                recovered = self.summary.recovered,
                "scan finished"
            );
            return Ok(());
        }

        self.state = if self.line_start {
            ScanState::AtLineStart
        } else {
            ScanState::InToken
        };

        let config = self.config;
        let start = self.cursor.pos();
        let class = config.classes().classify(self.cursor.current());
        match config.rule(class) {
            ClassRule::Trie => self.scan_trie(start, class),
            ClassRule::Run(rule) => self.scan_run(start, class, rule),
            ClassRule::Newline { kind } => self.scan_newline(start, kind.clone()),
            ClassRule::Literal(id) => self.scan_literal(start, *id, 0),
            ClassRule::Unexpected => {
                self.unexpected(start, UnexpectedReason::NoRule, detection_site!())
            }
        }
    }

    fn scan_trie(&mut self, start: u32, class: CharClass) -> Result<(), ScanError> {
        let config = self.config;
        let Some(found) = config.trie().match_longest(&self.cursor) else {
            // One hint per unmatched run. The run ends where the trie
            // recognizes something again.
            if start >= self.hinted_to {
                let mut probe = self.cursor;
                probe.advance_char();
                while !probe.is_eof()
                    && config.classes().classify(probe.current()) == class
                    && config.trie().match_longest(&probe).is_none()
                {
                    probe.advance_char();
                }
                let run = Span::new(start, probe.pos());
                self.hinted_to = run.end;
                self.diagnostics
                    .report_unknown_operator(run, self.cursor.slice(start, run.end));
            }
            return self.unexpected(start, UnexpectedReason::UnknownOperator, detection_site!());
        };
        match found.payload {
            Entry::Token(kind) => {
                self.cursor.advance_n(found.len);
                let text = self.cursor.slice_from(start);
                self.emit(kind.clone(), Span::new(start, self.cursor.pos()), text, false)
            }
            Entry::Literal(id) => self.scan_literal(start, *id, found.len),
        }
    }

    fn scan_run(
        &mut self,
        start: u32,
        class: CharClass,
        rule: &RunRule<C::Payload>,
    ) -> Result<(), ScanError> {
        let config = self.config;
        let classes = config.classes();
        let continues = rule.continuation(class);
        self.cursor.advance_char();
        while !self.cursor.is_eof() && continues.has(classes.classify(self.cursor.current())) {
            self.cursor.advance_char();
        }
        let text = self.cursor.slice_from(start);
        let kind = match config.trie().get(text.as_bytes()) {
            Some(Entry::Token(keyword)) if rule.keywords => keyword.clone(),
            _ => rule.kind.clone(),
        };
        self.emit(kind, Span::new(start, self.cursor.pos()), text, rule.trivia)
    }

    fn scan_newline(&mut self, start: u32, kind: C::Payload) -> Result<(), ScanError> {
        if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
            self.cursor.advance_n(2);
        } else {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        self.emit(kind, Span::new(start, self.cursor.pos()), text, true)?;
        self.line_start = true;
        Ok(())
    }

    fn scan_literal(&mut self, start: u32, id: LiteralId, opener_len: u32) -> Result<(), ScanError> {
        self.state = ScanState::InLiteral;
        let config = self.config;
        let Some(parser) = config.literal(id) else {
            return self.unexpected(start, UnexpectedReason::NoRule, detection_site!());
        };

        let mark = self.messages.len();
        let mut result = parser.parse(self.cursor, opener_len, self.messages);
        if let Ok(found) = &result {
            if found.len == 0 {
                self.messages
                    .error(Span::point(start), "literal parser consumed no input");
                result = Err(LiteralFailure { len: 0 });
            }
        }
        for message in self.messages.since(mark) {
            self.diagnostics.report_literal_message(message);
        }

        match result {
            Ok(found) => {
                self.cursor.advance_n(found.len);
                let span = Span::new(start, self.cursor.pos());
                self.emit(found.kind, span, found.value, false)
            }
            Err(failure) => {
                let mut probe = self.cursor;
                probe.advance_n(failure.len.max(self.cursor.char_len()));
                let span = Span::new(start, probe.pos());
                let input = UnexpectedInput {
                    span,
                    text: self.cursor.slice(start, span.end),
                    reason: UnexpectedReason::LiteralFailure,
                    site: detection_site!(),
                };
                if self.diagnostics.report_unexpected(&input) {
                    self.recover(span);
                    return Ok(());
                }
                let message = self
                    .messages
                    .since(mark)
                    .iter()
                    .rev()
                    .find(|m| m.is_error())
                    .map_or_else(|| "malformed literal".to_owned(), |m| m.text.clone());
                Err(ScanError::LiteralParseFailure { span, message })
            }
        }
    }

    /// Report the character at `start` as unexpected.
    fn unexpected(
        &mut self,
        start: u32,
        reason: UnexpectedReason,
        site: DetectionSite,
    ) -> Result<(), ScanError> {
        let span = Span::new(start, start + self.cursor.char_len());
        let input = UnexpectedInput {
            span,
            text: self.cursor.slice(start, span.end),
            reason,
            site,
        };
        if self.diagnostics.report_unexpected(&input) {
            self.recover(span);
            return Ok(());
        }
        Err(ScanError::UnexpectedInput { span, reason, site })
    }

    /// Resume after a recovered diagnostic covering `span`.
    fn recover(&mut self, span: Span) {
        self.summary.recovered += 1;
        self.cursor.advance_n(span.end - self.cursor.pos());
        if self.config.recovery() == Recovery::NextLine {
            self.cursor.eat_until_newline_or_eof();
        }
    }

    fn emit(
        &mut self,
        kind: C::Payload,
        span: Span,
        text: &str,
        trivia: bool,
    ) -> Result<(), ScanError> {
        let token = Token {
            kind,
            span,
            text,
            line_start: self.line_start,
        };
        self.summary.tokens += 1;
        trace!(span = %span, text, line_start = token.line_start, "dispatch");
        if !self.chain.dispatch(&token, self.messages) {
            return Err(ScanError::ChainAbort {
                span,
                dispatched: self.summary.tokens,
            });
        }
        if !trivia {
            self.line_start = false;
        }
        Ok(())
    }
}

impl<C: Configuration> std::fmt::Debug for Scanner<'_, '_, '_, '_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("pos", &self.cursor.pos())
            .field("state", &self.state)
            .field("line_start", &self.line_start)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}
