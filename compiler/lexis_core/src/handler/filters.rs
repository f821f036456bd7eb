//! Built-in filters.
//!
//! Every filter owns its successor and decides whether, how and how often
//! to call [`Next::forward`].

use std::fmt::Debug;

use tracing::trace;

use super::{Next, Token, TokenHandler};
use crate::Messages;

/// Forwards every token unchanged.
#[derive(Debug)]
pub struct PassThrough<'h, P> {
    next: Next<'h, P>,
}

impl<'h, P> PassThrough<'h, P> {
    pub fn new(next: Next<'h, P>) -> Self {
        PassThrough { next }
    }
}

impl<P> TokenHandler<P> for PassThrough<'_, P> {
    #[inline]
    fn handle(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        self.next.forward(token, messages)
    }
}

/// Swallows tokens whose kind matches a predicate.
pub struct Suppress<'h, P, F> {
    next: Next<'h, P>,
    pred: F,
}

impl<'h, P, F> Suppress<'h, P, F> {
    pub fn new(next: Next<'h, P>, pred: F) -> Self
    where
        F: Fn(&P) -> bool,
    {
        Suppress { next, pred }
    }
}

impl<P, F: Fn(&P) -> bool> TokenHandler<P> for Suppress<'_, P, F> {
    fn handle(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        if (self.pred)(&token.kind) {
            return true;
        }
        self.next.forward(token, messages)
    }
}

/// Rewrites the kind of tokens for which `f` returns `Some`.
pub struct Reclassify<'h, P, F> {
    next: Next<'h, P>,
    f: F,
}

impl<'h, P, F> Reclassify<'h, P, F> {
    pub fn new(next: Next<'h, P>, f: F) -> Self
    where
        F: Fn(&Token<'_, P>) -> Option<P>,
    {
        Reclassify { next, f }
    }
}

impl<P, F: Fn(&Token<'_, P>) -> Option<P>> TokenHandler<P> for Reclassify<'_, P, F> {
    fn handle(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        match (self.f)(token) {
            Some(kind) => self.next.forward(&token.with_kind(kind), messages),
            None => self.next.forward(token, messages),
        }
    }
}

/// Logs every token at `trace` level, then forwards it.
#[derive(Debug)]
pub struct TraceTokens<'h, P> {
    next: Next<'h, P>,
}

impl<'h, P> TraceTokens<'h, P> {
    pub fn new(next: Next<'h, P>) -> Self {
        TraceTokens { next }
    }
}

impl<P: Debug> TokenHandler<P> for TraceTokens<'_, P> {
    fn handle(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        trace!(
            kind = ?token.kind,
            span = %token.span,
            text = token.text,
            line_start = token.line_start,
            "token"
        );
        self.next.forward(token, messages)
    }
}

/// Filter backed by a closure that drives [`Next`] itself.
///
/// The closure may forward zero, one or several tokens per input token,
/// which is how a filter splits one span into several.
pub struct FnFilter<'h, P, F> {
    next: Next<'h, P>,
    f: F,
}

/// Build a closure filter for [`HandlerChain::install`](super::HandlerChain::install).
///
/// ```ignore
/// chain.install(filter_fn(|token, messages, next| next.forward(token, messages)));
/// ```
pub fn filter_fn<'h, P, F>(f: F) -> impl FnOnce(Next<'h, P>) -> FnFilter<'h, P, F>
where
    F: FnMut(&Token<'_, P>, &mut Messages, &mut Next<'h, P>) -> bool,
{
    move |next| FnFilter { next, f }
}

impl<'h, P, F> TokenHandler<P> for FnFilter<'h, P, F>
where
    F: FnMut(&Token<'_, P>, &mut Messages, &mut Next<'h, P>) -> bool,
{
    fn handle(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        (self.f)(token, messages, &mut self.next)
    }
}
