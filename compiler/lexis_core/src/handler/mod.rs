//! Token handlers and the filter chain.
//!
//! A [`HandlerChain`] is a singly linked list of boxed handlers: each node
//! owns its successor through a [`Next`]. Installing a filter wraps the
//! current head, so filters see tokens most-recently-installed first and the
//! original consumer sees them last:
//!
//! ```text
//! install(A); install(B)
//! dispatch → B → A → consumer
//! ```
//!
//! The chain only grows. A node without a successor accepts every token, so
//! even an empty chain is a valid, terminating pipeline.

mod filters;

pub use filters::{filter_fn, FnFilter, PassThrough, Reclassify, Suppress, TraceTokens};

use std::fmt;

use crate::{Messages, Span};

/// A recognized token, valid for one dispatch.
///
/// `text` borrows from the source (or, for literals, is the literal's parsed
/// value). Handlers that keep tokens convert them to [`OwnedToken`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a, P> {
    pub kind: P,
    pub span: Span,
    pub text: &'a str,
    /// No non-trivia token precedes this one on its line.
    pub line_start: bool,
}

impl<'a, P> Token<'a, P> {
    /// Same token with a different kind.
    #[must_use]
    pub fn with_kind(&self, kind: P) -> Token<'a, P> {
        Token {
            kind,
            span: self.span,
            text: self.text,
            line_start: self.line_start,
        }
    }

    pub fn to_owned_token(&self) -> OwnedToken<P>
    where
        P: Clone,
    {
        OwnedToken {
            kind: self.kind.clone(),
            span: self.span,
            text: self.text.to_owned(),
            line_start: self.line_start,
        }
    }
}

/// A token detached from the scan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedToken<P> {
    pub kind: P,
    pub span: Span,
    pub text: String,
    pub line_start: bool,
}

/// One stage of the token pipeline.
///
/// Return `true` to keep scanning, `false` to stop the scan. Messages may be
/// appended freely.
pub trait TokenHandler<P> {
    fn handle(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool;
}

impl<P: Clone> TokenHandler<P> for Vec<OwnedToken<P>> {
    fn handle(&mut self, token: &Token<'_, P>, _messages: &mut Messages) -> bool {
        self.push(token.to_owned_token());
        true
    }
}

impl<P, H: TokenHandler<P> + ?Sized> TokenHandler<P> for &mut H {
    #[inline]
    fn handle(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        (**self).handle(token, messages)
    }
}

impl<P, H: TokenHandler<P> + ?Sized> TokenHandler<P> for Box<H> {
    #[inline]
    fn handle(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        (**self).handle(token, messages)
    }
}

/// Handler backed by a closure. Built with [`from_fn`].
#[derive(Clone)]
pub struct FnHandler<F>(F);

/// Wrap a closure as a [`TokenHandler`].
pub fn from_fn<P, F>(f: F) -> FnHandler<F>
where
    F: FnMut(&Token<'_, P>, &mut Messages) -> bool,
{
    FnHandler(f)
}

impl<P, F> TokenHandler<P> for FnHandler<F>
where
    F: FnMut(&Token<'_, P>, &mut Messages) -> bool,
{
    #[inline]
    fn handle(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        (self.0)(token, messages)
    }
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHandler")
    }
}

/// The successor of a chain node.
pub struct Next<'h, P> {
    inner: Option<Box<dyn TokenHandler<P> + 'h>>,
}

impl<'h, P> Next<'h, P> {
    fn new(handler: impl TokenHandler<P> + 'h) -> Self {
        Next {
            inner: Some(Box::new(handler)),
        }
    }

    fn none() -> Self {
        Next { inner: None }
    }

    /// Hand `token` to the successor. Without one, accept it.
    #[inline]
    pub fn forward(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        match self.inner.as_mut() {
            Some(next) => next.handle(token, messages),
            None => true,
        }
    }

    /// Returns `true` if there is no successor.
    pub fn is_end(&self) -> bool {
        self.inner.is_none()
    }
}

impl<P> fmt::Debug for Next<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next").field("end", &self.is_end()).finish()
    }
}

/// Filters in front of a final consumer.
pub struct HandlerChain<'h, P> {
    head: Next<'h, P>,
    filters: usize,
}

impl<'h, P> HandlerChain<'h, P> {
    /// A chain that delivers every token to `consumer`.
    pub fn new(consumer: impl TokenHandler<P> + 'h) -> Self {
        HandlerChain {
            head: Next::new(consumer),
            filters: 0,
        }
    }

    /// A chain with no consumer: every token is accepted and dropped.
    pub fn empty() -> Self {
        HandlerChain {
            head: Next::none(),
            filters: 0,
        }
    }

    /// Wrap the current head in a new filter.
    ///
    /// `make` receives the old head as the filter's successor:
    /// `chain.install(PassThrough::new)`.
    pub fn install<F, M>(&mut self, make: M)
    where
        M: FnOnce(Next<'h, P>) -> F,
        F: TokenHandler<P> + 'h,
    {
        let previous = std::mem::replace(&mut self.head, Next::none());
        self.head = Next::new(make(previous));
        self.filters += 1;
    }

    /// Builder form of [`install`](Self::install).
    #[must_use]
    pub fn with<F, M>(mut self, make: M) -> Self
    where
        M: FnOnce(Next<'h, P>) -> F,
        F: TokenHandler<P> + 'h,
    {
        self.install(make);
        self
    }

    /// Deliver a token to the head of the chain.
    #[inline]
    pub fn dispatch(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        self.head.forward(token, messages)
    }

    /// Number of installed filters (the consumer not counted).
    pub fn len(&self) -> usize {
        self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters == 0
    }
}

impl<P> TokenHandler<P> for HandlerChain<'_, P> {
    fn handle(&mut self, token: &Token<'_, P>, messages: &mut Messages) -> bool {
        self.dispatch(token, messages)
    }
}

impl<P> fmt::Debug for HandlerChain<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("filters", &self.filters)
            .field("consumer", &!self.head.is_end())
            .finish()
    }
}

#[cfg(test)]
mod tests;
