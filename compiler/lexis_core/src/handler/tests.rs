use std::cell::RefCell;

use pretty_assertions::assert_eq;

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Kind {
    Word,
    Space,
    Shr,
    Gt,
}

fn tok(kind: Kind, start: u32, text: &str) -> Token<'_, Kind> {
    #[allow(clippy::cast_possible_truncation, reason = "test inputs are tiny")]
    let end = start + text.len() as u32;
    Token {
        kind,
        span: Span::new(start, end),
        text,
        line_start: start == 0,
    }
}

fn sample() -> Vec<Token<'static, Kind>> {
    vec![
        tok(Kind::Word, 0, "a"),
        tok(Kind::Space, 1, " "),
        tok(Kind::Shr, 2, ">>"),
        tok(Kind::Space, 4, " "),
        tok(Kind::Word, 5, "b"),
    ]
}

fn kinds(tokens: &[OwnedToken<Kind>]) -> Vec<Kind> {
    tokens.iter().map(|t| t.kind.clone()).collect()
}

fn feed(chain: &mut HandlerChain<'_, Kind>, tokens: &[Token<'_, Kind>]) -> usize {
    let mut messages = Messages::new();
    tokens
        .iter()
        .take_while(|t| chain.dispatch(t, &mut messages))
        .count()
}

// === Chain Basics ===

#[test]
fn empty_chain_accepts_everything() {
    let mut chain = HandlerChain::empty();
    assert_eq!(feed(&mut chain, &sample()), 5);
    assert!(chain.is_empty());
}

#[test]
fn vec_consumer_collects() {
    let mut out: Vec<OwnedToken<Kind>> = Vec::new();
    let mut chain = HandlerChain::new(&mut out);
    feed(&mut chain, &sample());
    drop(chain);
    assert_eq!(out.len(), 5);
    assert_eq!(out[2].text, ">>");
    assert!(out[0].line_start);
}

#[test]
fn fn_handler_sees_messages() {
    let mut chain = HandlerChain::new(from_fn(|token: &Token<'_, Kind>, messages: &mut Messages| {
        messages.warning(token.span, "seen");
        true
    }));
    let mut messages = Messages::new();
    chain.dispatch(&tok(Kind::Word, 0, "x"), &mut messages);
    assert_eq!(messages.len(), 1);
}

#[test]
fn filter_without_successor_is_transparent() {
    let mut next: Next<'_, Kind> = Next::none();
    assert!(next.is_end());
    assert!(next.forward(&tok(Kind::Word, 0, "x"), &mut Messages::new()));
}

// === Ordering ===

#[test]
fn filters_run_in_reverse_install_order() {
    let log = RefCell::new(Vec::new());
    let mut chain = HandlerChain::new(from_fn(|_: &Token<'_, Kind>, _: &mut Messages| {
        log.borrow_mut().push("consumer");
        true
    }));
    for name in ["first", "second", "third"] {
        let log = &log;
        chain.install(filter_fn(move |token, messages, next| {
            log.borrow_mut().push(name);
            next.forward(token, messages)
        }));
    }
    assert_eq!(chain.len(), 3);
    chain.dispatch(&tok(Kind::Word, 0, "x"), &mut Messages::new());
    drop(chain);
    assert_eq!(log.into_inner(), ["third", "second", "first", "consumer"]);
}

// === Built-in Filters ===

#[test]
fn pass_through_is_identity() {
    let mut direct: Vec<OwnedToken<Kind>> = Vec::new();
    feed(&mut HandlerChain::new(&mut direct), &sample());

    let mut filtered: Vec<OwnedToken<Kind>> = Vec::new();
    let mut chain = HandlerChain::new(&mut filtered)
        .with(PassThrough::new)
        .with(PassThrough::new);
    feed(&mut chain, &sample());
    drop(chain);

    assert_eq!(direct, filtered);
}

#[test]
fn suppress_swallows_matching_kinds() {
    let mut out: Vec<OwnedToken<Kind>> = Vec::new();
    let mut chain =
        HandlerChain::new(&mut out).with(|next| Suppress::new(next, |k: &Kind| *k == Kind::Space));
    assert_eq!(feed(&mut chain, &sample()), 5);
    drop(chain);
    assert_eq!(kinds(&out), [Kind::Word, Kind::Shr, Kind::Word]);
}

#[test]
fn reclassify_rewrites_kind() {
    let mut out: Vec<OwnedToken<Kind>> = Vec::new();
    let mut chain = HandlerChain::new(&mut out).with(|next| {
        Reclassify::new(next, |t: &Token<'_, Kind>| {
            (t.kind == Kind::Word && t.text == "b").then_some(Kind::Gt)
        })
    });
    feed(&mut chain, &sample());
    drop(chain);
    assert_eq!(
        kinds(&out),
        [Kind::Word, Kind::Space, Kind::Shr, Kind::Space, Kind::Gt]
    );
    assert_eq!(out[4].text, "b");
}

#[test]
fn trace_tokens_forwards() {
    let mut out: Vec<OwnedToken<Kind>> = Vec::new();
    let mut chain = HandlerChain::new(&mut out).with(TraceTokens::new);
    feed(&mut chain, &sample());
    drop(chain);
    assert_eq!(out.len(), 5);
}

#[test]
fn fn_filter_can_split_tokens() {
    let mut out: Vec<OwnedToken<Kind>> = Vec::new();
    let mut chain = HandlerChain::new(&mut out).with(filter_fn(
        |token: &Token<'_, Kind>, messages: &mut Messages, next| {
            if token.kind != Kind::Shr {
                return next.forward(token, messages);
            }
            let Span { start, end } = token.span;
            let first = Token {
                kind: Kind::Gt,
                span: Span::new(start, start + 1),
                text: &token.text[..1],
                line_start: token.line_start,
            };
            let second = Token {
                kind: Kind::Gt,
                span: Span::new(start + 1, end),
                text: &token.text[1..],
                line_start: false,
            };
            next.forward(&first, messages) && next.forward(&second, messages)
        },
    ));
    feed(&mut chain, &sample());
    drop(chain);
    assert_eq!(
        kinds(&out),
        [Kind::Word, Kind::Space, Kind::Gt, Kind::Gt, Kind::Space, Kind::Word]
    );
    assert_eq!(out[3].span, Span::new(3, 4));
}

// === Abort ===

#[test]
fn consumer_abort_stops_feed() {
    let mut seen = 0;
    let mut chain = HandlerChain::new(from_fn(|_: &Token<'_, Kind>, _: &mut Messages| {
        seen += 1;
        seen < 2
    }));
    assert_eq!(feed(&mut chain, &sample()), 1);
    drop(chain);
    assert_eq!(seen, 2);
}

#[test]
fn filter_abort_hides_token_from_consumer() {
    let mut out: Vec<OwnedToken<Kind>> = Vec::new();
    let mut chain = HandlerChain::new(&mut out).with(filter_fn(
        |token: &Token<'_, Kind>, messages: &mut Messages, next| {
            token.kind != Kind::Shr && next.forward(token, messages)
        },
    ));
    assert_eq!(feed(&mut chain, &sample()), 2);
    drop(chain);
    assert_eq!(kinds(&out), [Kind::Word, Kind::Space]);
}

#[test]
fn chain_is_itself_a_handler() {
    let mut out: Vec<OwnedToken<Kind>> = Vec::new();
    let inner = HandlerChain::new(&mut out).with(PassThrough::new);
    let mut outer = HandlerChain::new(inner).with(PassThrough::new);
    feed(&mut outer, &sample());
    drop(outer);
    assert_eq!(out.len(), 5);
}
