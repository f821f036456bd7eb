//! `stats`: per-kind token counts.

use std::fmt::Write;

use lexis_clike::{tokenizer, KindCounts, Tally, TokenKind};
use lexis_core::{
    Diagnostics, GrammarError, HandlerChain, Messages, ScanError, ScanSummary, SourceBuffer,
    UnexpectedPolicy,
};

use super::{read_file, SourceMap};

/// Counts so far, and how the scan ended.
pub type TallyResult = (KindCounts, Result<ScanSummary, ScanError>);

/// Count every token of `source`, trivia included. Unexpected input is
/// skipped.
pub fn tally(source: &str) -> Result<TallyResult, GrammarError> {
    let tokenizer = tokenizer()?;
    let buffer = SourceBuffer::new(source);
    let mut counts = KindCounts::default();
    let mut messages = Messages::new();
    let result = {
        let mut chain: HandlerChain<'_, TokenKind> =
            HandlerChain::empty().with(|next| Tally::new(next, &mut counts));
        let mut diagnostics = Diagnostics::new().unexpected_default(UnexpectedPolicy::Recover);
        tokenizer.scan(&buffer, &mut chain, &mut diagnostics, &mut messages)
    };
    Ok((counts, result))
}

/// Most frequent kinds first; ties in kind order. A scan that stopped early
/// ends with the stop location instead of totals.
pub fn render_stats(
    map: &SourceMap<'_>,
    counts: &KindCounts,
    result: &Result<ScanSummary, ScanError>,
) -> String {
    let mut rows: Vec<(TokenKind, usize)> = counts.iter().map(|(&k, &n)| (k, n)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut out = String::new();
    for (kind, count) in rows {
        let _ = writeln!(out, "{count:>8}  {}", kind.display_name());
    }
    match result {
        Ok(summary) => {
            let _ = writeln!(
                out,
                "{:>8}  tokens ({} bytes, {} skipped)",
                summary.tokens, summary.bytes, summary.recovered
            );
        }
        Err(error) => {
            let _ = writeln!(
                out,
                "{}: error: scan stopped early: {error}",
                map.location(error.span().start)
            );
        }
    }
    out
}

pub fn stats_file(path: &str) {
    let content = read_file(path);
    let map = SourceMap::new(path, &content);
    match tally(&content) {
        Ok((counts, result)) => {
            print!("{}", render_stats(&map, &counts, &result));
            if result.is_err() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("internal error: invalid built-in grammar: {e}");
            std::process::exit(1);
        }
    }
}
