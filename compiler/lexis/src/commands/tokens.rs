//! `lex`: print the token stream.

use std::fmt::Write;

use lexis_clike::{LexOptions, LexOutput};

use super::{lex_or_exit, read_file, SourceMap};

/// One line per token: position, kind, text, and `^` for line-start tokens.
pub fn render_tokens(map: &SourceMap<'_>, output: &LexOutput) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        map.path,
        output.tokens.len()
    );
    for token in &output.tokens {
        let at = map.line_col(token.span.start);
        let marker = if token.line_start { '^' } else { ' ' };
        let _ = writeln!(
            out,
            "  {marker} {:>4}:{:<3} {:?} {:?} @ {}",
            at.line, at.col, token.kind, token.text, token.span
        );
    }
    if let Some(error) = &output.error {
        let _ = writeln!(out, "stopped: {error}");
    }
    out
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, options: &LexOptions) {
    let content = read_file(path);
    let output = lex_or_exit(&content, options);
    let map = SourceMap::new(path, &content);
    print!("{}", render_tokens(&map, &output));
}
