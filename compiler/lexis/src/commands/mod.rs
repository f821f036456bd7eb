//! Command handlers for the lexis CLI.
//!
//! Each submodule implements one command. The `render_*` functions build the
//! command output as a string so tests can check it without a terminal;
//! the `*_file` functions do the I/O.

use lexis_clike::{lex, LexOptions, LexOutput};
use lexis_core::{LineCol, LineIndex};

mod check;
mod tokens;
mod stats;

pub use check::{check_file, render_diagnostics};
pub use tokens::{lex_file, render_tokens};
pub use stats::{render_stats, stats_file, tally, TallyResult};

/// Source text plus its line table, for `file:line:col` positions.
pub struct SourceMap<'a> {
    pub path: &'a str,
    pub text: &'a str,
    lines: LineIndex,
}

impl<'a> SourceMap<'a> {
    pub fn new(path: &'a str, text: &'a str) -> Self {
        SourceMap {
            path,
            text,
            lines: LineIndex::build(text),
        }
    }

    pub fn line_col(&self, offset: u32) -> LineCol {
        self.lines.line_col(self.text, offset)
    }

    /// `path:line:col` of `offset`.
    pub fn location(&self, offset: u32) -> String {
        format!("{}:{}", self.path, self.line_col(offset))
    }
}

/// Lex with the C-family grammar, exiting if the built-in grammar is broken.
pub(super) fn lex_or_exit(source: &str, options: &LexOptions) -> LexOutput {
    match lex(source, options) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("internal error: invalid built-in grammar: {e}");
            std::process::exit(1);
        }
    }
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
