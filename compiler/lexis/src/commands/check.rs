//! `check`: report diagnostics and fail on errors.

use lexis_clike::{LexOptions, LexOutput};
use lexis_core::{Severity, UnexpectedReason};

use super::{lex_or_exit, read_file, SourceMap};

/// Render every diagnostic of `output` as `file:line:col: severity: text`,
/// ordered by position.
///
/// Literal failures are reported once, through the parser's own message.
pub fn render_diagnostics(map: &SourceMap<'_>, output: &LexOutput) -> Vec<String> {
    let mut lines: Vec<(u32, String)> = Vec::new();

    for message in &output.messages {
        lines.push((
            message.span.start,
            format!(
                "{}: {}: {}",
                map.location(message.span.start),
                message.severity,
                message.text
            ),
        ));
    }
    for report in &output.unexpected {
        if report.reason == UnexpectedReason::LiteralFailure {
            continue;
        }
        lines.push((
            report.span.start,
            format!(
                "{}: error: {} `{}`",
                map.location(report.span.start),
                report.reason,
                report.text.escape_debug()
            ),
        ));
    }
    for span in &output.unknown_operators {
        lines.push((
            span.start,
            format!(
                "{}: note: no operator matches `{}`",
                map.location(span.start),
                map.text.get(span.to_range()).unwrap_or_default()
            ),
        ));
    }
    if let Some(error) = &output.error {
        lines.push((
            error.span().start,
            format!("{}: error: {error}", map.location(error.span().start)),
        ));
    }

    lines.sort_by_key(|&(offset, _)| offset);
    lines.into_iter().map(|(_, line)| line).collect()
}

/// Lex a file and print its diagnostics. Exits with status 1 on errors.
pub fn check_file(path: &str) {
    let content = read_file(path);
    let output = lex_or_exit(&content, &LexOptions::default());
    let map = SourceMap::new(path, &content);

    for line in render_diagnostics(&map, &output) {
        eprintln!("{line}");
    }

    let warnings = output
        .messages
        .iter()
        .filter(|m| m.severity == Severity::Warning)
        .count();
    if output.has_errors() {
        eprintln!("{path}: failed ({warnings} warnings)");
        std::process::exit(1);
    }
    println!(
        "{path}: ok ({} tokens, {warnings} warnings)",
        output.tokens.len()
    );
}
