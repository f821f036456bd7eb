use super::*;

#[test]
fn padded_to_a_multiple_of_the_line_size() {
    for len in [0, 1, 63, 64, 65, 200] {
        let text = "q".repeat(len);
        let source = SourceBuffer::new(&text);
        let padded = &source.padded;
        assert_eq!(padded.len() % PAD_TO, 0, "len {len}");
        assert!(padded.len() > len, "len {len}");
        assert!(padded[len..].iter().all(|&b| b == 0), "len {len}");
        assert_eq!(source.as_bytes(), text.as_bytes());
    }
}

#[test]
fn empty_text() {
    let source = SourceBuffer::new("");
    assert!(source.is_empty());
    assert_eq!(source.as_str(), "");
    assert!(source.cursor().is_eof());
}

#[test]
fn multibyte_text_round_trips() {
    let text = "let \u{3c0} = 3.14; // \u{1F980}";
    let source = SourceBuffer::new(text);
    assert_eq!(source.len() as usize, text.len());
    assert_eq!(source.as_str(), text);
    assert_eq!(source.cursor().remaining(), text.as_bytes());
}

#[test]
fn positions_and_span_text() {
    let source = SourceBuffer::new("let a\n  b = 1\n");
    assert_eq!(source.line_col(0), LineCol { line: 1, col: 1 });
    assert_eq!(source.line_col(8), LineCol { line: 2, col: 3 });
    assert_eq!(source.line_index().line_count(), 3);
    assert_eq!(source.text(Span::new(8, 9)), "b");
    assert_eq!(source.text(Span::new(8, 99)), "");
}

#[test]
fn clip_leaves_ordinary_text_alone() {
    assert_eq!(clip("\u{e9}t\u{e9}"), "\u{e9}t\u{e9}");
}
