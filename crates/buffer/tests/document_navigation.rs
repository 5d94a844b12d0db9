// Chunk: docs/chunks/go_to_line - Line-ending aware go-to-line scan

//! Integration tests for go-to-line over loaded documents.
//!
//! These tests load documents with each line-ending style and check that the
//! offsets produced by the locator land on the first character of a line.

use std::path::PathBuf;

use slate_buffer::{locate_line, CaretPosition, Document, LineEnding};

fn loaded(text: &str) -> Document {
    Document::loaded(PathBuf::from("fixture.txt"), text.to_string())
}

#[test]
fn test_every_located_offset_starts_a_line() {
    for text in ["one\r\ntwo\r\nthree\r\nfour", "one\ntwo\nthree\nfour", "one\rtwo\rthree\rfour"] {
        let doc = loaded(text);
        for line in 1..=3 {
            let offset = locate_line(doc.content(), line, doc.line_ending())
                .unwrap_or_else(|| panic!("line {} missing in {:?}", line, text));
            let caret = CaretPosition::from_offset(doc.content(), offset);
            assert_eq!(caret, CaretPosition::new(line, 0), "text {:?}", text);
        }
        assert_eq!(locate_line(doc.content(), 4, doc.line_ending()), None);
    }
}

#[test]
fn test_crlf_example_lands_on_c() {
    let doc = loaded("a\r\nb\r\nc");
    assert_eq!(doc.line_ending(), LineEnding::Crlf);

    let offset = locate_line(doc.content(), 2, doc.line_ending()).unwrap();
    assert_eq!(doc.content().chars().nth(offset), Some('c'));
    assert_eq!(locate_line(doc.content(), 5, doc.line_ending()), None);
}

#[test]
fn test_edit_then_locate_uses_new_ending() {
    let mut doc = loaded("x\ny");
    doc.set_content("first\r\nsecond");
    assert!(doc.is_dirty());
    assert_eq!(locate_line(doc.content(), 1, doc.line_ending()), Some(7));
}

#[test]
fn test_empty_document_never_locates() {
    let doc = Document::new();
    assert!(!doc.has_content());
    assert_eq!(locate_line(doc.content(), 1, doc.line_ending()), None);
}
