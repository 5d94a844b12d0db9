// Chunk: docs/chunks/caret_status - Grapheme-aware caret columns

//! Caret position as shown in the status bar ("Ln 3, Col 7").
//!
//! Lines and columns are stored 0-indexed and rendered 1-based. Columns count
//! grapheme clusters so a combining sequence or an emoji occupies one column.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// A caret location as (line, column), both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretPosition {
    pub line: usize,
    pub col: usize,
}

impl CaretPosition {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Computes the caret position for a char offset into `content`.
    ///
    /// Any of `\r\n`, `\n` or a lone `\r` ends a line. Offsets past the end
    /// clamp to the end of the text. An offset that falls inside a grapheme
    /// cluster counts that cluster as passed.
    pub fn from_offset(content: &str, offset: usize) -> Self {
        let mut pos = CaretPosition::default();
        let mut chars_seen = 0;

        for grapheme in content.graphemes(true) {
            if chars_seen >= offset {
                break;
            }
            chars_seen += grapheme.chars().count();
            if matches!(grapheme, "\r\n" | "\n" | "\r") {
                pos.line += 1;
                pos.col = 0;
            } else {
                pos.col += 1;
            }
        }

        pos
    }
}

impl fmt::Display for CaretPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln {}, Col {}", self.line + 1, self.col + 1)
    }
}
