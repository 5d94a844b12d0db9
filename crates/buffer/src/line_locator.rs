// Chunk: docs/chunks/go_to_line - Line-ending aware go-to-line scan

//! Converts a 1-based line number into a character offset.
//!
//! The scan looks for a single terminator character: `\r` for CRLF and CR
//! documents, `\n` for LF documents. When the `n`th terminator is found the
//! returned offset is the character right after it, skipping the `\n` of a
//! CRLF pair as well. The offset is therefore the start of the line that
//! follows the `n`th terminator.
//!
//! Offsets count `char`s, matching what the caret API of the host expects.

use crate::line_ending::LineEnding;

/// Scans `content` for the `line`th terminator and returns the offset right after it.
///
/// Returns `None` when the document has fewer than `line` terminators (or `line`
/// is zero). Single pass, O(len).
pub fn locate_line(content: &str, line: usize, ending: LineEnding) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let (terminator, skip) = match ending {
        LineEnding::Crlf => ('\r', 2),
        LineEnding::Cr => ('\r', 1),
        LineEnding::Lf => ('\n', 1),
    };

    let mut seen = 0;
    for (offset, ch) in content.chars().enumerate() {
        if ch != terminator {
            continue;
        }
        seen += 1;
        if seen == line {
            return Some(offset + skip);
        }
    }
    None
}
