// Chunk: docs/chunks/document_model - Single-document model with dirty tracking
// Chunk: docs/chunks/go_to_line - Line-ending aware go-to-line scan

//! slate-buffer: the document model for the slate editor.
//!
//! This crate holds everything about the single open document that does not
//! depend on the session around it:
//!
//! - [`Document`]: content, location, dirty flag and line-ending style
//! - [`LineEnding`]: detection of CRLF / LF / CR terminators
//! - [`locate_line`]: the go-to-line scan that turns a line number into a
//!   character offset
//! - [`CaretPosition`]: the "Ln, Col" pair shown in the status bar
//!
//! # Example
//!
//! ```
//! use slate_buffer::{locate_line, Document, LineEnding};
//!
//! let doc = Document::loaded("notes.txt".into(), "a\r\nb\r\nc".to_string());
//! assert_eq!(doc.line_ending(), LineEnding::Crlf);
//! assert!(!doc.is_dirty());
//!
//! // Line 2 starts right after the second terminator.
//! assert_eq!(locate_line(doc.content(), 2, doc.line_ending()), Some(6));
//! assert_eq!(locate_line(doc.content(), 5, doc.line_ending()), None);
//! ```

mod caret;
mod document;
mod line_ending;
mod line_locator;

pub use caret::CaretPosition;
pub use document::{Document, UNTITLED};
pub use line_ending::LineEnding;
pub use line_locator::locate_line;
