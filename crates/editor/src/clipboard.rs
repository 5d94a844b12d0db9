// Chunk: docs/chunks/clipboard_operations - Paste enablement
//!
//! Clipboard collaborator.
//!
//! The session only needs to know whether pasting would do anything; reading
//! and writing the clipboard is the host text surface's job.

/// Answers whether the system clipboard currently holds text.
pub trait Clipboard {
    fn has_text(&self) -> bool;
}

/// A clipboard that never holds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn has_text(&self) -> bool {
        false
    }
}
