// Chunk: docs/chunks/dirty_close_confirm - Save-changes confirmation
//!
//! The dialog collaborator.
//!
//! The session never draws a dialog. It asks a [`DialogService`] supplied by
//! the host, which may be a native message box, a terminal prompt, or a
//! scripted fake in tests. Cancelling any dialog is never an error: pickers
//! return `None`, prompts return [`DialogResult::Cancel`], modals return false.

use std::path::PathBuf;

use crate::find_replace::{FindDialog, ReplaceDialog};

/// Answer to a yes/no/cancel prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Yes,
    No,
    /// Cancel button, Escape, or the dialog was dismissed.
    Cancel,
}

/// State of the Go To dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoToDialog {
    /// 1-based line number entered by the user.
    pub line_number: usize,
}

impl GoToDialog {
    pub fn new(line_number: usize) -> Self {
        Self { line_number }
    }
}

/// A modal dialog the session asks the host to show.
#[derive(Debug)]
pub enum ModalDialog<'a> {
    GoTo(&'a mut GoToDialog),
    Find(&'a mut FindDialog),
    Replace(&'a mut ReplaceDialog),
}

/// Everything the session needs from the host's dialog layer.
pub trait DialogService {
    /// Shows `message` with Yes/No/Cancel buttons.
    fn prompt_yes_no_cancel(&mut self, message: &str, title: &str) -> DialogResult;

    /// Shows an informational message with a single OK button.
    fn prompt_info(&mut self, message: &str, title: &str);

    /// Asks for an existing file to open. `filter` is `label|pattern`.
    fn pick_open_path(&mut self, filter: &str) -> Option<PathBuf>;

    /// Asks for a destination to save to. `filter` is `label|pattern`.
    fn pick_save_path(&mut self, filter: &str) -> Option<PathBuf>;

    /// Shows a modal dialog bound to `dialog`. Returns true when the user confirmed.
    fn show_modal(&mut self, dialog: ModalDialog<'_>) -> bool;
}
