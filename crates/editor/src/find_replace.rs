// Chunk: docs/chunks/find_replace_dialogs - Find and Replace dialog view-models

//! View-models behind the Find and Replace dialogs.
//!
//! The dialogs are modal, but while one is open the user can press its
//! buttons any number of times. Each press raises a [`DialogSignal`] on the
//! dialog's [`EventSource`]; the session controller subscribes at
//! construction and acts on the signals once the modal returns.
//!
//! Searching and replacing text is not implemented: the session accepts the
//! signals and routes them to its `find_next`/`replace`/`replace_all`
//! entry points, which only log.

use crate::events::EventSource;

/// A request raised from inside the Find or Replace dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogSignal {
    /// The search text was edited.
    TextSoughtChanged(String),
    FindNext,
    Replace,
    ReplaceAll,
}

/// Search options shared by both dialogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub match_case: bool,
    pub whole_word: bool,
    pub wrap_around: bool,
}

/// State of the Find dialog.
#[derive(Debug, Default)]
pub struct FindDialog {
    text_sought: String,
    pub options: FindOptions,
    signals: EventSource<DialogSignal>,
}

impl FindDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_sought(&self) -> &str {
        &self.text_sought
    }

    /// Updates the search text and raises [`DialogSignal::TextSoughtChanged`]
    /// when it differs.
    pub fn set_text_sought(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text_sought {
            self.text_sought = text.clone();
            self.signals.emit(&DialogSignal::TextSoughtChanged(text));
        }
    }

    /// The "Find Next" button.
    pub fn raise_find_next(&self) {
        self.signals.emit(&DialogSignal::FindNext);
    }

    pub fn signals(&self) -> &EventSource<DialogSignal> {
        &self.signals
    }
}

/// State of the Replace dialog.
#[derive(Debug, Default)]
pub struct ReplaceDialog {
    text_sought: String,
    pub replacement: String,
    pub options: FindOptions,
    signals: EventSource<DialogSignal>,
}

impl ReplaceDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_sought(&self) -> &str {
        &self.text_sought
    }

    pub fn set_text_sought(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text_sought {
            self.text_sought = text.clone();
            self.signals.emit(&DialogSignal::TextSoughtChanged(text));
        }
    }

    pub fn raise_find_next(&self) {
        self.signals.emit(&DialogSignal::FindNext);
    }

    pub fn raise_replace(&self) {
        self.signals.emit(&DialogSignal::Replace);
    }

    pub fn raise_replace_all(&self) {
        self.signals.emit(&DialogSignal::ReplaceAll);
    }

    pub fn signals(&self) -> &EventSource<DialogSignal> {
        &self.signals
    }
}
