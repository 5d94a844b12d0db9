// Chunk: docs/chunks/document_model - Single-document model with dirty tracking

//! The single in-memory document being edited.
//!
//! A [`Document`] is plain data: it never touches the file system itself.
//! Loading and saving are performed by the session, which hands the loaded
//! text to [`Document::loaded`] and calls [`Document::mark_saved`] once the
//! content has been written.

use std::path::{Path, PathBuf};

use crate::line_ending::LineEnding;

/// Display name of a document that has never been saved.
pub const UNTITLED: &str = "Untitled";

/// The document currently open in the editor.
///
/// `location == None` means the document is untitled and a save has to go
/// through save-as first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    location: Option<PathBuf>,
    content: String,
    dirty: bool,
    line_ending: LineEnding,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty, untitled document.
    pub fn new() -> Self {
        Self {
            location: None,
            content: String::new(),
            dirty: false,
            line_ending: LineEnding::platform_default(),
        }
    }

    /// Creates an empty document bound to `location`.
    ///
    /// Nothing is read; the file may not exist yet.
    pub fn bound(location: PathBuf) -> Self {
        Self {
            location: Some(location),
            ..Self::new()
        }
    }

    /// Creates a clean document from content that was just read from `location`.
    ///
    /// The line ending is detected from the content, falling back to the
    /// platform default when the text has no terminator at all.
    pub fn loaded(location: PathBuf, content: String) -> Self {
        let line_ending = LineEnding::detect(&content).unwrap_or_else(LineEnding::platform_default);
        Self {
            location: Some(location),
            content,
            dirty: false,
            line_ending,
        }
    }

    /// Returns the file this document is bound to, if any.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Binds the document to a new location. Does not touch the dirty flag.
    pub fn set_location(&mut self, location: PathBuf) {
        self.location = Some(location);
    }

    /// Swaps in `location` (or unbinds with `None`) and returns the old one.
    pub fn replace_location(&mut self, location: Option<PathBuf>) -> Option<PathBuf> {
        std::mem::replace(&mut self.location, location)
    }

    /// Returns the full text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the full text.
    ///
    /// Marks the document dirty when the text actually changes and re-detects
    /// the line ending if the new text contains a terminator.
    ///
    /// Returns true if the content changed.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        if content == self.content {
            return false;
        }
        if let Some(ending) = LineEnding::detect(&content) {
            self.line_ending = ending;
        }
        self.content = content;
        self.dirty = true;
        true
    }

    /// Appends `text` at the end of the document and marks it dirty.
    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.content.push_str(text);
        self.dirty = true;
    }

    /// True when the content was modified since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag after a successful write.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// True when the document has no location yet.
    pub fn is_new(&self) -> bool {
        self.location.is_none()
    }

    /// True when the document holds any text.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    /// Returns the file name of the location, or [`UNTITLED`].
    pub fn name(&self) -> String {
        self.location
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }
}
