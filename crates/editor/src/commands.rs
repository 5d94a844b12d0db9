// Chunk: docs/chunks/session_controller - Document lifecycle and command gating

//! Host commands and the state their availability depends on.
//!
//! [`CommandId`] names a command for gating purposes; [`Command`] is an
//! invocation that may carry an argument. Availability itself is computed by
//! [`SessionController::can_execute`](crate::SessionController::can_execute)
//! from live state every time it is asked. The tables here only describe
//! which [`StateField`]s each predicate reads, so a change notification can
//! name exactly the predicates that need re-querying.

use std::path::PathBuf;

/// Identity of every command the host can bind to a menu item or shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    Find,
    FindNext,
    Replace,
    /// Opens the Go To dialog; same availability as `GoToLine`.
    GoTo,
    /// Jumps to a line; needs content and an unwrapped view.
    GoToLine,
    TimeDate,
    WordWrap,
    ZoomIn,
    ZoomOut,
    RestoreDefaultZoom,
    StatusBar,
    Help,
    About,
    FontColour,
    FontFamily,
    DragDrop,
}

impl CommandId {
    pub const ALL: [CommandId; 21] = [
        CommandId::New,
        CommandId::Open,
        CommandId::Save,
        CommandId::SaveAs,
        CommandId::Exit,
        CommandId::Find,
        CommandId::FindNext,
        CommandId::Replace,
        CommandId::GoTo,
        CommandId::GoToLine,
        CommandId::TimeDate,
        CommandId::WordWrap,
        CommandId::ZoomIn,
        CommandId::ZoomOut,
        CommandId::RestoreDefaultZoom,
        CommandId::StatusBar,
        CommandId::Help,
        CommandId::About,
        CommandId::FontColour,
        CommandId::FontFamily,
        CommandId::DragDrop,
    ];

    /// True when this command's availability reads `field`.
    pub fn reads(self, field: StateField) -> bool {
        if field == StateField::Busy {
            return true;
        }
        match self {
            CommandId::Open | CommandId::DragDrop => {
                matches!(field, StateField::Document | StateField::Dirty)
            }
            CommandId::FindNext => field == StateField::TextSought,
            CommandId::ZoomIn | CommandId::ZoomOut => field == StateField::Zoom,
            CommandId::GoTo | CommandId::GoToLine => matches!(
                field,
                StateField::Document | StateField::Content | StateField::Wrap
            ),
            _ => false,
        }
    }
}

/// Edit-menu items whose enabled state the session reports.
///
/// The edits themselves happen in the host's text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    Undo,
    CutOrCopy,
    Paste,
    SelectAll,
}

impl EditAction {
    pub const ALL: [EditAction; 4] = [
        EditAction::Undo,
        EditAction::CutOrCopy,
        EditAction::Paste,
        EditAction::SelectAll,
    ];

    /// True when this action's enabled state reads `field`.
    ///
    /// Paste asks the clipboard, which has no change feed of its own; it is
    /// refreshed together with the selection.
    pub fn reads(self, field: StateField) -> bool {
        if field == StateField::Busy {
            return true;
        }
        match self {
            EditAction::Undo => matches!(field, StateField::Document | StateField::Dirty),
            EditAction::CutOrCopy | EditAction::Paste => field == StateField::SelectedText,
            EditAction::SelectAll => matches!(field, StateField::Document | StateField::Content),
        }
    }
}

/// Anything the host enables or disables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Command(CommandId),
    Edit(EditAction),
}

impl Predicate {
    /// Every predicate that reads `field`, commands first.
    pub fn affected_by(field: StateField) -> Vec<Predicate> {
        let commands = CommandId::ALL
            .into_iter()
            .filter(|c| c.reads(field))
            .map(Predicate::Command);
        let edits = EditAction::ALL
            .into_iter()
            .filter(|e| e.reads(field))
            .map(Predicate::Edit);
        commands.chain(edits).collect()
    }
}

/// Pieces of session state that change notifications are raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateField {
    Busy,
    /// The document instance was replaced.
    Document,
    /// The document's location changed (title).
    Location,
    Dirty,
    Content,
    Zoom,
    Wrap,
    StatusBar,
    TextSought,
    SelectedText,
    FontColour,
    FontFamily,
    Caret,
}

/// A command invocation, with its argument when it takes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    Find,
    FindNext,
    Replace,
    GoTo,
    GoToLine(usize),
    TimeDate,
    WordWrap,
    ZoomIn,
    ZoomOut,
    RestoreDefaultZoom,
    StatusBar,
    Help,
    About,
    FontColour(String),
    FontFamily(String),
    DropFile(PathBuf),
}

impl Command {
    pub fn id(&self) -> CommandId {
        match self {
            Command::New => CommandId::New,
            Command::Open => CommandId::Open,
            Command::Save => CommandId::Save,
            Command::SaveAs => CommandId::SaveAs,
            Command::Exit => CommandId::Exit,
            Command::Find => CommandId::Find,
            Command::FindNext => CommandId::FindNext,
            Command::Replace => CommandId::Replace,
            Command::GoTo => CommandId::GoTo,
            Command::GoToLine(_) => CommandId::GoToLine,
            Command::TimeDate => CommandId::TimeDate,
            Command::WordWrap => CommandId::WordWrap,
            Command::ZoomIn => CommandId::ZoomIn,
            Command::ZoomOut => CommandId::ZoomOut,
            Command::RestoreDefaultZoom => CommandId::RestoreDefaultZoom,
            Command::StatusBar => CommandId::StatusBar,
            Command::Help => CommandId::Help,
            Command::About => CommandId::About,
            Command::FontColour(_) => CommandId::FontColour,
            Command::FontFamily(_) => CommandId::FontFamily,
            Command::DropFile(_) => CommandId::DragDrop,
        }
    }
}
