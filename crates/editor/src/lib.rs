// Chunk: docs/chunks/session_controller - Document lifecycle and command gating
//!
//! slate-editor: the session layer of the Slate text editor.
//!
//! This crate holds everything between the host UI and the document model:
//! command availability, the save-changes confirmation flow, busy gating of
//! long-running operations, font zoom, and persistence of the view state.
//! It draws nothing. Hosts plug in a [`DialogService`] and the lookups, call
//! operations on a [`SessionController`], and react to [`SessionEvent`]s.
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use slate_editor::{
//!     DialogResult, DialogService, JsonViewStateStore, ModalDialog, SessionController,
//! };
//!
//! struct HostDialogs;
//!
//! impl DialogService for HostDialogs {
//!     fn prompt_yes_no_cancel(&mut self, _message: &str, _title: &str) -> DialogResult {
//!         DialogResult::Cancel
//!     }
//!     fn prompt_info(&mut self, _message: &str, _title: &str) {}
//!     fn pick_open_path(&mut self, _filter: &str) -> Option<PathBuf> {
//!         None
//!     }
//!     fn pick_save_path(&mut self, _filter: &str) -> Option<PathBuf> {
//!         Some(PathBuf::from("notes.txt"))
//!     }
//!     fn show_modal(&mut self, _dialog: ModalDialog<'_>) -> bool {
//!         false
//!     }
//! }
//!
//! let mut session = SessionController::builder()
//!     .dialogs(HostDialogs)
//!     .view_state_store(JsonViewStateStore::new("view_state.json"))
//!     .builtin_lookups()
//!     .build()?;
//! session.set_content("hello");
//! session.save()?;
//! # Ok::<(), slate_editor::SessionError>(())
//! ```

pub mod busy;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod dialogs;
mod error;
pub mod events;
pub mod file_store;
pub mod find_replace;
pub mod launcher;
pub mod lookup;
mod session;
pub mod view_state;
pub mod zoom;

pub use busy::BusyRegister;
pub use clipboard::{Clipboard, NoClipboard};
pub use commands::{Command, CommandId, EditAction, Predicate, StateField};
pub use config::{ConfigError, SessionConfig};
pub use dialogs::{DialogResult, DialogService, GoToDialog, ModalDialog};
pub use error::{Result, SessionError};
pub use events::{EventSource, SessionEvent, Subscription};
pub use file_store::{FileStore, FsFileStore};
pub use find_replace::{DialogSignal, FindDialog, FindOptions, ReplaceDialog};
pub use launcher::{Launcher, SystemLauncher};
pub use lookup::{
    BuiltinLookups, FontColour, FontColourLookup, FontFamily, FontFamilyLookup, ZoomLookup,
};
pub use session::{SessionBuilder, SessionController};
pub use view_state::{
    JsonViewStateStore, MemoryViewStateStore, ViewState, ViewStateError, ViewStateStore,
};
pub use zoom::{ZoomIndex, ZoomLevel};

pub use slate_buffer::{CaretPosition, Document, LineEnding};
