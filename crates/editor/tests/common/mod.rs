// Chunk: docs/chunks/session_controller - Scripted collaborators for integration tests
//!
//! Scripted stand-ins for the host's dialogs, clipboard and launcher.
//!
//! Each fake shares its script through an `Rc<RefCell<_>>` so a test can keep
//! a handle after moving the fake into the session builder.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use slate_editor::{
    Clipboard, DialogResult, DialogService, Launcher, MemoryViewStateStore, ModalDialog,
    SessionController, SessionEvent, Subscription,
};

/// What the scripted dialogs saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Prompt { message: String, title: String },
    Info { message: String, title: String },
    OpenPicker,
    SavePicker,
    GoTo(usize),
    Find,
    Replace,
}

#[derive(Debug, Default)]
pub struct Script {
    pub answers: VecDeque<DialogResult>,
    pub open_paths: VecDeque<PathBuf>,
    pub save_paths: VecDeque<PathBuf>,
    pub go_to_line: Option<usize>,
    pub shown: Vec<Shown>,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedDialogs {
    pub script: Rc<RefCell<Script>>,
}

impl ScriptedDialogs {
    pub fn answer(&self, answer: DialogResult) {
        self.script.borrow_mut().answers.push_back(answer);
    }

    pub fn open_path(&self, path: impl Into<PathBuf>) {
        self.script.borrow_mut().open_paths.push_back(path.into());
    }

    pub fn save_path(&self, path: impl Into<PathBuf>) {
        self.script.borrow_mut().save_paths.push_back(path.into());
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.script.borrow().shown.clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Prompt { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl DialogService for ScriptedDialogs {
    fn prompt_yes_no_cancel(&mut self, message: &str, title: &str) -> DialogResult {
        let mut script = self.script.borrow_mut();
        script.shown.push(Shown::Prompt {
            message: message.to_string(),
            title: title.to_string(),
        });
        script.answers.pop_front().unwrap_or(DialogResult::Cancel)
    }

    fn prompt_info(&mut self, message: &str, title: &str) {
        self.script.borrow_mut().shown.push(Shown::Info {
            message: message.to_string(),
            title: title.to_string(),
        });
    }

    fn pick_open_path(&mut self, _filter: &str) -> Option<PathBuf> {
        let mut script = self.script.borrow_mut();
        script.shown.push(Shown::OpenPicker);
        script.open_paths.pop_front()
    }

    fn pick_save_path(&mut self, _filter: &str) -> Option<PathBuf> {
        let mut script = self.script.borrow_mut();
        script.shown.push(Shown::SavePicker);
        script.save_paths.pop_front()
    }

    fn show_modal(&mut self, dialog: ModalDialog<'_>) -> bool {
        let mut script = self.script.borrow_mut();
        match dialog {
            ModalDialog::GoTo(go_to) => {
                script.shown.push(Shown::GoTo(go_to.line_number));
                match script.go_to_line {
                    Some(line) => {
                        go_to.line_number = line;
                        true
                    }
                    None => false,
                }
            }
            ModalDialog::Find(_) => {
                script.shown.push(Shown::Find);
                false
            }
            ModalDialog::Replace(_) => {
                script.shown.push(Shown::Replace);
                false
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeClipboard {
    pub has_text: Rc<RefCell<bool>>,
}

impl Clipboard for FakeClipboard {
    fn has_text(&self) -> bool {
        *self.has_text.borrow()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    pub opened: Rc<RefCell<Vec<String>>>,
}

impl Launcher for RecordingLauncher {
    fn open_url(&mut self, url: &str) -> io::Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// A session wired to scripted fakes, with handles to inspect them.
pub struct Harness {
    pub session: SessionController,
    pub dialogs: ScriptedDialogs,
    pub clipboard: FakeClipboard,
    pub launcher: RecordingLauncher,
    pub view_states: MemoryViewStateStore,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_view_states(MemoryViewStateStore::default())
    }

    pub fn with_view_states(view_states: MemoryViewStateStore) -> Self {
        let dialogs = ScriptedDialogs::default();
        let clipboard = FakeClipboard::default();
        let launcher = RecordingLauncher::default();
        let session = SessionController::builder()
            .dialogs(dialogs.clone())
            .view_state_store(view_states.clone())
            .builtin_lookups()
            .clipboard(clipboard.clone())
            .launcher(launcher.clone())
            .build()
            .expect("session should build");
        Self {
            session,
            dialogs,
            clipboard,
            launcher,
            view_states,
        }
    }
}

/// Collects every event the session emits while the subscription lives.
pub fn record(session: &SessionController) -> (Rc<RefCell<Vec<SessionEvent>>>, Subscription) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let subscription = session.subscribe(move |event: &SessionEvent| {
        sink.borrow_mut().push(event.clone());
    });
    (events, subscription)
}
