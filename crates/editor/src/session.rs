// Chunk: docs/chunks/session_controller - Document lifecycle and command gating
// Chunk: docs/chunks/dirty_close_confirm - Save-changes confirmation
// Chunk: docs/chunks/file_save - Document read and write
// Chunk: docs/chunks/font_zoom - Bounded font zoom stepper
// Chunk: docs/chunks/go_to_line - Line-ending aware go-to-line scan
//!
//! The session controller.
//!
//! [`SessionController`] owns the single open [`Document`], the zoom index,
//! the busy register and the view state. The host UI calls its operations
//! from the event loop and listens to [`SessionEvent`]s to refresh menus and
//! move the caret. The controller produces data and events only; it never
//! renders anything.
//!
//! # Busy gating
//!
//! Open, save and help run as named busy operations. The name is registered
//! before the document is touched and unregistered after the effect is
//! visible, on the error path too. While anything is registered every
//! command reports itself disabled; the host is expected to grey out its
//! controls rather than queue input.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::{DateTime, Local, TimeZone};
use slate_buffer::{locate_line, CaretPosition, Document};
use tracing::{debug, info, warn};

use crate::busy::{self, BusyRegister};
use crate::clipboard::{Clipboard, NoClipboard};
use crate::commands::{Command, CommandId, EditAction, Predicate, StateField};
use crate::config::SessionConfig;
use crate::dialogs::{DialogResult, DialogService, GoToDialog, ModalDialog};
use crate::error::{Result, SessionError};
use crate::events::{EventSource, SessionEvent, Subscription};
use crate::file_store::{FileStore, FsFileStore};
use crate::find_replace::{DialogSignal, FindDialog, ReplaceDialog};
use crate::launcher::{Launcher, SystemLauncher};
use crate::lookup::{
    BuiltinLookups, FontColour, FontColourLookup, FontFamily, FontFamilyLookup, ZoomLookup,
};
use crate::view_state::{ViewState, ViewStateStore};
use crate::zoom::ZoomIndex;

type SignalQueue = Rc<RefCell<VecDeque<DialogSignal>>>;

// =============================================================================
// Builder
// =============================================================================

/// Collects the collaborators a session needs.
///
/// The dialog service, view-state store and the three lookups are required;
/// [`build`](Self::build) fails with [`SessionError::InvalidConfiguration`]
/// naming the first one missing. The file store, clipboard and launcher
/// default to [`FsFileStore`], [`NoClipboard`] and [`SystemLauncher`].
#[derive(Default)]
pub struct SessionBuilder {
    config: Option<SessionConfig>,
    files: Option<Box<dyn FileStore>>,
    dialogs: Option<Box<dyn DialogService>>,
    view_states: Option<Box<dyn ViewStateStore>>,
    font_colours: Option<Box<dyn FontColourLookup>>,
    font_families: Option<Box<dyn FontFamilyLookup>>,
    zoom_levels: Option<Box<dyn ZoomLookup>>,
    clipboard: Option<Box<dyn Clipboard>>,
    launcher: Option<Box<dyn Launcher>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn file_store(mut self, files: impl FileStore + 'static) -> Self {
        self.files = Some(Box::new(files));
        self
    }

    pub fn dialogs(mut self, dialogs: impl DialogService + 'static) -> Self {
        self.dialogs = Some(Box::new(dialogs));
        self
    }

    pub fn view_state_store(mut self, store: impl ViewStateStore + 'static) -> Self {
        self.view_states = Some(Box::new(store));
        self
    }

    pub fn font_colours(mut self, lookup: impl FontColourLookup + 'static) -> Self {
        self.font_colours = Some(Box::new(lookup));
        self
    }

    pub fn font_families(mut self, lookup: impl FontFamilyLookup + 'static) -> Self {
        self.font_families = Some(Box::new(lookup));
        self
    }

    pub fn zoom_levels(mut self, lookup: impl ZoomLookup + 'static) -> Self {
        self.zoom_levels = Some(Box::new(lookup));
        self
    }

    /// Uses [`BuiltinLookups`] for colours, families and zoom levels.
    pub fn builtin_lookups(self) -> Self {
        self.font_colours(BuiltinLookups)
            .font_families(BuiltinLookups)
            .zoom_levels(BuiltinLookups)
    }

    pub fn clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Some(Box::new(clipboard));
        self
    }

    pub fn launcher(mut self, launcher: impl Launcher + 'static) -> Self {
        self.launcher = Some(Box::new(launcher));
        self
    }

    /// Loads the view state, builds the zoom index and wires the dialogs.
    pub fn build(self) -> Result<SessionController> {
        let dialogs = require(self.dialogs, "dialog service")?;
        let view_states = require(self.view_states, "view-state store")?;
        let font_colours = require(self.font_colours, "font colour lookup")?;
        let font_families = require(self.font_families, "font family lookup")?;
        let zoom_levels = require(self.zoom_levels, "zoom lookup")?;

        let mut view_state = view_states.load();

        let mut zoom = ZoomIndex::new(zoom_levels.zoom_levels(), zoom_levels.default_zoom().key)?;
        let restored = view_state
            .selected_zoom
            .map_or(false, |key| zoom.select_key(key));
        if !restored {
            zoom.restore_default();
        }
        view_state.selected_zoom = zoom.selected_key();

        let find_dialog = FindDialog::new();
        let replace_dialog = ReplaceDialog::new();
        let pending_signals: SignalQueue = Rc::new(RefCell::new(VecDeque::new()));
        let dialog_subscriptions = vec![
            queue_signals(find_dialog.signals(), &pending_signals),
            queue_signals(replace_dialog.signals(), &pending_signals),
        ];

        debug!(zoom = ?zoom.selected(), "session started");

        Ok(SessionController {
            config: self.config.unwrap_or_default(),
            document: Document::new(),
            busy: BusyRegister::new(),
            zoom,
            view_state,
            font_colours: font_colours.font_colours(),
            font_families: font_families.font_families(),
            text_sought: String::new(),
            selected_text: String::new(),
            caret: CaretPosition::default(),
            files: self.files.unwrap_or_else(|| Box::new(FsFileStore)),
            dialogs,
            view_states,
            clipboard: self.clipboard.unwrap_or_else(|| Box::new(NoClipboard)),
            launcher: self.launcher.unwrap_or_else(|| Box::new(SystemLauncher)),
            find_dialog,
            replace_dialog,
            pending_signals,
            _dialog_subscriptions: dialog_subscriptions,
            events: EventSource::new(),
        })
    }
}

fn require<T>(value: Option<T>, what: &str) -> Result<T> {
    value.ok_or_else(|| SessionError::InvalidConfiguration(format!("{} is required", what)))
}

fn queue_signals(
    source: &EventSource<DialogSignal>,
    pending: &SignalQueue,
) -> Subscription {
    let pending = Rc::clone(pending);
    source.subscribe(move |signal: &DialogSignal| pending.borrow_mut().push_back(signal.clone()))
}

// =============================================================================
// Controller
// =============================================================================

/// Orchestrates the single open document and everything the menus depend on.
pub struct SessionController {
    config: SessionConfig,
    document: Document,
    busy: BusyRegister,
    zoom: ZoomIndex,
    view_state: ViewState,
    font_colours: Vec<FontColour>,
    font_families: Vec<FontFamily>,
    text_sought: String,
    selected_text: String,
    caret: CaretPosition,
    files: Box<dyn FileStore>,
    dialogs: Box<dyn DialogService>,
    view_states: Box<dyn ViewStateStore>,
    clipboard: Box<dyn Clipboard>,
    launcher: Box<dyn Launcher>,
    find_dialog: FindDialog,
    replace_dialog: ReplaceDialog,
    /// Signals raised by the find/replace dialogs, drained after each modal.
    pending_signals: SignalQueue,
    /// Held for the controller's lifetime; dropping them unregisters from the dialogs.
    _dialog_subscriptions: Vec<Subscription>,
    events: EventSource<SessionEvent>,
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("document", &self.document)
            .field("busy", &self.busy)
            .field("zoom", &self.zoom.selected())
            .field("view_state", &self.view_state)
            .finish_non_exhaustive()
    }
}

impl SessionController {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Registers `handler` for session events until the returned handle is dropped.
    #[must_use = "dropping the subscription unregisters the handler"]
    pub fn subscribe(&self, handler: impl FnMut(&SessionEvent) + 'static) -> Subscription {
        self.events.subscribe(handler)
    }

    fn notify(&self, field: StateField) {
        self.events.emit(&SessionEvent::Changed {
            field,
            affected: Predicate::affected_by(field),
        });
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn busy_register(&self) -> &BusyRegister {
        &self.busy
    }

    pub fn zoom(&self) -> &ZoomIndex {
        &self.zoom
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn font_colours(&self) -> &[FontColour] {
        &self.font_colours
    }

    pub fn font_families(&self) -> &[FontFamily] {
        &self.font_families
    }

    pub fn selected_font_colour(&self) -> Option<&FontColour> {
        let key = self.view_state.selected_font_colour.as_deref()?;
        self.font_colours.iter().find(|c| c.key == key)
    }

    pub fn selected_font_family(&self) -> Option<&FontFamily> {
        let key = self.view_state.selected_font_family.as_deref()?;
        self.font_families.iter().find(|f| f.key == key)
    }

    pub fn find_dialog(&self) -> &FindDialog {
        &self.find_dialog
    }

    pub fn replace_dialog(&self) -> &ReplaceDialog {
        &self.replace_dialog
    }

    /// Window title: `"<document name> - <app title>"`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.document.name(), self.config.app_title)
    }

    pub fn text_sought(&self) -> &str {
        &self.text_sought
    }

    pub fn set_text_sought(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text_sought {
            self.text_sought = text;
            self.notify(StateField::TextSought);
        }
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    pub fn set_selected_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.selected_text {
            self.selected_text = text;
            self.notify(StateField::SelectedText);
        }
    }

    pub fn caret(&self) -> CaretPosition {
        self.caret
    }

    /// Stores the caret reported by the text surface (0-indexed).
    pub fn set_caret(&mut self, line: usize, col: usize) {
        self.caret = CaretPosition::new(line, col);
        self.notify(StateField::Caret);
    }

    /// Stores the caret from a char offset into the document.
    pub fn set_caret_offset(&mut self, offset: usize) {
        self.caret = CaretPosition::from_offset(self.document.content(), offset);
        self.notify(StateField::Caret);
    }

    /// Status bar text, e.g. `"Ln 3, Col 7"`.
    pub fn caret_position(&self) -> String {
        self.caret.to_string()
    }

    /// Replaces the document text with what the text surface holds.
    pub fn set_content(&mut self, content: impl Into<String>) {
        let was_dirty = self.document.is_dirty();
        if self.document.set_content(content) {
            self.notify(StateField::Content);
            if !was_dirty {
                self.notify(StateField::Dirty);
            }
        }
    }

    fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let was_dirty = self.document.is_dirty();
        self.document.append(text);
        self.notify(StateField::Content);
        if !was_dirty && self.document.is_dirty() {
            self.notify(StateField::Dirty);
        }
    }

    fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.caret = CaretPosition::default();
        self.notify(StateField::Document);
    }

    // =========================================================================
    // Command availability
    // =========================================================================

    /// Whether `command` may run right now. Computed from live state on every call.
    pub fn can_execute(&self, command: CommandId) -> bool {
        let idle = !self.busy.is_busy();
        match command {
            CommandId::Open | CommandId::DragDrop => idle && !self.document.is_dirty(),
            CommandId::FindNext => idle && !self.text_sought.is_empty(),
            CommandId::ZoomIn => idle && !self.zoom.at_max(),
            CommandId::ZoomOut => idle && !self.zoom.at_min(),
            CommandId::GoTo | CommandId::GoToLine => {
                idle && self.document.has_content() && !self.view_state.is_wrapped
            }
            _ => idle,
        }
    }

    /// Whether an edit-menu item should be enabled.
    pub fn is_enabled(&self, action: EditAction) -> bool {
        let idle = !self.busy.is_busy();
        match action {
            EditAction::Undo => idle && self.document.is_dirty(),
            EditAction::CutOrCopy => idle && !self.selected_text.is_empty(),
            EditAction::Paste => idle && self.clipboard.has_text(),
            EditAction::SelectAll => idle && self.document.has_content(),
        }
    }

    pub fn is_available(&self, predicate: Predicate) -> bool {
        match predicate {
            Predicate::Command(command) => self.can_execute(command),
            Predicate::Edit(action) => self.is_enabled(action),
        }
    }

    /// Runs `command` if it is currently available.
    ///
    /// Returns `Ok(false)` without side effects when the command is disabled.
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        let id = command.id();
        if !self.can_execute(id) {
            debug!(command = ?id, "command disabled");
            return Ok(false);
        }
        debug!(command = ?id, "executing command");

        match command {
            Command::New => self.new_document(None)?,
            Command::Open => {
                self.open()?;
            }
            Command::Save => {
                self.save()?;
            }
            Command::SaveAs => {
                self.save_as()?;
            }
            Command::Exit => self.exit()?,
            Command::Find => {
                self.show_find_dialog();
            }
            Command::FindNext => self.find_next(),
            Command::Replace => {
                self.show_replace_dialog();
            }
            Command::GoTo => {
                self.go_to();
            }
            Command::GoToLine(line) => {
                self.go_to_line(line);
            }
            Command::TimeDate => self.insert_time_date(),
            Command::WordWrap => self.toggle_word_wrap(),
            Command::ZoomIn => {
                self.zoom_in();
            }
            Command::ZoomOut => {
                self.zoom_out();
            }
            Command::RestoreDefaultZoom => self.restore_default_zoom(),
            Command::StatusBar => self.toggle_status_bar(),
            Command::Help => self.help()?,
            Command::About => self.about(),
            Command::FontColour(key) => {
                self.select_font_colour(&key);
            }
            Command::FontFamily(key) => {
                self.select_font_family(&key);
            }
            Command::DropFile(path) => {
                self.drop_file(path)?;
            }
        }
        Ok(true)
    }

    // =========================================================================
    // Busy operations
    // =========================================================================

    /// Runs `f` with `operation` registered as busy.
    ///
    /// The operation is unregistered whether `f` succeeds or fails.
    fn run_busy<T>(
        &mut self,
        operation: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.busy.start(operation) {
            self.notify(StateField::Busy);
        }
        let result = f(self);
        if self.busy.end(operation) {
            self.notify(StateField::Busy);
        }
        result
    }

    // =========================================================================
    // Document lifecycle
    // =========================================================================

    /// Asks whether to save a dirty document. Only an explicit "yes" counts.
    ///
    /// A clean document is never prompted for.
    fn confirm_save_changes(&mut self) -> bool {
        if !self.document.is_dirty() {
            return false;
        }
        let message = format!("Do you want to save changes to {}?", self.document.name());
        let answer = self
            .dialogs
            .prompt_yes_no_cancel(&message, &self.config.app_title);
        debug!(?answer, "save changes prompt answered");
        answer == DialogResult::Yes
    }

    /// Replaces the current document with a fresh one.
    ///
    /// A dirty document is offered for saving first; declining or cancelling
    /// skips the save but the replacement still happens. With a `location`
    /// naming an existing file the file is loaded; otherwise the new document
    /// is empty and bound to `location` (or untitled).
    pub fn new_document(&mut self, location: Option<PathBuf>) -> Result<()> {
        if self.confirm_save_changes() {
            self.save()?;
        }

        match location {
            Some(path) if self.files.exists(&path) => self.open_path(path),
            Some(path) => {
                self.replace_document(Document::bound(path));
                Ok(())
            }
            None => {
                self.replace_document(Document::new());
                Ok(())
            }
        }
    }

    /// Asks for a file and opens it. Returns false if the picker was cancelled.
    pub fn open(&mut self) -> Result<bool> {
        let Some(path) = self.dialogs.pick_open_path(&self.config.file_filter) else {
            return Ok(false);
        };
        self.open_path(path)?;
        Ok(true)
    }

    /// Loads `path` into a new, clean document.
    pub fn open_path(&mut self, path: PathBuf) -> Result<()> {
        self.run_busy(busy::OPEN, |session| {
            let content = session
                .files
                .read(&path)
                .map_err(|source| SessionError::io(path.clone(), source))?;
            info!(path = %path.display(), "opened document");
            session.replace_document(Document::loaded(path, content));
            Ok(())
        })
    }

    /// Writes the document to its location, or goes through save-as when it has none.
    ///
    /// Returns false only when save-as was cancelled.
    pub fn save(&mut self) -> Result<bool> {
        let Some(path) = self.document.location().map(Path::to_path_buf) else {
            return self.save_as();
        };

        self.run_busy(busy::SAVE, |session| {
            session
                .files
                .write(&path, session.document.content())
                .map_err(|source| SessionError::io(path.clone(), source))?;
            session.document.mark_saved();
            info!(path = %path.display(), "saved document");
            session.notify(StateField::Dirty);
            Ok(true)
        })
    }

    /// Asks for a destination and saves there. Returns false if the picker was cancelled.
    pub fn save_as(&mut self) -> Result<bool> {
        match self.dialogs.pick_save_path(&self.config.file_filter) {
            Some(path) => self.save_as_path(path),
            None => Ok(false),
        }
    }

    /// Rebinds the document to `path` and saves it.
    ///
    /// If the write fails the previous location is restored, so the next
    /// save asks for a path again.
    pub fn save_as_path(&mut self, path: PathBuf) -> Result<bool> {
        let previous = self.document.replace_location(Some(path));
        self.notify(StateField::Location);
        let result = self.save();
        if result.is_err() {
            self.document.replace_location(previous);
            self.notify(StateField::Location);
        }
        result
    }

    /// Called when the window is about to close.
    ///
    /// Offers to save a dirty document, persists the view state, and reports
    /// that closing may proceed. Write errors from the save propagate; a
    /// failure to store the view state is only logged.
    pub fn on_closing(&mut self) -> Result<bool> {
        if self.confirm_save_changes() {
            self.save()?;
        }
        if let Err(e) = self.view_states.save(&self.view_state) {
            warn!("Failed to save view state: {}", e);
        }
        info!("session closing");
        Ok(true)
    }

    /// Runs [`on_closing`](Self::on_closing) and asks the host to quit.
    pub fn exit(&mut self) -> Result<()> {
        self.on_closing()?;
        self.events.emit(&SessionEvent::ExitRequested);
        Ok(())
    }

    /// Opens a file dropped onto the window.
    ///
    /// Returns false without touching anything while busy or dirty.
    pub fn drop_file(&mut self, path: PathBuf) -> Result<bool> {
        if !self.can_execute(CommandId::DragDrop) {
            debug!(path = %path.display(), "drop ignored");
            return Ok(false);
        }
        self.new_document(Some(path))?;
        Ok(true)
    }

    // =========================================================================
    // Go to line
    // =========================================================================

    /// Shows the Go To dialog seeded with the caret line and jumps on confirmation.
    ///
    /// Line offsets only match what the user sees in an unwrapped, non-empty
    /// document; otherwise the dialog is not shown.
    pub fn go_to(&mut self) -> Option<usize> {
        if !self.can_execute(CommandId::GoTo) {
            debug!("go to unavailable");
            return None;
        }
        let mut dialog = GoToDialog::new(self.caret.line + 1);
        if !self.dialogs.show_modal(ModalDialog::GoTo(&mut dialog)) {
            return None;
        }
        self.go_to_line(dialog.line_number)
    }

    /// Raises [`SessionEvent::GoToRequested`] with the offset following the
    /// `line`th terminator. Does nothing when the document is shorter.
    pub fn go_to_line(&mut self, line: usize) -> Option<usize> {
        let offset = locate_line(self.document.content(), line, self.document.line_ending());
        match offset {
            Some(offset) => {
                debug!(line, offset, "go to line");
                self.events.emit(&SessionEvent::GoToRequested(offset));
            }
            None => debug!(line, "go to line past end of document"),
        }
        offset
    }

    // =========================================================================
    // Find / replace
    // =========================================================================

    /// Shows the Find dialog, then handles whatever it raised.
    pub fn show_find_dialog(&mut self) -> bool {
        let confirmed = self
            .dialogs
            .show_modal(ModalDialog::Find(&mut self.find_dialog));
        self.process_dialog_signals();
        confirmed
    }

    /// Shows the Replace dialog, then handles whatever it raised.
    pub fn show_replace_dialog(&mut self) -> bool {
        let confirmed = self
            .dialogs
            .show_modal(ModalDialog::Replace(&mut self.replace_dialog));
        self.process_dialog_signals();
        confirmed
    }

    /// Handles signals raised by the find/replace dialogs, in order.
    pub fn process_dialog_signals(&mut self) {
        loop {
            let signal = self.pending_signals.borrow_mut().pop_front();
            let Some(signal) = signal else {
                break;
            };
            match signal {
                DialogSignal::TextSoughtChanged(text) => self.set_text_sought(text),
                DialogSignal::FindNext => self.find_next(),
                DialogSignal::Replace => self.replace(),
                DialogSignal::ReplaceAll => self.replace_all(),
            }
        }
    }

    // TODO: search the document (match case, whole word, wrap around) and
    // raise a selection event for the hit.
    pub fn find_next(&mut self) {
        debug!(text_sought = %self.text_sought, "find next is not implemented");
    }

    pub fn replace(&mut self) {
        debug!(text_sought = %self.text_sought, "replace is not implemented");
    }

    pub fn replace_all(&mut self) {
        debug!(text_sought = %self.text_sought, "replace all is not implemented");
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    /// Steps the font zoom up. Returns true if the selection moved.
    pub fn zoom_in(&mut self) -> bool {
        let changed = self.zoom.zoom_in();
        if changed {
            self.sync_zoom();
        }
        changed
    }

    /// Steps the font zoom down. Returns true if the selection moved.
    pub fn zoom_out(&mut self) -> bool {
        let changed = self.zoom.zoom_out();
        if changed {
            self.sync_zoom();
        }
        changed
    }

    pub fn restore_default_zoom(&mut self) {
        self.zoom.restore_default();
        self.sync_zoom();
    }

    fn sync_zoom(&mut self) {
        self.view_state.selected_zoom = self.zoom.selected_key();
        debug!(zoom = ?self.zoom.selected(), "zoom changed");
        self.notify(StateField::Zoom);
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn toggle_word_wrap(&mut self) {
        self.view_state.is_wrapped = !self.view_state.is_wrapped;
        self.notify(StateField::Wrap);
    }

    pub fn toggle_status_bar(&mut self) {
        self.view_state.is_status_bar_visible = !self.view_state.is_status_bar_visible;
        self.notify(StateField::StatusBar);
    }

    /// Selects a font colour by key. Unknown keys are ignored.
    pub fn select_font_colour(&mut self, key: &str) -> bool {
        if !self.font_colours.iter().any(|c| c.key == key) {
            warn!(key, "unknown font colour");
            return false;
        }
        self.view_state.selected_font_colour = Some(key.to_string());
        self.notify(StateField::FontColour);
        true
    }

    /// Selects a font family by key. Unknown keys are ignored.
    pub fn select_font_family(&mut self, key: &str) -> bool {
        if !self.font_families.iter().any(|f| f.key == key) {
            warn!(key, "unknown font family");
            return false;
        }
        self.view_state.selected_font_family = Some(key.to_string());
        self.notify(StateField::FontFamily);
        true
    }

    // =========================================================================
    // Misc
    // =========================================================================

    /// Appends the current local time, formatted per the configuration.
    pub fn insert_time_date(&mut self) {
        self.insert_time_date_at(&Local::now());
    }

    /// Appends `now`, formatted per the configuration.
    pub fn insert_time_date_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>)
    where
        Tz::Offset: fmt::Display,
    {
        let mut stamp = String::new();
        if write!(stamp, "{}", now.format(&self.config.time_date_format)).is_err() {
            warn!(format = %self.config.time_date_format, "invalid time/date format");
            return;
        }
        self.append_text(&stamp);
    }

    /// Opens the help link while registered as busy.
    pub fn help(&mut self) -> Result<()> {
        let url = self.config.help_url.clone();
        self.run_busy(busy::HELP, |session| {
            session
                .launcher
                .open_url(&url)
                .map_err(|source| SessionError::Launch {
                    url: url.clone(),
                    source,
                })
        })
    }

    pub fn about(&mut self) {
        self.dialogs.prompt_info(&self.config.about_text, "About");
    }
}
