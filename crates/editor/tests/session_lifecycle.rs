// Chunk: docs/chunks/session_controller - Integration tests for the document lifecycle
//!
//! End-to-end tests of new/open/save/close against a real temp directory.

mod common;

use std::fs;

use slate_editor::{
    Command, CommandId, DialogResult, LineEnding, SessionError, SessionEvent, StateField,
};
use tempfile::TempDir;

use common::{record, Harness, Shown};

#[test]
fn test_save_untitled_goes_through_save_as() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.txt");
    let mut h = Harness::new();
    h.dialogs.save_path(&path);
    h.session.set_content("hello\r\nworld");

    assert!(h.session.save().unwrap());

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\r\nworld");
    assert!(!h.session.document().is_dirty());
    assert_eq!(h.session.document().location(), Some(path.as_path()));
    assert_eq!(h.session.title(), "notes.txt - Slate");
}

#[test]
fn test_second_save_does_not_ask_for_a_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.txt");
    let mut h = Harness::new();
    h.dialogs.save_path(&path);

    h.session.set_content("one");
    h.session.save().unwrap();
    h.session.set_content("one two");
    h.session.save().unwrap();

    let pickers = h
        .dialogs
        .shown()
        .into_iter()
        .filter(|s| *s == Shown::SavePicker)
        .count();
    assert_eq!(pickers, 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "one two");
}

#[test]
fn test_cancelled_save_as_leaves_document_dirty() {
    let mut h = Harness::new();
    h.session.set_content("draft");

    assert!(!h.session.save().unwrap());

    assert!(h.session.document().is_dirty());
    assert!(h.session.document().is_new());
}

#[test]
fn test_open_loads_clean_document_with_detected_ending() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dos.txt");
    fs::write(&path, "a\r\nb\r\nc").unwrap();
    let mut h = Harness::new();
    h.dialogs.open_path(&path);

    assert!(h.session.execute(Command::Open).unwrap());

    let doc = h.session.document();
    assert_eq!(doc.content(), "a\r\nb\r\nc");
    assert_eq!(doc.line_ending(), LineEnding::Crlf);
    assert!(!doc.is_dirty());
    assert!(h.dialogs.prompts().is_empty());
}

#[test]
fn test_open_emits_busy_around_document_change() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a.txt");
    fs::write(&path, "text").unwrap();
    let mut h = Harness::new();
    let (events, _sub) = record(&h.session);

    h.session.open_path(path).unwrap();

    let fields: Vec<StateField> = events
        .borrow()
        .iter()
        .filter_map(|e| match e {
            SessionEvent::Changed { field, .. } => Some(*field),
            _ => None,
        })
        .collect();
    assert_eq!(
        fields,
        vec![StateField::Busy, StateField::Document, StateField::Busy]
    );
}

#[test]
fn test_open_missing_file_is_io_error_and_clears_busy() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.txt");
    let mut h = Harness::new();
    h.session.set_content("keep me");

    let err = h.session.open_path(path.clone()).unwrap_err();

    match err {
        SessionError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected Io, got {other:?}"),
    }
    assert!(!h.session.is_busy());
    assert_eq!(h.session.document().content(), "keep me");
}

#[test]
fn test_cancelled_open_picker_changes_nothing() {
    let mut h = Harness::new();
    assert!(!h.session.open().unwrap());
    assert!(h.session.document().is_new());
}

#[test]
fn test_new_with_yes_saves_before_replacing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("kept.txt");
    let mut h = Harness::new();
    h.dialogs.answer(DialogResult::Yes);
    h.dialogs.save_path(&path);
    h.session.set_content("important");

    assert!(h.session.execute(Command::New).unwrap());

    assert_eq!(fs::read_to_string(&path).unwrap(), "important");
    assert!(h.session.document().is_new());
    assert!(!h.session.document().has_content());
    assert_eq!(
        h.dialogs.shown()[0],
        Shown::Prompt {
            message: "Do you want to save changes to Untitled?".to_string(),
            title: "Slate".to_string(),
        }
    );
}

#[test]
fn test_new_with_existing_location_loads_it() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("existing.txt");
    fs::write(&path, "from disk").unwrap();
    let mut h = Harness::new();

    h.session.new_document(Some(path)).unwrap();

    assert_eq!(h.session.document().content(), "from disk");
    assert!(!h.session.document().is_dirty());
}

#[test]
fn test_new_with_missing_location_binds_empty_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fresh.txt");
    let mut h = Harness::new();

    h.session.new_document(Some(path.clone())).unwrap();

    assert_eq!(h.session.document().location(), Some(path.as_path()));
    assert!(!h.session.document().has_content());
    assert_eq!(h.session.document().name(), "fresh.txt");
    assert!(!path.exists());
}

#[test]
fn test_drop_file_is_gated_by_dirty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dropped.txt");
    fs::write(&path, "dropped").unwrap();
    let mut h = Harness::new();
    h.session.set_content("unsaved");

    assert!(!h.session.can_execute(CommandId::DragDrop));
    assert!(!h.session.execute(Command::DropFile(path.clone())).unwrap());
    assert_eq!(h.session.document().content(), "unsaved");

    h.session.new_document(None).unwrap();
    assert!(h.session.execute(Command::DropFile(path)).unwrap());
    assert_eq!(h.session.document().content(), "dropped");
}

#[test]
fn test_closing_clean_document_never_prompts() {
    let mut h = Harness::new();
    assert!(h.session.on_closing().unwrap());
    assert!(h.dialogs.prompts().is_empty());
    assert_eq!(h.view_states.save_count(), 1);
}

#[test]
fn test_closing_with_no_discards_changes() {
    let mut h = Harness::new();
    h.dialogs.answer(DialogResult::No);
    h.session.set_content("scratch");

    assert!(h.session.on_closing().unwrap());

    assert_eq!(h.dialogs.prompts().len(), 1);
    assert!(!h.dialogs.shown().contains(&Shown::SavePicker));
}

#[test]
fn test_closing_save_failure_propagates_and_clears_busy() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no_such_dir").join("file.txt");
    let mut h = Harness::new();
    h.dialogs.answer(DialogResult::Yes);
    h.dialogs.save_path(&path);
    h.session.set_content("data");

    let err = h.session.on_closing().unwrap_err();

    assert!(matches!(err, SessionError::Io { .. }));
    assert!(!h.session.is_busy());
    assert!(h.session.document().is_dirty());
    assert_eq!(h.view_states.save_count(), 0);
}

#[test]
fn test_failed_save_as_keeps_previous_location() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("no_such_dir").join("file.txt");
    let good = temp.path().join("file.txt");
    let mut h = Harness::new();
    h.dialogs.save_path(&bad);
    h.dialogs.save_path(&good);
    h.session.set_content("data");

    assert!(h.session.save().is_err());
    assert!(h.session.document().is_new());

    assert!(h.session.save().unwrap());

    let pickers = h
        .dialogs
        .shown()
        .into_iter()
        .filter(|s| *s == Shown::SavePicker)
        .count();
    assert_eq!(pickers, 2);
    assert_eq!(fs::read_to_string(&good).unwrap(), "data");
    assert_eq!(h.session.document().location(), Some(good.as_path()));
}

#[test]
fn test_exit_saves_view_state_then_requests_exit() {
    let mut h = Harness::new();
    let (events, _sub) = record(&h.session);

    assert!(h.session.execute(Command::Exit).unwrap());

    assert_eq!(h.view_states.save_count(), 1);
    assert_eq!(events.borrow().last(), Some(&SessionEvent::ExitRequested));
}
