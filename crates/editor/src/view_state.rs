// Chunk: docs/chunks/view_state_persistence - View-state persistence
//!
//! Persistence of the user's view preferences.
//!
//! The view state is loaded once when the session starts and saved once when
//! it closes. It is independent of the document: zoom level, font colour,
//! font family, word wrap and status bar visibility.
//!
//! ## File Location
//!
//! [`JsonViewStateStore::at_default_location`] stores the state in the
//! platform data directory, e.g. `~/.local/share/slate/view_state.json`.
//!
//! ## Schema Version
//!
//! The file includes a schema version. If the version doesn't match the
//! current code, the file is discarded and defaults are used.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Current schema version for the view-state file.
///
/// Increment this when making breaking changes to the format.
const SCHEMA_VERSION: u32 = 1;

/// Application name used for the data directory.
const APP_NAME: &str = "slate";

/// View-state file name.
const VIEW_STATE_FILENAME: &str = "view_state.json";

// =============================================================================
// Data Types
// =============================================================================

/// The user's view preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Key of the selected zoom level.
    pub selected_zoom: Option<u32>,
    /// Key of the selected font colour.
    pub selected_font_colour: Option<String>,
    /// Key of the selected font family.
    pub selected_font_family: Option<String>,
    pub is_wrapped: bool,
    pub is_status_bar_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_zoom: None,
            selected_font_colour: None,
            selected_font_family: None,
            is_wrapped: false,
            is_status_bar_visible: true,
        }
    }
}

/// On-disk wrapper carrying the schema version.
#[derive(Debug, Serialize, Deserialize)]
struct ViewStateFile {
    schema_version: u32,
    #[serde(flatten)]
    state: ViewState,
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while saving the view state.
#[derive(Debug, Error)]
pub enum ViewStateError {
    #[error("view-state I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("view-state serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not determine the view-state directory")]
    NoStateDirectory,
}

// =============================================================================
// Store Trait
// =============================================================================

/// Loads the view state at session start and saves it at session end.
pub trait ViewStateStore {
    /// Returns the stored state, or defaults when nothing usable is stored.
    fn load(&self) -> ViewState;
    fn save(&self, state: &ViewState) -> Result<(), ViewStateError>;
}

/// Returns the default view-state file path.
///
/// Creates the `slate` subdirectory of the data directory if it doesn't exist.
/// Returns `None` if the data directory cannot be determined or created.
pub fn view_state_file_path() -> Option<PathBuf> {
    let data_dir = dirs::data_dir()?;
    let app_dir = data_dir.join(APP_NAME);

    if !app_dir.exists() {
        if let Err(e) = fs::create_dir_all(&app_dir) {
            warn!("Failed to create view-state directory {:?}: {}", app_dir, e);
            return None;
        }
    }

    Some(app_dir.join(VIEW_STATE_FILENAME))
}

// =============================================================================
// JSON File Store
// =============================================================================

/// Stores the view state as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonViewStateStore {
    path: PathBuf,
}

impl JsonViewStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store at [`view_state_file_path`].
    pub fn at_default_location() -> Result<Self, ViewStateError> {
        view_state_file_path()
            .map(Self::new)
            .ok_or(ViewStateError::NoStateDirectory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ViewStateStore for JsonViewStateStore {
    /// Loads the view state from disk.
    ///
    /// Falls back to defaults if the file doesn't exist, cannot be read or
    /// parsed, or carries a different schema version.
    fn load(&self) -> ViewState {
        if !self.path.exists() {
            return ViewState::default();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to read view-state file: {}", e);
                return ViewState::default();
            }
        };

        let file: ViewStateFile = match serde_json::from_str(&contents) {
            Ok(f) => f,
            Err(e) => {
                warn!("Failed to parse view-state file: {}", e);
                return ViewState::default();
            }
        };

        if file.schema_version != SCHEMA_VERSION {
            warn!(
                "View-state schema version mismatch (expected {}, got {})",
                SCHEMA_VERSION, file.schema_version
            );
            return ViewState::default();
        }

        file.state
    }

    /// Saves the view state, writing to a temp file and renaming over the target.
    fn save(&self, state: &ViewState) -> Result<(), ViewStateError> {
        let file = ViewStateFile {
            schema_version: SCHEMA_VERSION,
            state: state.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Keeps the view state in memory. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryViewStateStore {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    state: Option<ViewState>,
    saves: usize,
}

impl MemoryViewStateStore {
    /// A store that will hand out `state` on load.
    pub fn with_state(state: ViewState) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().state = Some(state);
        store
    }

    /// The last state saved (or seeded).
    pub fn stored(&self) -> Option<ViewState> {
        self.inner.borrow().state.clone()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.inner.borrow().saves
    }
}

impl ViewStateStore for MemoryViewStateStore {
    fn load(&self) -> ViewState {
        self.inner.borrow().state.clone().unwrap_or_default()
    }

    fn save(&self, state: &ViewState) -> Result<(), ViewStateError> {
        let mut inner = self.inner.borrow_mut();
        inner.state = Some(state.clone());
        inner.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> ViewState {
        ViewState {
            selected_zoom: Some(4),
            selected_font_colour: Some("amber".to_string()),
            selected_font_family: Some("consolas".to_string()),
            is_wrapped: true,
            is_status_bar_visible: false,
        }
    }

    #[test]
    fn test_default_shows_status_bar() {
        let state = ViewState::default();
        assert!(state.is_status_bar_visible);
        assert!(!state.is_wrapped);
        assert_eq!(state.selected_zoom, None);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let store = JsonViewStateStore::new(temp.path().join("missing.json"));
        assert_eq!(store.load(), ViewState::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = JsonViewStateStore::new(temp.path().join(VIEW_STATE_FILENAME));

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(VIEW_STATE_FILENAME);
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(JsonViewStateStore::new(path).load(), ViewState::default());
    }

    #[test]
    fn test_schema_mismatch_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(VIEW_STATE_FILENAME);
        fs::write(&path, r#"{"schema_version": 99, "is_wrapped": true}"#).unwrap();

        assert_eq!(JsonViewStateStore::new(path).load(), ViewState::default());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(VIEW_STATE_FILENAME);
        fs::write(&path, r#"{"schema_version": 1, "is_wrapped": true}"#).unwrap();

        let state = JsonViewStateStore::new(path).load();
        assert!(state.is_wrapped);
        assert!(state.is_status_bar_visible);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let store = JsonViewStateStore::new(temp.path().join("nope").join(VIEW_STATE_FILENAME));
        assert!(matches!(store.save(&sample()), Err(ViewStateError::Io(_))));
    }

    #[test]
    fn test_memory_store_shares_between_clones() {
        let store = MemoryViewStateStore::default();
        let handle = store.clone();
        store.save(&sample()).unwrap();

        assert_eq!(handle.stored(), Some(sample()));
        assert_eq!(handle.save_count(), 1);
        assert_eq!(handle.load(), sample());
    }
}
