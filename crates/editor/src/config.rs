// Chunk: docs/chunks/session_controller - Document lifecycle and command gating

//! Session configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields a working configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Strings and formats the session uses when talking to the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Suffix of the window title and caption of prompts.
    pub app_title: String,
    /// Link opened by the Help command.
    pub help_url: String,
    /// Body of the About box.
    pub about_text: String,
    /// Filter handed to the file pickers, `label|pattern`.
    pub file_filter: String,
    /// chrono format used by the Time/Date command.
    pub time_date_format: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            app_title: "Slate".to_string(),
            help_url: "https://github.com/example/slate#readme".to_string(),
            about_text: "A small plain-text editor with a dark page".to_string(),
            file_filter: "Text Documents|*.txt".to_string(),
            time_date_format: "%H:%M %Y-%m-%d".to_string(),
        }
    }
}

impl SessionConfig {
    /// Reads the configuration at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
