// Chunk: docs/chunks/session_controller - Document lifecycle and command gating

//! Error types for the session controller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`SessionController`](crate::SessionController) operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the document failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The document path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The launcher could not open the help link.
    #[error("failed to open {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: io::Error,
    },

    /// A required collaborator is missing or a lookup is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SessionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SessionError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = SessionError> = std::result::Result<T, E>;
