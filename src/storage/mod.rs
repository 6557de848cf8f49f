//! Filesystem helpers shared by the file-backed adapters.
//!
//! Every adapter works through a [`ProjectDir`], a capability handle rooted at
//! the project's `.codinghelper/` directory. Paths handed to it are relative
//! to that root and can never escape it. Whole-file rewrites go through a
//! sibling temporary file followed by a rename so a crash mid-write leaves the
//! previous contents intact.

mod blocking;
mod dir;

pub use blocking::run_blocking;
pub use dir::{FileEntry, ProjectDir};

use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the storage helpers.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The requested file or directory does not exist.
    #[error("file not found: {0}")]
    NotFound(Utf8PathBuf),

    /// The file exists but its JSON content does not match the expected shape.
    #[error("invalid contents in {path}: {message}")]
    Schema {
        /// Relative path of the offending file.
        path: Utf8PathBuf,
        /// Deserialiser diagnostic.
        message: String,
    },

    /// Underlying I/O failure.
    #[error("I/O failure on {path}: {source}")]
    Io {
        /// Relative path being accessed.
        path: Utf8PathBuf,
        /// Wrapped I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The blocking worker thread panicked or was cancelled.
    #[error("blocking storage task failed: {0}")]
    Join(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        let relative = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(relative);
        }
        Self::Io {
            path: relative,
            source: Arc::new(source),
        }
    }
}

/// Result type for storage helpers.
pub type StorageResult<T> = Result<T, StorageError>;
