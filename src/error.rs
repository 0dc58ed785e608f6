//! Error types for indexing, persistence and snippet extraction.
//!
//! Library code returns [`LindexError`]; the binary layers `anyhow` on top.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LindexError
pub type Result<T> = std::result::Result<T, LindexError>;

#[derive(Error, Debug)]
pub enum LindexError {
    /// The build root is unusable: missing, not a directory, or not
    /// representable in the index file
    #[error("invalid root {path}: {reason}")]
    InvalidRoot { path: PathBuf, reason: String },

    /// A scanned path has a component that is not valid UTF-8 and cannot be
    /// stored as an index key
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path { path: PathBuf },

    /// A single file could not be read during a build or snippet extraction
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The index file exists but could not be deserialized
    #[error("index at {path} is corrupted: {reason}")]
    IndexCorrupted { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl LindexError {
    /// True for failures scoped to one file, which collection-level
    /// operations skip instead of aborting on.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            LindexError::FileRead { .. } | LindexError::NonUtf8Path { .. }
        )
    }

    pub fn invalid_root(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        LindexError::InvalidRoot {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LindexError::FileRead {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for LindexError {
    fn from(err: serde_json::Error) -> Self {
        LindexError::Serialization(err.to_string())
    }
}
