//! Durable snapshot of an [`InvertedIndex`].
//!
//! The snapshot is a single JSON document:
//!
//! ```text
//! {
//!   "root": "/abs/path/of/build/root",
//!   "words": { "word": { "rel/file.txt": [1, 3] } }
//! }
//! ```
//!
//! Every save replaces the file wholesale; there is no versioning and no
//! partial update.

use crate::error::{LindexError, Result};
use crate::index::types::InvertedIndex;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name used when no location is configured
pub const DEFAULT_INDEX_FILE: &str = "search_index.json";

pub struct IndexStore {
    path: PathBuf,
}

impl Default for IndexStore {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_FILE)
    }
}

impl IndexStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `index`, replacing any previous snapshot
    pub fn save(&self, index: &InvertedIndex) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, index)?;
        writer.flush()?;

        info!(path = %self.path.display(), words = index.len(), "index saved");
        Ok(())
    }

    /// Load the snapshot. `Ok(None)` means no index has been built yet.
    pub fn load(&self) -> Result<Option<InvertedIndex>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no index file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let index: InvertedIndex = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            LindexError::IndexCorrupted {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        if let Some((word, file)) = index.first_invalid_posting() {
            return Err(LindexError::IndexCorrupted {
                path: self.path.clone(),
                reason: format!(
                    "lines for {:?} in {:?} are not strictly increasing from 1",
                    word, file
                ),
            });
        }

        debug!(path = %self.path.display(), words = index.len(), "index loaded");
        Ok(Some(index))
    }

    /// Delete the snapshot. Returns whether a file was removed.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "index removed");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
