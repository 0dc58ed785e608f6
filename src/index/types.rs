use crate::error::LindexError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};

/// 1-based line number within a file
pub type LineNumber = u32;

/// File key -> line numbers, the postings of a single word. Files keep the
/// order in which the build first recorded them for the word.
pub type FilePostings = IndexMap<String, Vec<LineNumber>>;

/// Word -> line numbers for one file. Built per file and merged into the
/// [`InvertedIndex`] once the file has been read completely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndex {
    words: HashMap<String, Vec<LineNumber>>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that each of `words` occurs on `line`. Lines must be recorded
    /// in increasing order.
    pub fn record_line(&mut self, line: LineNumber, words: HashSet<String>) {
        for word in words {
            let lines = self.words.entry(word).or_default();
            debug_assert!(lines.last().is_none_or(|&last| last < line));
            lines.push(line);
        }
    }

    pub fn lines(&self, word: &str) -> Option<&[LineNumber]> {
        self.words.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl IntoIterator for FileIndex {
    type Item = (String, Vec<LineNumber>);
    type IntoIter = std::collections::hash_map::IntoIter<String, Vec<LineNumber>>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Word -> file key -> line numbers for a whole tree.
///
/// File keys are paths relative to `root`, joined with `/`. Within each
/// (word, file) pair the line numbers are strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertedIndex {
    root: PathBuf,
    words: BTreeMap<String, FilePostings>,
}

impl InvertedIndex {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            words: BTreeMap::new(),
        }
    }

    /// Directory the index was built from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a file key back to a path that can be opened
    pub fn resolve(&self, file_key: &str) -> PathBuf {
        self.root.join(file_key)
    }

    /// Merge one file's words into the index. An existing entry for the same
    /// (word, file) pair is overwritten, never appended to.
    pub fn merge_file(&mut self, file_key: &str, file_index: FileIndex) {
        for (word, lines) in file_index {
            self.words
                .entry(word)
                .or_default()
                .insert(file_key.to_string(), lines);
        }
    }

    pub fn get(&self, word: &str) -> Option<&FilePostings> {
        self.words.get(word)
    }

    pub fn lines(&self, word: &str, file_key: &str) -> Option<&[LineNumber]> {
        self.words
            .get(word)
            .and_then(|files| files.get(file_key))
            .map(Vec::as_slice)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// First (word, file) pair whose line numbers are not strictly
    /// increasing from 1, if any
    pub fn first_invalid_posting(&self) -> Option<(&str, &str)> {
        self.words.iter().find_map(|(word, files)| {
            files
                .iter()
                .find(|(_, lines)| !is_valid_posting(lines))
                .map(|(file, _)| (word.as_str(), file.as_str()))
        })
    }

    /// Distinct file keys across all words, sorted
    pub fn files(&self) -> BTreeSet<&str> {
        self.words
            .values()
            .flat_map(|files| files.keys().map(String::as_str))
            .collect()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            words: self.words.len(),
            files: self.files().len(),
            postings: self
                .words
                .values()
                .flat_map(|files| files.values())
                .map(Vec::len)
                .sum(),
        }
    }
}

fn is_valid_posting(lines: &[LineNumber]) -> bool {
    lines.first().is_some_and(|&first| first >= 1) && lines.windows(2).all(|w| w[0] < w[1])
}

/// Size summary of an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub words: usize,
    pub files: usize,
    /// Total (word, file, line) occurrences
    pub postings: usize,
}

/// A file the builder gave up on
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: LindexError,
}

/// Output of a full build
#[derive(Debug)]
pub struct BuildReport {
    pub index: InvertedIndex,
    /// Files indexed successfully
    pub indexed: usize,
    pub skipped: Vec<SkippedFile>,
}

impl BuildReport {
    /// Files the builder tried to read, successful or not
    pub fn attempted(&self) -> usize {
        self.indexed + self.skipped.len()
    }
}
