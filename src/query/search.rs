use crate::index::types::{FilePostings, InvertedIndex, LineNumber};
use crate::utils::normalize_query;

/// Hits for one term: file key -> line numbers, in index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    term: String,
    files: FilePostings,
}

impl SearchResult {
    /// The normalized term that was looked up
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of matching files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Total matching lines across all files
    pub fn total_lines(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn get(&self, file_key: &str) -> Option<&[LineNumber]> {
        self.files.get(file_key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LineNumber])> {
        self.files
            .iter()
            .map(|(file, lines)| (file.as_str(), lines.as_slice()))
    }

    pub fn into_files(self) -> FilePostings {
        self.files
    }
}

/// Look up a single term.
///
/// The term is trimmed and lowercased but not split on punctuation. An
/// unknown term gives an empty result.
pub fn search(index: &InvertedIndex, term: &str) -> SearchResult {
    let term = normalize_query(term);
    let files = index.get(&term).cloned().unwrap_or_default();
    SearchResult { term, files }
}
