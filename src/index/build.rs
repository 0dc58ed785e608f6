use crate::error::{LindexError, Result};
use crate::index::scan::{FileScanner, count_files, file_key};
use crate::index::types::{BuildReport, FileIndex, InvertedIndex, LineNumber, SkippedFile};
use crate::utils::progress::Progress;
use crate::utils::{read_text, split_lines, tokenize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Build a word -> line index for every line of `text`
pub fn index_text(text: &str) -> FileIndex {
    let mut file_index = FileIndex::new();
    for (i, line) in split_lines(text).enumerate() {
        file_index.record_line(i as LineNumber + 1, tokenize(line));
    }
    file_index
}

/// Read and index a single file
pub fn index_file(path: &Path) -> Result<FileIndex> {
    let text = read_text(path)?;
    Ok(index_text(&text))
}

/// Builds a fresh [`InvertedIndex`] from a directory tree.
///
/// ```no_run
/// use lindex::index::build::IndexBuilder;
/// use std::path::Path;
///
/// let report = IndexBuilder::new(Path::new(".")).build().unwrap();
/// println!("{} files, {} words", report.indexed, report.index.len());
/// ```
pub struct IndexBuilder {
    root: PathBuf,
    silent: bool,
}

impl IndexBuilder {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            silent: true,
        }
    }

    /// Show a spinner and progress bar on stderr while building
    pub fn with_progress(mut self, show: bool) -> Self {
        self.silent = !show;
        self
    }

    pub fn build(&self) -> Result<BuildReport> {
        if !self.root.is_dir() {
            return Err(LindexError::invalid_root(&self.root, "not a directory"));
        }
        let root = self.root.canonicalize()?;
        if root.to_str().is_none() {
            return Err(LindexError::invalid_root(root, "path is not valid UTF-8"));
        }
        info!(root = %root.display(), "building index");

        let progress = self.start_progress(&root);

        let mut index = InvertedIndex::new(&root);
        let mut indexed = 0;
        let mut skipped = Vec::new();

        for path in FileScanner::new(&root) {
            let outcome = file_key(&root, &path)
                .and_then(|key| index_file(&path).map(|file_index| (key, file_index)));

            match outcome {
                Ok((key, file_index)) => {
                    index.merge_file(&key, file_index);
                    indexed += 1;
                }
                Err(error) if error.is_per_file() => {
                    warn!(path = %path.display(), %error, "skipping file");
                    skipped.push(SkippedFile { path, error });
                }
                Err(error) => return Err(error),
            }
            progress.inc();
        }

        progress.finish(format!("Indexed {} files", indexed));
        info!(
            files = indexed,
            skipped = skipped.len(),
            words = index.len(),
            "index built"
        );

        Ok(BuildReport {
            index,
            indexed,
            skipped,
        })
    }

    /// Silent builds skip the counting pass entirely
    fn start_progress(&self, root: &Path) -> Progress {
        if self.silent {
            return Progress::hidden();
        }
        let spinner = Progress::spinner("Counting files...");
        let total = count_files(root);
        spinner.finish(format!("Found {} files", total));
        Progress::bar(total as u64, "Indexing...")
    }
}

/// Build an index over `root` without progress output
pub fn build_index(root: &Path) -> Result<BuildReport> {
    IndexBuilder::new(root).build()
}
