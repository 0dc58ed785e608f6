use crate::error::{LindexError, Result};
use ignore::{DirEntry, Walk, WalkBuilder};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Directory names never descended into
pub const IGNORED_DIRS: &[&str] = &[
    "venv",
    "node_modules",
    ".git",
    "__pycache__",
    ".idea",
    ".vscode",
    "dist",
    "build",
    ".gemini",
];

/// File name suffixes treated as indexable text, matched case-insensitively
pub const TEXT_EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".py", ".js", ".html", ".css", ".json", ".yml", ".yaml", ".sh", ".c", ".cpp",
    ".h", ".java", ".rs", ".go", ".ts",
];

pub fn is_text_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    TEXT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

pub fn is_ignored_dir(dir_name: &str) -> bool {
    IGNORED_DIRS.contains(&dir_name)
}

/// Lazy walk over the indexable files below a root directory.
///
/// Ignored directories are pruned before they are entered. Entries that
/// cannot be read are skipped. Each scanner performs one traversal; create a
/// new one to walk again.
pub struct FileScanner {
    walk: Walk,
}

impl FileScanner {
    pub fn new(root: &Path) -> Self {
        let walk = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(keep_entry)
            .build();
        Self { walk }
    }
}

fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    !(is_dir && is_ignored_dir(&entry.file_name().to_string_lossy()))
}

impl Iterator for FileScanner {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            // Symlinked files count, symlinked directories are not followed
            if entry.depth() == 0 || !entry.path().is_file() {
                continue;
            }
            if is_text_file(&entry.file_name().to_string_lossy()) {
                return Some(entry.into_path());
            }
        }
    }
}

/// Count indexable files below `root` with a separate traversal
pub fn count_files(root: &Path) -> usize {
    FileScanner::new(root).count()
}

/// Key under which `path` is stored in the index: relative to `root`,
/// components joined with `/`.
///
/// Fails with [`LindexError::NonUtf8Path`] when a component cannot be stored
/// as a string without losing the way back to the file.
pub fn file_key(root: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(root).map_err(|_| {
        LindexError::invalid_root(root, format!("{} is outside the root", path.display()))
    })?;

    let mut parts = Vec::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| LindexError::NonUtf8Path {
                path: path.to_path_buf(),
            })?;
            parts.push(part);
        }
    }
    if parts.is_empty() {
        return Err(LindexError::invalid_root(root, "the root itself has no file key"));
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    fn scan_keys(root: &Path) -> Vec<String> {
        let mut keys: Vec<_> = FileScanner::new(root)
            .filter_map(|p| file_key(root, &p).ok())
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_is_text_file() {
        assert!(is_text_file("main.rs"));
        assert!(is_text_file("README.MD"));
        assert!(is_text_file("archive.tar.txt"));
        assert!(is_text_file(".json"));
        assert!(!is_text_file("image.png"));
        assert!(!is_text_file("Makefile"));
        assert!(!is_text_file("rs"));
    }

    #[test]
    fn test_scan_filters_extensions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.txt");
        touch(dir.path(), "b.PY");
        touch(dir.path(), "c.bin");
        touch(dir.path(), "nested/deeper/d.go");

        assert_eq!(scan_keys(dir.path()), vec!["a.txt", "b.PY", "nested/deeper/d.go"]);
    }

    #[test]
    fn test_scan_prunes_ignored_dirs() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/main.py");
        touch(dir.path(), "node_modules/lib.js");
        touch(dir.path(), "src/.git/config.txt");
        touch(dir.path(), "deep/venv/lib/site.py");
        touch(dir.path(), "builder/ok.md");

        assert_eq!(scan_keys(dir.path()), vec!["builder/ok.md", "src/main.py"]);
    }

    #[test]
    fn test_ignored_name_as_root_is_still_walked() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("build");
        touch(&root, "out.txt");

        assert_eq!(scan_keys(&root), vec!["out.txt"]);
    }

    #[test]
    fn test_count_files_matches_scan() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "one.txt");
        touch(dir.path(), "two.md");
        touch(dir.path(), "dist/three.js");

        assert_eq!(count_files(dir.path()), 2);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert_eq!(FileScanner::new(&dir.path().join("gone")).count(), 0);
    }

    #[test]
    fn test_file_key() {
        let root = Path::new("/repo");
        assert_eq!(
            file_key(root, Path::new("/repo/src/main.py")).unwrap(),
            "src/main.py"
        );
        assert!(file_key(root, Path::new("/elsewhere/a.txt")).is_err());
        assert!(file_key(root, root).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_key_rejects_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = Path::new("/repo");
        let path = Path::new(OsStr::from_bytes(b"/repo/caf\xff.txt"));

        let err = file_key(root, path).unwrap_err();
        assert!(matches!(err, LindexError::NonUtf8Path { .. }));
        assert!(err.is_per_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_dir_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.txt");
        touch(dir.path(), "locked/hidden.txt");
        touch(dir.path(), "z.txt");
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits; nothing to observe in that case
        let readable = fs::read_dir(&locked).is_ok();
        let keys = if readable { Vec::new() } else { scan_keys(dir.path()) };

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }
        assert_eq!(keys, vec!["a.txt", "z.txt"]);
    }
}
