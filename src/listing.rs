//! Directory listing - turns a directory tree into a candidate list
//!
//! # Examples
//!
//! ```no_run
//! use globlab::filter_by_glob;
//! use globlab::listing::DirLister;
//!
//! let names = DirLister::new(".").unwrap().list().unwrap();
//! let rust_files = filter_by_glob("*.rs", &names, 8);
//! ```

use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur while listing a directory
#[derive(Debug, Error)]
pub enum ListError {
    /// Root path does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The root itself could not be read
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Lists regular files below a root directory
#[derive(Debug, Clone)]
pub struct DirLister {
    /// Root directory to list from
    root: PathBuf,

    /// Maximum depth below the root (None = unlimited)
    max_depth: Option<usize>,
}

impl DirLister {
    /// Create a lister rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ListError> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(ListError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(ListError::NotADirectory(root));
        }

        Ok(Self {
            root,
            max_depth: None,
        })
    }

    /// Limit how deep the listing descends (1 = direct children only)
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List files as `/`-separated paths relative to the root, sorted
    ///
    /// Hidden entries (names starting with `.`) are skipped along with
    /// everything beneath them. Entries that cannot be read (broken links,
    /// link loops, unreadable directories) are logged and skipped.
    pub fn list(&self) -> Result<Vec<String>, ListError> {
        let root = &self.root;
        let mut walker = WalkDir::new(root).follow_links(true);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut names = Vec::new();
        for entry in walker.into_iter().filter_entry(|e| {
            // Don't filter the root directory itself
            if e.path() == root {
                return true;
            }
            !Self::is_hidden(e)
        }) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    continue;
                },
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);
            names.push(relative.to_string_lossy().replace('\\', "/"));
        }

        // Sort for deterministic output
        names.sort();
        debug!("listed {} file(s) under {}", names.len(), root.display());
        Ok(names)
    }

    /// Check if an entry is hidden (starts with .)
    fn is_hidden(entry: &walkdir::DirEntry) -> bool {
        entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
    }
}
