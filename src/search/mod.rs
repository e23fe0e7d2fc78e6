//! Filesystem search across the standard user directories.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Maximum number of matches accumulated by one search
pub const MAX_RESULTS: usize = 10;

/// Searches a fixed set of root directories for files whose base name
/// contains a substring, case-insensitively.
///
/// The search never errors: nonexistent roots and unreadable entries are
/// skipped silently. Results come back in discovery order across the roots
/// and never exceed the cap.
#[derive(Debug, Clone)]
pub struct FileLocator {
    roots: Vec<PathBuf>,
    cap: usize,
}

impl FileLocator {
    /// Create a locator over the given root directories
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            cap: MAX_RESULTS,
        }
    }

    /// Standard roots: Downloads, Documents and Desktop under the given
    /// home directory, plus the process working directory.
    pub fn with_default_roots(home: &Path) -> Self {
        let mut roots = vec![
            home.join("Downloads"),
            home.join("Documents"),
            home.join("Desktop"),
        ];
        if let Ok(cwd) = std::env::current_dir() {
            roots.push(cwd);
        }
        Self::new(roots)
    }

    /// Override the result cap
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    /// The roots this locator searches, in search order
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Collect files whose base name contains `pattern` (case-insensitive),
    /// walking each root depth-first. Stops as soon as the cap is reached.
    pub fn search(&self, pattern: &str) -> Vec<PathBuf> {
        let needle = pattern.to_lowercase();
        let mut results = Vec::new();

        'roots: for root in &self.roots {
            if !root.is_dir() {
                continue;
            }
            for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
                if !entry.file_type().is_file() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy().to_lowercase();
                if name.contains(&needle) {
                    results.push(entry.into_path());
                    if results.len() >= self.cap {
                        break 'roots;
                    }
                }
            }
        }

        debug!(pattern = %pattern, count = results.len(), "file search complete");
        results
    }
}
