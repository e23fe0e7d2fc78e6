//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use voxfile::config::AliasTable;
use voxfile::dispatch::{ConfirmationGate, Dispatcher, Opener};
use voxfile::search::FileLocator;

/// Create a fake home directory with the standard subfolders
pub fn create_test_home() -> TempDir {
    let home = TempDir::new().expect("Failed to create temp home");
    for name in ["Downloads", "Documents", "Desktop"] {
        fs::create_dir(home.path().join(name)).expect("Failed to create subfolder");
    }
    home
}

/// Write a small file under `dir`
pub fn write_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"test contents").expect("Failed to write file");
    path
}

/// Opener that records paths instead of touching the desktop
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingOpener {
    pub fn new() -> (Self, Arc<Mutex<Vec<PathBuf>>>) {
        let opened = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                opened: Arc::clone(&opened),
            },
            opened,
        )
    }
}

impl Opener for RecordingOpener {
    fn open(&self, path: &Path) -> anyhow::Result<()> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// Opener that always fails
pub struct FailingOpener;

impl Opener for FailingOpener {
    fn open(&self, _path: &Path) -> anyhow::Result<()> {
        anyhow::bail!("no desktop available")
    }
}

/// Gate with a fixed answer that counts how often it was consulted
pub struct CountingGate {
    answer: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingGate {
    pub fn new(answer: bool) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                answer,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl ConfirmationGate for CountingGate {
    fn confirm(&self, _prompt: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// Build a dispatcher over the fake home: aliases and search roots both
/// resolve under `home`.
pub fn test_dispatcher(
    home: &Path,
    opener: Box<dyn Opener>,
    gate: Box<dyn ConfirmationGate>,
) -> Dispatcher {
    let aliases = AliasTable::for_home(home);
    let locator = FileLocator::new(vec![
        home.join("Downloads"),
        home.join("Documents"),
        home.join("Desktop"),
    ]);
    Dispatcher::new(aliases, locator, opener, gate)
}
