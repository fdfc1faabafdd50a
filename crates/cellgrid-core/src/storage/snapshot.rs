//! Snapshot persistence.
//!
//! A snapshot is the whole store as a JSON object of identifier -> value:
//!
//! ```json
//! {"A1": 10, "B2": "hello"}
//! ```
//!
//! The document saves after every mutation and loads once at startup.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use cellgrid_engine::engine::Snapshot;

use crate::error::Result;

/// Durable home for document snapshots.
pub trait SnapshotStore {
    /// Last saved snapshot, or an empty one if nothing was ever saved.
    fn load(&mut self) -> Result<Snapshot>;

    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}

/// Snapshot stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&mut self) -> Result<Snapshot> {
        if !self.path.exists() {
            log::debug!("No snapshot at {}, starting empty", self.path.display());
            return Ok(Snapshot::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Snapshot::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(snapshot)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    snapshot: Snapshot,
    saves: usize,
}

/// In-process snapshot storage.
///
/// Clones share the same slot, so a test can hand one clone to a document
/// and inspect what it saved through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, as if it had been saved earlier.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().snapshot = snapshot;
        store
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.borrow().snapshot.clone()
    }

    /// Number of times `save` has been called.
    pub fn saves(&self) -> usize {
        self.inner.borrow().saves
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&mut self) -> Result<Snapshot> {
        Ok(self.snapshot())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.snapshot = snapshot.clone();
        inner.saves += 1;
        Ok(())
    }
}
