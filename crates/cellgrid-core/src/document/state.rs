use crate::error::Result;
use crate::storage::{MemoryStore, SnapshotStore};
use cellgrid_engine::engine::{CellRef, CellStore, CellValue};

/// Rows covered by a tabular export when the grid is smaller.
pub const DEFAULT_ROWS: usize = 100;

/// Receives computed results so a front end can show them without
/// re-deriving anything.
pub trait DisplaySink {
    fn show(&mut self, cell_ref: CellRef, text: &str);
}

impl<F> DisplaySink for F
where
    F: FnMut(CellRef, &str),
{
    fn show(&mut self, cell_ref: CellRef, text: &str) {
        self(cell_ref, text)
    }
}

/// UI-agnostic document state for the spreadsheet.
///
/// Owns the cell store; every mutation goes through the document so the
/// snapshot is written after each one.
pub struct Document {
    /// Canonical cell values
    pub(crate) store: CellStore,
    /// Where snapshots are saved after every mutation
    pub(crate) persistence: Box<dyn SnapshotStore>,
    /// Optional front end notified of computed values
    pub(crate) display: Option<Box<dyn DisplaySink>>,
    /// Minimum number of rows written by export
    pub rows: usize,
}

impl Document {
    /// Open a document from its persisted snapshot.
    pub fn open(persistence: impl SnapshotStore + 'static) -> Result<Self> {
        let mut persistence: Box<dyn SnapshotStore> = Box::new(persistence);
        let snapshot = persistence.load()?;
        let store = CellStore::from_snapshot(snapshot);
        log::debug!("Loaded {} cells from snapshot", store.len());

        Ok(Document {
            store,
            persistence,
            display: None,
            rows: DEFAULT_ROWS,
        })
    }

    /// Create an empty document backed by memory only.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Document {
            store: CellStore::new(),
            persistence: Box::new(MemoryStore::new()),
            display: None,
            rows: DEFAULT_ROWS,
        }
    }

    /// Attach a display sink, replacing any previous one.
    pub fn set_display(&mut self, sink: impl DisplaySink + 'static) {
        self.display = Some(Box::new(sink));
    }

    pub fn with_display(mut self, sink: impl DisplaySink + 'static) -> Self {
        self.set_display(sink);
        self
    }

    pub fn store(&self) -> &CellStore {
        &self.store
    }

    pub fn get(&self, cell_ref: &CellRef) -> CellValue {
        self.store.get(cell_ref)
    }

    /// Display text for a cell (empty for absent cells).
    pub fn get_cell_display(&self, cell_ref: &CellRef) -> String {
        self.store.get(cell_ref).to_display()
    }

    /// Write the current store through to the snapshot.
    pub(crate) fn persist(&mut self) -> Result<()> {
        self.persistence.save(&self.store.snapshot())
    }

    pub(crate) fn notify(&mut self, cell_ref: CellRef, value: &CellValue) {
        if let Some(sink) = self.display.as_mut() {
            sink.show(cell_ref, &value.to_display());
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
