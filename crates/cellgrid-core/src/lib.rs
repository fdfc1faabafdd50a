//! cellgrid-core - UI-agnostic document model + storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{DisplaySink, Document, EditOutcome};
pub use error::{GridError, Result};
pub use storage::{JsonFileStore, MemoryStore, SnapshotStore};

pub use cellgrid_engine::engine::{CellRef, CellValue};
