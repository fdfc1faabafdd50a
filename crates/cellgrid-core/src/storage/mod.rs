//! Storage adapters: CSV tabular text and persisted snapshots.

mod csv;
mod snapshot;

pub use csv::{parse_table, write_table};
pub use snapshot::{JsonFileStore, MemoryStore, SnapshotStore};
