//! Sparse cell storage.
//!
//! [`CellStore`] owns the canonical state of the grid. Absent cells read as
//! [`CellValue::Empty`], and writing `Empty` removes the entry, so the two
//! are indistinguishable to callers.

use std::collections::BTreeMap;

use super::cell::CellValue;
use super::cell_ref::CellRef;

/// Serializable form of a store: identifier string -> value.
pub type Snapshot = BTreeMap<String, CellValue>;

/// Mapping from cell identifier to value, ordered row-major.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellStore {
    cells: BTreeMap<CellRef, CellValue>,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a cell; `Empty` if it was never written.
    pub fn get(&self, cell_ref: &CellRef) -> CellValue {
        self.cells.get(cell_ref).cloned().unwrap_or_default()
    }

    /// Borrow a cell's value; None if it was never written.
    pub fn lookup(&self, cell_ref: &CellRef) -> Option<&CellValue> {
        self.cells.get(cell_ref)
    }

    pub fn contains(&self, cell_ref: &CellRef) -> bool {
        self.cells.contains_key(cell_ref)
    }

    /// Overwrite a cell unconditionally.
    pub fn set(&mut self, cell_ref: CellRef, value: CellValue) {
        if value.is_empty() {
            self.cells.remove(&cell_ref);
        } else {
            self.cells.insert(cell_ref, value);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Present cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (&CellRef, &CellValue)> {
        self.cells.iter()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.cells
            .iter()
            .map(|(cell_ref, value)| (cell_ref.to_string(), value.clone()))
            .collect()
    }

    /// Build a store from a snapshot. Keys that are not cell identifiers
    /// are skipped.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut store = CellStore::new();
        for (key, value) in snapshot {
            match CellRef::parse(&key) {
                Some(cell_ref) => store.set(cell_ref, value),
                None => log::warn!("Skipping snapshot entry with invalid cell reference: {key}"),
            }
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn a1() -> CellRef {
        CellRef::new(0, 0)
    }

    #[test]
    fn test_get_unwritten_is_empty() {
        let store = CellStore::new();
        assert_eq!(store.get(&a1()), CellValue::Empty);
        assert_eq!(store.get(&CellRef::new(25, 999)), CellValue::Empty);
        assert!(!store.contains(&a1()));
        assert_eq!(store.lookup(&a1()), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = CellStore::new();
        for value in [
            CellValue::Number(1.0),
            CellValue::text("abc"),
            CellValue::Number(-0.5),
        ] {
            store.set(a1(), value.clone());
            assert_eq!(store.get(&a1()), value);
            assert_eq!(store.lookup(&a1()), Some(&value));
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_empty_clears_entry() {
        let mut store = CellStore::new();
        store.set(a1(), CellValue::Number(5.0));
        store.set(a1(), CellValue::Empty);
        assert!(store.is_empty());
        assert_eq!(store.get(&a1()), CellValue::Empty);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = CellStore::new();
        store.set(CellRef::new(0, 0), CellValue::Number(1.0));
        store.set(CellRef::new(1, 1), CellValue::text("x"));

        let snapshot = store.snapshot();
        assert_eq!(
            snapshot.keys().cloned().collect::<Vec<_>>(),
            vec!["A1".to_string(), "B2".to_string()]
        );
        assert_eq!(CellStore::from_snapshot(snapshot), store);
    }

    #[test]
    fn test_from_snapshot_skips_invalid_keys_and_nulls() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("A1".into(), CellValue::Number(2.0));
        snapshot.insert("not a cell".into(), CellValue::Number(3.0));
        snapshot.insert("B1".into(), CellValue::Empty);

        let store = CellStore::from_snapshot(snapshot);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&CellRef::new(0, 0)), CellValue::Number(2.0));
    }
}
