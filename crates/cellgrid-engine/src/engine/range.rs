//! Reference resolution.
//!
//! Turns argument text into concrete cells and pulls their values out of a
//! [`CellStore`]. Ranges are single-column: `B2:X5` means `B2..=B5`, the end
//! column is ignored. Malformed ranges resolve to nothing rather than
//! failing.

use super::cell::CellValue;
use super::cell_ref::CellRef;
use super::store::CellStore;

/// A column span `col, start_row..=end_row` (0-indexed rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnRange {
    pub col: usize,
    pub start_row: usize,
    pub end_row: usize,
}

impl ColumnRange {
    /// Parse `Start:End`. Requires exactly one `:` and two valid
    /// identifiers. A reversed range parses but is empty.
    pub fn parse(text: &str) -> Option<ColumnRange> {
        let (start, end) = text.split_once(':')?;
        if end.contains(':') {
            return None;
        }
        let start = CellRef::parse(start)?;
        let end = CellRef::parse(end)?;
        Some(ColumnRange {
            col: start.col,
            start_row: start.row,
            end_row: end.row,
        })
    }

    /// Cells in ascending row order.
    pub fn cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        (self.start_row..=self.end_row).map(move |row| CellRef::new(self.col, row))
    }
}

/// Ordered identifiers a range denotes; empty for malformed input.
pub fn range_refs(range: &str) -> Vec<CellRef> {
    ColumnRange::parse(range)
        .map(|r| r.cells().collect())
        .unwrap_or_default()
}

/// Numeric values of the present cells in a range.
///
/// Absent cells are skipped; present text that is not numeric counts as 0.
pub fn resolve_range(store: &CellStore, range: &str) -> Vec<f64> {
    range_refs(range)
        .iter()
        .filter_map(|cell_ref| store.lookup(cell_ref))
        .map(CellValue::to_number)
        .collect()
}

/// Text of a single cell; `""` if absent or not a cell identifier.
pub fn resolve_single(store: &CellStore, cell: &str) -> String {
    CellRef::parse(cell)
        .map(|cell_ref| store.get(&cell_ref).to_display())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_with(cells: &[(&str, CellValue)]) -> CellStore {
        let mut store = CellStore::new();
        for (name, value) in cells {
            store.set(CellRef::parse(name).unwrap(), value.clone());
        }
        store
    }

    #[test]
    fn test_range_refs_order_and_fixed_column() {
        let names: Vec<String> = range_refs("B2:B5").iter().map(|r| r.to_string()).collect();
        assert_eq!(names, vec!["B2", "B3", "B4", "B5"]);

        let names: Vec<String> = range_refs("B2:X5").iter().map(|r| r.to_string()).collect();
        assert_eq!(names, vec!["B2", "B3", "B4", "B5"]);
    }

    #[test]
    fn test_range_refs_malformed() {
        assert!(range_refs("A1").is_empty());
        assert!(range_refs("A1:A2:A3").is_empty());
        assert!(range_refs("A1:").is_empty());
        assert!(range_refs("(A1:A3").is_empty());
        assert!(range_refs("A5:A2").is_empty());
    }

    #[test]
    fn test_range_refs_single_row() {
        assert_eq!(range_refs("C3:C3"), vec![CellRef::new(2, 2)]);
    }

    #[test]
    fn test_resolve_range_skips_absent_keeps_text() {
        let store = store_with(&[
            ("A1", CellValue::Number(1.0)),
            ("A3", CellValue::text("x")),
            ("A4", CellValue::text("4")),
        ]);
        assert_eq!(resolve_range(&store, "A1:A4"), vec![1.0, 0.0, 4.0]);
    }

    #[test]
    fn test_resolve_range_follows_start_column_in_row_order() {
        let store = store_with(&[
            ("B5", CellValue::Number(3.0)),
            ("B2", CellValue::Number(1.0)),
            ("B3", CellValue::text("text")),
            ("C3", CellValue::Number(50.0)),
            ("X4", CellValue::Number(70.0)),
        ]);
        assert_eq!(resolve_range(&store, "B2:X5"), vec![1.0, 0.0, 3.0]);
        assert!(resolve_range(&store, "B5:B2").is_empty());
    }

    #[test]
    fn test_resolve_range_ignores_rows_outside() {
        let store = store_with(&[
            ("A1", CellValue::Number(1.0)),
            ("A2", CellValue::Number(2.0)),
            ("A3", CellValue::Number(3.0)),
        ]);
        assert_eq!(resolve_range(&store, "A2:A2"), vec![2.0]);
        assert!(resolve_range(&store, "A1").is_empty());
    }

    #[test]
    fn test_resolve_single() {
        let store = store_with(&[("A1", CellValue::text("abc")), ("B1", CellValue::Number(7.0))]);
        assert_eq!(resolve_single(&store, "A1"), "abc");
        assert_eq!(resolve_single(&store, "B1"), "7");
        assert_eq!(resolve_single(&store, "C1"), "");
        assert_eq!(resolve_single(&store, "A1:A2"), "");
    }
}
