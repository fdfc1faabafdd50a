//! Cell reference parsing and formatting.
//!
//! Converts between spreadsheet-style identifiers (`A1`, `B12`, `Z100`) and
//! zero-indexed column/row coordinates. The grid has exactly [`COLUMNS`]
//! single-letter columns; rows are unbounded positive integers.
//!
//! # Examples
//!
//! ```
//! use cellgrid_engine::engine::CellRef;
//!
//! let cell = CellRef::parse("B3").unwrap();
//! assert_eq!(cell.col, 1);  // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Number of columns in the grid (`A` through `Z`).
pub const COLUMNS: usize = 26;

fn cell_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<letter>[A-Za-z])(?<numbers>[0-9]+)$")
            .expect("cell reference regex must compile")
    })
}

/// A reference to a cell by column and row indices (0-indexed).
///
/// Ordering is row-major, which is also the order cells are listed and
/// exported in.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell identifier (e.g. "A1", "b12").
    /// Returns None for anything that is not one letter followed by a
    /// positive row number.
    pub fn parse(name: &str) -> Option<CellRef> {
        let caps = cell_ref_re().captures(name.trim())?;
        let letter = caps["letter"].as_bytes()[0].to_ascii_uppercase();
        let col = (letter - b'A') as usize;
        let row = caps["numbers"].parse::<usize>().ok()?.checked_sub(1)?;
        Some(CellRef::new(col, row))
    }

    /// Column letter for a column index (0 -> A, 25 -> Z).
    /// Returns None outside the grid.
    pub fn col_to_letter(col: usize) -> Option<char> {
        (col < COLUMNS).then(|| (b'A' + col as u8) as char)
    }

    /// All column letters in grid order.
    pub fn column_letters() -> impl Iterator<Item = char> {
        (b'A'..=b'Z').map(char::from)
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match CellRef::col_to_letter(self.col) {
            Some(letter) => write!(f, "{}{}", letter, self.row + 1),
            None => write!(f, "?{}", self.row + 1),
        }
    }
}
