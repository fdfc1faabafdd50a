//! Spreadsheet engine API.
//!
//! This module provides the core computation engine for the spreadsheet:
//!
//! - [`CellValue`] - Typed cell content and the literal classification rule
//! - [`CellRef`] - Cell identifier parsing (A1 notation ↔ row/col indices)
//! - [`CellStore`] - Owned, sparse mapping of cells to values
//! - [`resolve_range`], [`resolve_single`] - Argument resolution
//! - [`parse_formula`] - Formula grammar
//! - [`evaluate`] - Compute a formula's result against a store
//! - [`format_number`] - Format numbers for display

mod cell;
mod cell_ref;
mod error;
mod eval;
mod format;
mod parser;
mod range;
mod store;

pub use cell::{CellValue, parse_number};
pub use cell_ref::{COLUMNS, CellRef};
pub use error::FormulaError;
pub use eval::{evaluate, evaluate_call};
pub use format::format_number;
pub use parser::{FormulaCall, Function, parse_formula};
pub use range::{ColumnRange, range_refs, resolve_range, resolve_single};
pub use store::{CellStore, Snapshot};
