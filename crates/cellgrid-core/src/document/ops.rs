use super::Document;
use crate::error::{GridError, Result};
use cellgrid_engine::engine::{CellRef, CellValue, FormulaError, evaluate};

/// What an edit did to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// A literal was stored (possibly `Empty`, which clears the cell).
    Stored(CellValue),
    /// A formula was evaluated and its result stored.
    Computed(CellValue),
    /// The formula produced nothing; the cell kept its previous value.
    Ignored(FormulaError),
}

impl Document {
    /// Handle an edit event: `raw` as typed into `cell`.
    ///
    /// Input starting with `=` is evaluated and the result stored; anything
    /// else is classified as a literal. Formula problems never fail the
    /// edit, they come back as [`EditOutcome::Ignored`].
    pub fn apply_edit(&mut self, cell: &str, raw: &str) -> Result<EditOutcome> {
        let cell_ref =
            CellRef::parse(cell).ok_or_else(|| GridError::InvalidCellRef(cell.to_string()))?;
        self.set_cell_from_input(cell_ref, raw)
    }

    /// Set cell contents from input string.
    pub fn set_cell_from_input(&mut self, cell_ref: CellRef, input: &str) -> Result<EditOutcome> {
        let trimmed = input.trim();
        if trimmed.starts_with('=') {
            return self.commit_formula(cell_ref, trimmed);
        }

        let value = CellValue::from_input(trimmed);
        self.set_cell(cell_ref, value.clone())?;
        Ok(EditOutcome::Stored(value))
    }

    /// Overwrite a cell with a value and persist.
    pub fn set_cell(&mut self, cell_ref: CellRef, value: CellValue) -> Result<()> {
        self.store.set(cell_ref, value);
        self.persist()
    }

    /// Clear the specified cell
    pub fn clear_cell(&mut self, cell_ref: CellRef) -> Result<()> {
        self.set_cell(cell_ref, CellValue::Empty)
    }

    /// Evaluate a formula against the current cells without storing it.
    pub fn evaluate(&self, formula: &str) -> Result<CellValue> {
        Ok(evaluate(&self.store, formula)?)
    }

    fn commit_formula(&mut self, cell_ref: CellRef, formula: &str) -> Result<EditOutcome> {
        let value = match evaluate(&self.store, formula) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("{cell_ref}: formula {formula:?} ignored: {err}");
                return Ok(EditOutcome::Ignored(err));
            }
        };

        self.store.set(cell_ref, value.clone());
        self.notify(cell_ref, &value);
        self.persist()?;
        Ok(EditOutcome::Computed(value))
    }
}
