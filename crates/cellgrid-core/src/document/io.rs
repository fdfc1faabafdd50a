use super::Document;
use crate::error::Result;
use crate::storage::{parse_table, write_table};
use std::path::Path;

impl Document {
    /// Import CSV text, overwriting the cells it names.
    ///
    /// Values are stored as literals; formula-looking text such as
    /// `=SUM(A1:A3)` stays text and is never evaluated. Cells the file does
    /// not reach keep their values. Returns the number of fields assigned.
    pub fn import_csv_str(&mut self, content: &str) -> Result<usize> {
        let cells = parse_table(content);
        let count = cells.len();
        for (cell_ref, value) in cells {
            self.store.set(cell_ref, value.clone());
            self.notify(cell_ref, &value);
        }
        self.persist()?;
        log::info!("Imported {count} fields");
        Ok(count)
    }

    /// Import a CSV file.
    pub fn import_csv(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        self.import_csv_str(&content)
    }

    /// Render the grid as CSV text.
    pub fn export_csv_string(&self) -> String {
        write_table(&self.store, self.rows)
    }

    /// Export the grid to a CSV file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.export_csv_string())?;
        log::info!("Exported {} cells to {}", self.store.len(), path.display());
        Ok(())
    }
}
