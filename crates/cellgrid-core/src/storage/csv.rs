//! CSV tabular text.
//!
//! Layout (both directions):
//!
//! ```text
//! ,A,B,C,...,Z
//! 1,10,hello,,...
//! 2,,,,...
//! ```
//!
//! The first line is a header (blank corner + column letters) and the
//! first field of every other line is the row label. Import ignores both
//! and derives positions from line and field order.

use cellgrid_engine::engine::{COLUMNS, CellRef, CellStore, CellValue};

/// Render the store as CSV text covering at least `rows` rows.
///
/// Rows past `rows` are included when they hold data, so nothing in the
/// store is dropped.
pub fn write_table(store: &CellStore, rows: usize) -> String {
    let last_row = store
        .iter()
        .map(|(cell_ref, _)| cell_ref.row + 1)
        .max()
        .unwrap_or(0)
        .max(rows);

    let mut out = String::new();
    let header: Vec<String> = std::iter::once(String::new())
        .chain(CellRef::column_letters().map(String::from))
        .collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in 0..last_row {
        let mut fields = Vec::with_capacity(COLUMNS + 1);
        fields.push((row + 1).to_string());
        for col in 0..COLUMNS {
            let value = store.get(&CellRef::new(col, row));
            fields.push(escape_csv_field(&value.to_display()));
        }
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Parse CSV text into cell assignments, in file order.
///
/// Every field present on a data record yields an assignment, including
/// empty ones (which clear the cell). Fields past column `Z` are dropped.
/// Values are classified as literals; formula text is kept as text.
pub fn parse_table(content: &str) -> Vec<(CellRef, CellValue)> {
    let mut cells = Vec::new();

    for (row_idx, record) in parse_records(content).into_iter().skip(1).enumerate() {
        for (col_idx, field) in record.into_iter().skip(1).take(COLUMNS).enumerate() {
            let cell_ref = CellRef::new(col_idx, row_idx);
            cells.push((cell_ref, CellValue::from_input(&field)));
        }
    }

    cells
}

/// Split CSV text into records of fields.
///
/// A quoted field may span line breaks. Every line break outside quotes
/// ends a record, so a blank line is a record with one empty field. A
/// final line break does not start another record.
pub(crate) fn parse_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => current.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                quoted = true;
            }
            ',' => fields.push(finish_field(
                std::mem::take(&mut current),
                std::mem::take(&mut quoted),
            )),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(finish_field(
                    std::mem::take(&mut current),
                    std::mem::take(&mut quoted),
                ));
                records.push(std::mem::take(&mut fields));
            }
            _ => current.push(c),
        }
    }

    if quoted || !current.is_empty() || !fields.is_empty() {
        fields.push(finish_field(current, quoted));
        records.push(fields);
    }
    records
}

fn finish_field(field: String, quoted: bool) -> String {
    if quoted {
        field
    } else {
        field.trim().to_string()
    }
}

/// Escape a field for CSV output
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
