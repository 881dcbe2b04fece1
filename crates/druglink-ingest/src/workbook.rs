//! Excel and OpenDocument worksheets read as positional rows.

use std::ffi::OsStr;
use std::iter;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::sheet::{SheetRow, ensure_exists, normalize_cell};

/// File extensions read as workbooks rather than CSV.
pub const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Read all non-blank rows of the first worksheet.
///
/// Lines are 1-based worksheet rows. Empty cells read as `""`, and rows are
/// padded on the left when the used range does not start at column A.
pub fn read_workbook_records(path: &Path) -> Result<Vec<SheetRow>> {
    ensure_exists(path)?;
    let mut workbook =
        open_workbook_auto(path).map_err(|error| IngestError::workbook(path, &error))?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        debug!(path = %path.display(), "workbook has no worksheet");
        return Ok(Vec::new());
    };
    let range = range.map_err(|error| IngestError::workbook(path, &error))?;
    let (first_row, first_col) = range.start().unwrap_or((0, 0));

    let mut rows = Vec::new();
    for (offset, cells) in range.rows().enumerate() {
        let row = SheetRow {
            line: u64::from(first_row) + offset as u64 + 1,
            cells: iter::repeat_n(String::new(), first_col as usize)
                .chain(cells.iter().map(cell_text))
                .collect(),
        };
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "read worksheet");
    Ok(rows)
}

/// Whole numbers print without a decimal point, so numeric PMIDs stay IDs.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => normalize_cell(value),
        Data::Float(value) => value.to_string(),
        other => normalize_cell(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workbook_extensions_ignore_case() {
        assert!(is_workbook(Path::new("literature.xlsx")));
        assert!(is_workbook(Path::new("drugs.XLSX")));
        assert!(is_workbook(Path::new("drugs.ods")));
        assert!(!is_workbook(Path::new("drugs.csv")));
        assert!(!is_workbook(Path::new("drugs")));
    }

    #[test]
    fn numeric_cells_read_as_plain_text() {
        assert_eq!(cell_text(&Data::Float(31587145.0)), "31587145");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Int(2019)), "2019");
        assert_eq!(cell_text(&Data::String(" Caffeine ".to_string())), "Caffeine");
        assert_eq!(cell_text(&Data::Empty), "");
    }
}
