//! Positional CSV sheets.
//!
//! Literature and drug sheets are read by column position, not by header
//! name, from CSV files or workbooks. The first non-blank row is the header and is only used to learn the
//! sheet width.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::workbook::{is_workbook, read_workbook_records};

#[derive(Debug, Clone, Default)]
pub struct CsvSheet {
    pub headers: Vec<String>,
    /// Line of the header row; 0 for an empty sheet.
    pub header_line: u64,
    pub rows: Vec<SheetRow>,
}

impl CsvSheet {
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based line in the source file.
    pub line: u64,
    pub cells: Vec<String>,
}

impl SheetRow {
    /// Cell at `idx`, or an empty string past the end of a short row.
    pub fn cell(&self, idx: usize) -> &str {
        self.cells.get(idx).map_or("", String::as_str)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Fail early when a required input file does not exist.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::MissingFile {
            path: path.to_path_buf(),
        })
    }
}

/// Read all non-blank records of a CSV file; no header handling.
pub fn read_records(path: &Path) -> Result<Vec<SheetRow>> {
    ensure_exists(path)?;
    let file = File::open(path).map_err(|source| IngestError::io(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::csv(path, &error))?;
        let line = record.position().map_or(0, csv::Position::line);
        let row = SheetRow {
            line,
            cells: record.iter().map(normalize_cell).collect(),
        };
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Read a sheet whose first non-blank row is a header.
///
/// Workbooks (by extension) are read from their first worksheet, anything
/// else as CSV.
pub fn read_sheet(path: &Path) -> Result<CsvSheet> {
    let records = if is_workbook(path) {
        read_workbook_records(path)?
    } else {
        read_records(path)?
    };
    let mut rows = records.into_iter();
    let Some(header) = rows.next() else {
        return Ok(CsvSheet::default());
    };
    Ok(CsvSheet {
        headers: header.cells,
        header_line: header.line,
        rows: rows.collect(),
    })
}
