use std::path::Path;

use tracing::{info, warn};

use druglink_model::LiteratureRecord;

use crate::error::{IngestError, Result};
use crate::sheet::read_sheet;

/// Positional columns of the literature sheet.
pub const LITERATURE_COLUMNS: [&str; 4] = ["pmid", "year", "title", "abstract"];

/// Load the literature sheet: pmid, year, title, abstract.
///
/// The header row is skipped, extra columns are ignored and missing cells
/// become empty strings. Every non-blank row needs a PMID.
pub fn load_literature(path: &Path) -> Result<Vec<LiteratureRecord>> {
    let sheet = read_sheet(path)?;
    if sheet.headers.is_empty() {
        warn!(path = %path.display(), "literature sheet is empty");
        return Ok(Vec::new());
    }
    if sheet.width() < LITERATURE_COLUMNS.len() {
        return Err(IngestError::format(
            path,
            sheet.header_line,
            format!(
                "literature sheet needs {} columns ({}), header has {}",
                LITERATURE_COLUMNS.len(),
                LITERATURE_COLUMNS.join(", "),
                sheet.width()
            ),
        ));
    }

    let mut records = Vec::with_capacity(sheet.rows.len());
    for row in &sheet.rows {
        let pmid = row.cell(0);
        if pmid.is_empty() {
            return Err(IngestError::format(path, row.line, "missing PMID"));
        }
        records.push(LiteratureRecord::new(
            pmid,
            row.cell(1),
            row.cell(2),
            row.cell(3),
        ));
    }
    info!(
        path = %path.display(),
        record_count = records.len(),
        "loaded literature sheet"
    );
    Ok(records)
}
