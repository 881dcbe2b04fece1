use std::path::Path;

use tracing::{info, warn};

use druglink_model::{DRUG_SHEET_FIXED_COLUMNS, DrugRow, LinkOptions};

use crate::error::{IngestError, Result};
use crate::sheet::read_sheet;

/// Load the drug sheet: id, drug name, then `options.num_synonyms` synonyms.
///
/// The sheet must be at least as wide as the requested synonym columns;
/// columns past them are ignored. Every non-blank row needs a drug name.
pub fn load_drug_rows(path: &Path, options: &LinkOptions) -> Result<Vec<DrugRow>> {
    let sheet = read_sheet(path)?;
    if sheet.headers.is_empty() {
        warn!(path = %path.display(), "drug sheet is empty");
        return Ok(Vec::new());
    }
    options
        .check_drug_columns(sheet.width())
        .map_err(|error| IngestError::from_link(path, sheet.header_line, error))?;

    let synonym_columns = DRUG_SHEET_FIXED_COLUMNS..options.required_drug_columns();
    let mut rows = Vec::with_capacity(sheet.rows.len());
    for row in &sheet.rows {
        let drug_name = row.cell(1);
        if drug_name.is_empty() {
            return Err(IngestError::format(path, row.line, "missing drug name"));
        }
        let synonyms = synonym_columns.clone().map(|idx| row.cell(idx));
        rows.push(DrugRow::new(row.cell(0), drug_name).with_synonyms(synonyms));
    }
    info!(
        path = %path.display(),
        drug_count = rows.len(),
        num_synonyms = options.num_synonyms,
        "loaded drug sheet"
    );
    Ok(rows)
}
