//! Persisted drug → PMID mapping files.
//!
//! A mapping file has no header and one row per drug with at least one PMID:
//! `drug,"pmid1,pmid2"`. The PMID list is a single CSV field, quoted whenever
//! it holds more than one PMID.

use std::path::Path;

use csv::WriterBuilder;
use tracing::{debug, info};

use druglink_core::{decode, encode, encode_diff};
use druglink_model::{DiffMapping, LinkError, MappingRow, MatchMapping};

use crate::error::{IngestError, Result};
use crate::sheet::read_records;

/// Load a mapping file written by a previous run.
pub fn read_mapping(path: &Path) -> Result<MatchMapping> {
    let records = read_records(path)?;
    let lines: Vec<u64> = records.iter().map(|row| row.line).collect();
    let mapping = decode(records.iter().map(|row| row.cells.as_slice())).map_err(|error| {
        let line = match &error {
            LinkError::Format { row, .. } => lines.get(row.saturating_sub(1)).copied().unwrap_or(0),
            LinkError::Configuration { .. } => 0,
        };
        IngestError::from_link(path, line, error)
    })?;
    info!(
        path = %path.display(),
        drug_count = mapping.len(),
        link_count = mapping.link_count(),
        "loaded mapping file"
    );
    Ok(mapping)
}

/// Render rows as mapping file bytes.
pub fn render_rows(rows: &[MappingRow]) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))
}

/// A mapping file rendered in memory, ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedMapping {
    pub row_count: usize,
    pub bytes: Vec<u8>,
}

impl RenderedMapping {
    pub fn from_mapping(mapping: &MatchMapping) -> Result<Self> {
        Self::from_rows(&encode(mapping))
    }

    pub fn from_diff(diff: &DiffMapping) -> Result<Self> {
        Self::from_rows(&encode_diff(diff))
    }

    fn from_rows(rows: &[MappingRow]) -> Result<Self> {
        let bytes = render_rows(rows).map_err(|error| IngestError::Render {
            message: error.to_string(),
        })?;
        Ok(Self {
            row_count: rows.len(),
            bytes,
        })
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes).map_err(|source| IngestError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), rows = self.row_count, "wrote mapping file");
        Ok(())
    }
}

/// Encode `mapping` and write it to `path`, skipping drugs without PMIDs.
pub fn write_mapping(path: &Path, mapping: &MatchMapping) -> Result<usize> {
    let rendered = RenderedMapping::from_mapping(mapping)?;
    rendered.write_to(path)?;
    Ok(rendered.row_count)
}

/// Encode `diff` and write it to `path`, skipping drugs with no difference.
pub fn write_diff(path: &Path, diff: &DiffMapping) -> Result<usize> {
    let rendered = RenderedMapping::from_diff(diff)?;
    rendered.write_to(path)?;
    Ok(rendered.row_count)
}
