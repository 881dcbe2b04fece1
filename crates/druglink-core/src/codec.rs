//! Conversion between mappings and the flat two-column row form.
//!
//! A row holds the drug name and its PMIDs joined with commas. Drugs without
//! PMIDs are never written.

use druglink_model::{DiffMapping, LinkError, MappingRow, MatchMapping, Result};

/// Separator between PMIDs inside the second column.
pub const PMID_SEPARATOR: char = ',';

/// Fields expected in every persisted mapping row.
pub const MAPPING_ROW_FIELDS: usize = 2;

fn join_pmids<'a, I>(pmids: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let mut joined = String::new();
    for (pos, pmid) in pmids.into_iter().enumerate() {
        if pos > 0 {
            joined.push(PMID_SEPARATOR);
        }
        joined.push_str(pmid);
    }
    joined
}

/// Split a joined PMID list on commas, dropping empty tokens. PMIDs are
/// opaque, so tokens are kept byte for byte.
pub fn split_pmids(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(PMID_SEPARATOR)
        .filter(|pmid| !pmid.is_empty())
}

/// Rows for every drug with at least one PMID, in mapping order.
pub fn encode(mapping: &MatchMapping) -> Vec<MappingRow> {
    mapping
        .iter()
        .filter(|(_, pmids)| !pmids.is_empty())
        .map(|(drug, pmids)| MappingRow::new(drug, join_pmids(pmids)))
        .collect()
}

/// Rows for every drug with a non-empty difference, in mapping order.
pub fn encode_diff(diff: &DiffMapping) -> Vec<MappingRow> {
    diff.iter()
        .filter(|(_, pmids)| !pmids.is_empty())
        .map(|(drug, pmids)| MappingRow::new(drug, join_pmids(pmids)))
        .collect()
}

/// Rebuild a mapping from raw rows of fields.
///
/// Each row must hold exactly a drug name and a PMID list. A drug that
/// appears on several rows accumulates the PMIDs of all of them. Row numbers
/// in errors are 1-based.
pub fn decode<I, R>(rows: I) -> Result<MatchMapping>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let mut mapping = MatchMapping::new();
    for (idx, row) in rows.into_iter().enumerate() {
        let row_number = idx + 1;
        let fields = row.as_ref();
        let [drug, pmids] = fields else {
            return Err(LinkError::format(
                row_number,
                format!(
                    "expected {MAPPING_ROW_FIELDS} fields (drug, pmids), found {}",
                    fields.len()
                ),
            ));
        };
        if drug.trim().is_empty() {
            return Err(LinkError::format(row_number, "missing drug name"));
        }
        mapping.extend(drug, split_pmids(pmids));
    }
    Ok(mapping)
}

/// Rebuild a mapping from structured rows; repeated drugs accumulate.
pub fn decode_rows<I>(rows: I) -> MatchMapping
where
    I: IntoIterator<Item = MappingRow>,
{
    let mut mapping = MatchMapping::new();
    for row in rows {
        mapping.extend(&row.drug, split_pmids(&row.pmids));
    }
    mapping
}
