use tracing::{debug, warn};

use druglink_model::{DrugRow, DrugVocabulary};

use crate::normalize::normalize;

/// Build the drug vocabulary from raw drug sheet rows.
///
/// Canonical names and synonyms are normalized and blank synonyms dropped,
/// keeping column order. When two rows normalize to the same canonical name
/// the later row's synonyms replace the earlier ones. Rows whose name is
/// blank after normalization are skipped, since an empty name would match
/// every record.
pub fn build_vocabulary<'a, I>(rows: I) -> DrugVocabulary
where
    I: IntoIterator<Item = &'a DrugRow>,
{
    let mut vocabulary = DrugVocabulary::new();
    let mut skipped = 0usize;
    for row in rows {
        let canonical = normalize(&row.drug_name);
        if canonical.is_empty() {
            warn!(drug_id = %row.id, "skipping drug row with blank name");
            skipped += 1;
            continue;
        }
        let synonyms: Vec<String> = row
            .synonyms
            .iter()
            .map(String::as_str)
            .map(normalize)
            .filter(|synonym| !synonym.is_empty())
            .collect();
        if let Some(previous) = vocabulary.insert(canonical.clone(), synonyms) {
            warn!(
                drug = %canonical,
                drug_id = %row.id,
                replaced_synonyms = previous.len(),
                "duplicate drug name; later row replaces earlier synonyms"
            );
        }
    }
    debug!(
        drug_count = vocabulary.len(),
        synonym_count = vocabulary.synonym_count(),
        skipped,
        "built drug vocabulary"
    );
    vocabulary
}
