//! Literature matching.
//!
//! Every record is tested against every drug: the drug's canonical name and
//! then each synonym, as substrings of the normalized title or abstract. The
//! first hit records the PMID under the canonical name and the scan moves on
//! to the next drug, so a record is counted at most once per drug.

use tracing::debug;

use druglink_model::{DrugVocabulary, LiteratureRecord, MatchMapping};

use crate::normalize::normalize;

/// Progress of a matching run, reported after each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchProgress {
    pub processed: usize,
    pub total: usize,
}

impl MatchProgress {
    pub fn is_done(&self) -> bool {
        self.processed >= self.total
    }
}

/// Normalized match triggers for one drug.
struct DrugNames<'a> {
    canonical: &'a str,
    names: Vec<String>,
}

fn prepare_names(vocabulary: &DrugVocabulary) -> Vec<DrugNames<'_>> {
    vocabulary
        .iter()
        .map(|entry| DrugNames {
            canonical: entry.canonical_name.as_str(),
            names: entry
                .names()
                .map(normalize)
                .filter(|name| !name.is_empty())
                .collect(),
        })
        .collect()
}

/// Map each vocabulary drug to the PMIDs of the records that mention it.
///
/// PMIDs keep record order. Drugs without any matching record are absent
/// from the result.
pub fn match_drugs_to_literature(
    records: &[LiteratureRecord],
    vocabulary: &DrugVocabulary,
) -> MatchMapping {
    match_drugs_to_literature_with_progress(records, vocabulary, |_| {})
}

/// Same as [`match_drugs_to_literature`], calling `on_progress` after each record.
pub fn match_drugs_to_literature_with_progress<F>(
    records: &[LiteratureRecord],
    vocabulary: &DrugVocabulary,
    mut on_progress: F,
) -> MatchMapping
where
    F: FnMut(MatchProgress),
{
    let drugs = prepare_names(vocabulary);
    let total = records.len();
    debug!(
        record_count = total,
        drug_count = drugs.len(),
        "matching literature against vocabulary"
    );

    let mut mapping = MatchMapping::new();
    for (idx, record) in records.iter().enumerate() {
        let title = normalize(&record.title);
        let abstract_text = normalize(&record.abstract_text);
        for drug in &drugs {
            let mentioned = drug
                .names
                .iter()
                .any(|name| title.contains(name.as_str()) || abstract_text.contains(name.as_str()));
            if mentioned {
                mapping.append(drug.canonical, record.pmid.as_str());
            }
        }
        on_progress(MatchProgress {
            processed: idx + 1,
            total,
        });
    }

    debug!(
        matched_drugs = mapping.len(),
        link_count = mapping.link_count(),
        "literature matching finished"
    );
    mapping
}
