//! Property tests for matching, diffing and the row codec.

use proptest::prelude::*;

use druglink_core::{
    Difference, build_vocabulary, decode, decode_rows, diff, encode, match_drugs_to_literature,
};
use druglink_model::{DrugRow, LiteratureRecord, MatchMapping};

fn mapping_strategy() -> impl Strategy<Value = MatchMapping> {
    prop::collection::vec(
        (
            "[a-z][a-z0-9 -]{0,12}",
            prop::collection::vec("[0-9 ]{1,8}", 1..6),
        ),
        0..10,
    )
    .prop_map(|entries| entries.into_iter().collect::<MatchMapping>())
}

fn record_strategy() -> impl Strategy<Value = LiteratureRecord> {
    (
        "[0-9]{1,8}",
        "[A-Za-z ]{0,40}",
        "[A-Za-z ]{0,80}",
    )
        .prop_map(|(pmid, title, abstract_text)| {
            LiteratureRecord::new(pmid, "2020", title, abstract_text)
        })
}

fn drug_row_strategy() -> impl Strategy<Value = DrugRow> {
    (
        "[A-Za-z]{1,6}",
        prop::collection::vec("[A-Za-z]{0,5}", 0..3),
    )
        .prop_map(|(name, synonyms)| DrugRow::new("id", name).with_synonyms(synonyms))
}

proptest! {
    #[test]
    fn self_diff_is_empty(mapping in mapping_strategy()) {
        let result = mapping.difference(&mapping);
        prop_assert_eq!(result.len(), mapping.len());
        prop_assert!(result.is_unchanged());
    }

    #[test]
    fn diff_keys_follow_left(left in mapping_strategy(), right in mapping_strategy()) {
        let result = diff(&left, &right);
        prop_assert_eq!(result.keys().collect::<Vec<_>>(), left.keys().collect::<Vec<_>>());
        for (drug, pmids) in result.iter() {
            for pmid in pmids {
                prop_assert!(left.get(drug).contains(pmid));
                prop_assert!(!right.get(drug).contains(pmid));
            }
        }
    }

    #[test]
    fn encode_then_decode_round_trips(mapping in mapping_strategy()) {
        let rows = encode(&mapping);
        let raw: Vec<Vec<String>> = rows
            .iter()
            .map(|row| vec![row.drug.clone(), row.pmids.clone()])
            .collect();
        prop_assert_eq!(&decode(&raw).expect("decode rows"), &mapping);
        prop_assert_eq!(&decode_rows(rows), &mapping);
    }

    #[test]
    fn matching_is_deterministic(
        records in prop::collection::vec(record_strategy(), 0..12),
        rows in prop::collection::vec(drug_row_strategy(), 0..8),
    ) {
        let first = match_drugs_to_literature(&records, &build_vocabulary(&rows));
        let second = match_drugs_to_literature(&records, &build_vocabulary(&rows));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(encode(&first), encode(&second));
        prop_assert!(first.iter().all(|(_, pmids)| !pmids.is_empty()));
        prop_assert!(first.iter().all(|(_, pmids)| pmids.len() <= records.len()));
    }
}
