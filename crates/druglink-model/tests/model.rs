//! Integration tests for the shared model types.

use druglink_model::{LinkError, MappingRow, MatchMapping};

#[test]
fn mapping_row_writes_pmids_as_one_quoted_field() {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .serialize(MappingRow::new("caffeine", "31587145,32840724"))
        .expect("serialize row");
    writer
        .serialize(MappingRow::new("midazolam", "31587145"))
        .expect("serialize row");
    let bytes = writer.into_inner().expect("flush writer");
    let text = String::from_utf8(bytes).expect("utf8");

    assert_eq!(
        text,
        "caffeine,\"31587145,32840724\"\nmidazolam,31587145\n"
    );
}

#[test]
fn mapping_equality_depends_on_order() {
    let left = MatchMapping::from_iter([("a", vec!["1"]), ("b", vec!["2"])]);
    let right = MatchMapping::from_iter([("b", vec!["2"]), ("a", vec!["1"])]);
    assert_ne!(left, right);
    assert_eq!(left, left.clone());
}

#[test]
fn errors_render_row_numbers() {
    let error = LinkError::format(3, "expected 2 fields, found 1");
    assert_eq!(
        error.to_string(),
        "malformed row 3: expected 2 fields, found 1"
    );
    let error = LinkError::configuration("requested 4 synonym columns, sheet has 2");
    assert_eq!(
        error.to_string(),
        "invalid configuration: requested 4 synonym columns, sheet has 2"
    );
}
