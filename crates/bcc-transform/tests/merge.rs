//! Tests for the merge stage.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use bcc_model::PrepError;
use bcc_transform::merge_cohort;

fn text_frame(columns: &[(&str, &[&str])]) -> DataFrame {
    let columns: Vec<Column> = columns
        .iter()
        .map(|(name, values)| Series::new((*name).into(), values.to_vec()).into())
        .collect();
    DataFrame::new(columns).expect("build frame")
}

#[test]
fn merge_keeps_only_shared_identifiers() {
    let clinical = text_frame(&[
        ("codigo", &["10", "11", "12"]),
        ("class", &["a", "b", "c"]),
    ]);
    let patient = text_frame(&[
        ("codigo", &["11", "12", "13"]),
        ("convenio", &["P", "S", "C"]),
    ]);
    let merged = merge_cohort(&clinical, &patient).expect("merge");

    assert_eq!(merged.height(), 2);
    assert!(merged.column("codigo").is_err());
    assert!(merged.column("class").is_ok());
    assert!(merged.column("convenio").is_ok());
}

#[test]
fn merge_aligns_numeric_and_text_keys() {
    let clinical = DataFrame::new(vec![
        Series::new("codigo".into(), &[10_i64, 11]).into(),
        Series::new("class".into(), &["a", "b"]).into(),
    ])
    .expect("build frame");
    let patient = text_frame(&[("codigo", &["10", "11"]), ("convenio", &["P", "S"])]);
    let merged = merge_cohort(&clinical, &patient).expect("merge");

    assert_eq!(merged.height(), 2);
}

#[test]
fn merge_without_key_column_is_a_schema_error() {
    let clinical = text_frame(&[("class", &["a"])]);
    let patient = text_frame(&[("codigo", &["10"]), ("convenio", &["P"])]);
    let error = merge_cohort(&clinical, &patient).expect_err("must fail");

    match error.downcast_ref::<PrepError>() {
        Some(PrepError::MissingColumn { table, column }) => {
            assert_eq!(table, "clinical");
            assert_eq!(column, "codigo");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn merge_with_no_overlap_is_empty() {
    let clinical = text_frame(&[("codigo", &["1"]), ("class", &["a"])]);
    let patient = text_frame(&[("codigo", &["2"]), ("convenio", &["P"])]);
    let merged = merge_cohort(&clinical, &patient).expect("merge");
    assert_eq!(merged.height(), 0);
}
