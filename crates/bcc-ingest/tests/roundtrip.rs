//! Tests for CSV reading and writing.

use std::fs;

use polars::prelude::{DataFrame, NamedFrom, Series};

use bcc_ingest::{read_csv, write_csv};

#[test]
fn read_csv_loads_headers_and_rows_as_text() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("input.csv");
    fs::write(&path, "codigo,peso,altura\n10,\"70,5\",170\n11,64,165\n").expect("write fixture");

    let df = read_csv(&path).expect("read csv");
    assert_eq!(df.height(), 2);
    assert_eq!(
        df.get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>(),
        vec!["codigo", "peso", "altura"]
    );
    let peso = df.column("peso").expect("peso column");
    assert_eq!(peso.str().expect("string column").get(0), Some("70,5"));
}

#[test]
fn read_csv_turns_empty_cells_into_nulls() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("input.csv");
    fs::write(&path, "a,b\n1,\n,2\n").expect("write fixture");

    let df = read_csv(&path).expect("read csv");
    assert_eq!(df.column("a").expect("a").null_count(), 1);
    assert_eq!(df.column("b").expect("b").null_count(), 1);
}

#[test]
fn read_csv_strips_byte_order_mark_from_header() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("input.csv");
    fs::write(&path, "\u{feff}codigo,peso\n10,70\n").expect("write fixture");

    let df = read_csv(&path).expect("read csv");
    assert!(df.column("codigo").is_ok());
}

#[test]
fn read_csv_fails_for_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.csv");
    let error = read_csv(&path).expect_err("missing file must fail");
    assert!(error.to_string().contains("absent.csv"));
}

#[test]
fn write_csv_formats_floats_with_two_decimals() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("out.csv");

    let mut df = DataFrame::new(vec![
        Series::new("codigo".into(), &["10", "11"]).into(),
        Series::new("peso".into(), &[70.5_f64, 64.0]).into(),
    ])
    .expect("build frame");
    write_csv(&mut df, &path).expect("write csv");

    let text = fs::read_to_string(&path).expect("read output back");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("codigo,peso"));
    assert_eq!(lines.next(), Some("10,70.50"));
    assert_eq!(lines.next(), Some("11,64.00"));
}
