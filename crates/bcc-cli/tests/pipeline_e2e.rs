//! End-to-end tests driving the full pipeline over fixture files.

use std::fs;
use std::path::Path;

use bcc_cli::pipeline::run_pipeline;

fn write_fixture(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

/// Parse a two-decimal CSV artifact into (header, rows).
fn read_artifact(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let text = fs::read_to_string(path).expect("read artifact");
    let mut lines = text.lines();
    let header = lines
        .next()
        .expect("header row")
        .split(',')
        .map(ToString::to_string)
        .collect();
    let rows = lines
        .map(|line| line.split(',').map(ToString::to_string).collect())
        .collect();
    (header, rows)
}

fn column_index(header: &[String], name: &str) -> usize {
    header
        .iter()
        .position(|column| column == name)
        .unwrap_or_else(|| panic!("column '{name}' not found in {header:?}"))
}

#[test]
fn pipeline_produces_normalized_cohort() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_fixture(
        dir.path(),
        "bc04.csv",
        "pacient,class,age,inv-nodes,node-caps,irradiat\n\
         10,erro,40-49,0-2,no,no\n\
         10,no-recurrence,50-59,0-2,no,no\n\
         20,no-recurrence,?,0-2,yes,no\n\
         30,recurrence,60-69,3-5,no,yes\n",
    );
    write_fixture(
        dir.path(),
        "pc04.csv",
        "codigo,sexo,peso,altura,convenio\n\
         10,F,\"70,5\",170,particular\n\
         30,F,80,165,sus\n\
         40,F,90,175,convenio\n",
    );

    let result = run_pipeline(dir.path(), dir.path()).expect("run pipeline");
    assert_eq!(result.stages.len(), 4);

    // Clinical: patient 10 deduplicated to its clean row, 20 dropped on '?'.
    let clinical = &result.stages[0];
    assert_eq!(clinical.rows_in, 4);
    assert_eq!(clinical.rows_out, 2);

    // Merge keeps only the identifiers present in both cleaned tables.
    let merge = &result.stages[2];
    assert_eq!(merge.rows_out, 2);

    let (header, rows) = read_artifact(&dir.path().join("bcc_final.csv"));
    assert!(!header.iter().any(|name| name == "codigo"));
    assert!(!header.iter().any(|name| name == "IMC"));
    assert!(header.iter().any(|name| name == "IMC_cat"));
    assert_eq!(rows.len(), 2);

    // Weight min-max rescaled: 70.5 -> 0, 80 -> 1.
    let peso = column_index(&header, "peso");
    let mut weights: Vec<&str> = rows.iter().map(|row| row[peso].as_str()).collect();
    weights.sort_unstable();
    assert_eq!(weights, vec!["0.00", "1.00"]);

    // Height standardized: 170/165 sit one population deviation apart.
    let altura = column_index(&header, "altura");
    let mut heights: Vec<&str> = rows.iter().map(|row| row[altura].as_str()).collect();
    heights.sort_unstable();
    assert_eq!(heights, vec!["-1.00", "1.00"]);
}

#[test]
fn pipeline_handles_single_row_cohort() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_fixture(
        dir.path(),
        "bc04.csv",
        "pacient,class,age,inv-nodes,node-caps,irradiat\n\
         10,erro,40-49,0-2,no,no\n\
         10,no-recurrence,50-59,0-2,no,no\n",
    );
    write_fixture(
        dir.path(),
        "pc04.csv",
        "codigo,sexo,peso,altura,convenio\n\
         10,F,\"70,5\",170,particular\n",
    );

    let result = run_pipeline(dir.path(), dir.path()).expect("run pipeline");
    let finalize = &result.stages[3];
    assert_eq!(finalize.rows_out, 1);

    let (header, rows) = read_artifact(&dir.path().join("bcc_final.csv"));
    assert!(!header.iter().any(|name| name == "codigo"));
    assert!(!header.iter().any(|name| name == "IMC"));
    assert_eq!(rows.len(), 1);

    // Degenerate single-value distributions map to the defined 0.0 output.
    let peso = column_index(&header, "peso");
    let altura = column_index(&header, "altura");
    assert_eq!(rows[0][peso], "0.00");
    assert_eq!(rows[0][altura], "0.00");
}

#[test]
fn pipeline_fails_without_source_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_fixture(
        dir.path(),
        "pc04.csv",
        "codigo,sexo,peso,altura,convenio\n10,F,70,170,sus\n",
    );

    let error = run_pipeline(dir.path(), dir.path()).expect_err("missing bc04.csv must fail");
    assert!(error.to_string().contains("bc04.csv"));
}

#[test]
fn pipeline_writes_intermediate_artifacts() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_fixture(
        dir.path(),
        "bc04.csv",
        "pacient,class,age,inv-nodes,node-caps,irradiat\n\
         10,no-recurrence,50-59,0-2,no,no\n",
    );
    write_fixture(
        dir.path(),
        "pc04.csv",
        "codigo,sexo,peso,altura,convenio\n\
         10,F,70,170,sus\n",
    );

    let out = dir.path().join("out");
    run_pipeline(dir.path(), &out).expect("run pipeline");

    for artifact in [
        "bc_preprocessed.csv",
        "pc_preprocessed.csv",
        "bcc_parcial.csv",
        "bcc_final.csv",
    ] {
        assert!(out.join(artifact).exists(), "{artifact} missing");
    }

    // The cleaned patient artifact carries the derived BMI features with
    // two-decimal formatting.
    let (header, rows) = read_artifact(&out.join("pc_preprocessed.csv"));
    let imc = column_index(&header, "IMC");
    assert_eq!(rows[0][imc], "24.22");
    let cat = column_index(&header, "IMC_cat");
    assert_eq!(rows[0][cat], "N");
}
