//! CSV reading into all-string Polars frames.
//!
//! Source and intermediate files are ingested with every column as text.
//! Sentinel stripping and locale-aware numeric parsing happen downstream, so
//! nothing is lost to premature type inference. Empty cells become nulls.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a comma-delimited file with a header row into a string-typed frame.
///
/// Fails when the file is absent or a record does not parse; there is no
/// recovery path for unreadable inputs.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header of {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.with_context(|| format!("read record from {}", path.display()))?;
        for (idx, column) in cells.iter_mut().enumerate() {
            let value = record.get(idx).map(normalize_cell).unwrap_or_default();
            column.push(if value.is_empty() { None } else { Some(value) });
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into())
        .collect();
    let df = DataFrame::new(columns)
        .with_context(|| format!("build frame from {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv file loaded"
    );
    Ok(df)
}
