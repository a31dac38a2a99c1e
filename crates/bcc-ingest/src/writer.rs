//! CSV serialization of stage outputs.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

/// Numeric columns are written with fixed two-decimal formatting in every
/// artifact.
pub const FLOAT_PRECISION: usize = 2;

/// Write a frame as a comma-delimited file with a header row.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .with_float_precision(Some(FLOAT_PRECISION))
        .finish(df)
        .with_context(|| format!("write {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv file written"
    );
    Ok(())
}
