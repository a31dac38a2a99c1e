//! Clinical table cleaning.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::debug;

use bcc_model::{ClinicalConfig, schema};

use crate::cleaning::{dedupe_keep_last, drop_incomplete_rows, require_columns, strip_sentinels};

/// Clean the raw clinical table.
///
/// Drops the irrelevant columns, keeps the most recent row per patient,
/// renames the identifier to the canonical join key, and removes every row
/// still carrying a sentinel or missing value.
pub fn clean_clinical(df: &DataFrame, config: &ClinicalConfig) -> Result<DataFrame> {
    require_columns(df, "clinical", schema::CLINICAL_REQUIRED)?;
    let mut out = df.clone();
    for name in &config.drop_columns {
        out = out
            .drop(name)
            .with_context(|| format!("drop irrelevant clinical column '{name}'"))?;
    }
    let mut out = dedupe_keep_last(&out, schema::PATIENT_ID)?;
    out.rename(schema::PATIENT_ID, schema::KEY.into())
        .context("rename patient identifier to join key")?;
    let out = strip_sentinels(&out, &config.sentinels)?;
    let out = drop_incomplete_rows(&out)?;
    debug!(
        rows = out.height(),
        columns = out.width(),
        "clinical table cleaned"
    );
    Ok(out)
}
