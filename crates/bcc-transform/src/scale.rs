//! Final numeric normalization of the merged table.

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
use tracing::{debug, warn};

use bcc_ingest::any_to_f64;
use bcc_model::schema;

use crate::cleaning::require_columns;

/// Drop the raw BMI value and rescale the biometric features.
///
/// The BMI bucket supersedes the raw value, which would only duplicate it.
/// Weight is min-max rescaled to [0,1] and height standardized to zero mean
/// and unit variance, both from the distribution observed in this run's data.
pub fn normalize_features(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, "merged", schema::SCALE_REQUIRED)?;
    let out = df.drop(schema::BMI).context("drop raw bmi column")?;
    let out = min_max_scale(&out, schema::WEIGHT)?;
    let out = standardize(&out, schema::HEIGHT)?;
    debug!(
        rows = out.height(),
        columns = out.width(),
        "features normalized"
    );
    Ok(out)
}

/// Linearly rescale a column so the observed minimum maps to 0 and the
/// maximum to 1.
///
/// A constant column has no range to rescale; every value maps to 0.0 and a
/// warning is emitted.
pub fn min_max_scale(df: &DataFrame, name: &str) -> Result<DataFrame> {
    let values = numeric_values(df, name)?;
    let present: Vec<f64> = values.iter().copied().flatten().collect();
    let min = present.iter().copied().fold(f64::INFINITY, f64::min);
    let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if !present.is_empty() && range == 0.0 {
        warn!(column = name, "zero range; rescaled values set to 0");
    }
    let scaled: Vec<Option<f64>> = values
        .iter()
        .map(|value| {
            value.map(|v| if range == 0.0 { 0.0 } else { (v - min) / range })
        })
        .collect();
    replace_column(df, name, scaled)
}

/// Rescale a column to zero mean and unit variance.
///
/// Uses the population standard deviation. A zero-variance column maps to
/// 0.0 everywhere, with a warning.
pub fn standardize(df: &DataFrame, name: &str) -> Result<DataFrame> {
    let values = numeric_values(df, name)?;
    let present: Vec<f64> = values.iter().copied().flatten().collect();
    let count = present.len() as f64;
    let mean = if present.is_empty() {
        0.0
    } else {
        present.iter().sum::<f64>() / count
    };
    let variance = if present.is_empty() {
        0.0
    } else {
        present.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count
    };
    let std_dev = variance.sqrt();
    if !present.is_empty() && std_dev == 0.0 {
        warn!(column = name, "zero variance; standardized values set to 0");
    }
    let scaled: Vec<Option<f64>> = values
        .iter()
        .map(|value| {
            value.map(|v| if std_dev == 0.0 { 0.0 } else { (v - mean) / std_dev })
        })
        .collect();
    replace_column(df, name, scaled)
}

fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("numeric column '{name}'"))?;
    Ok((0..column.len())
        .map(|idx| any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect())
}

fn replace_column(df: &DataFrame, name: &str, values: Vec<Option<f64>>) -> Result<DataFrame> {
    let mut out = df.clone();
    out.with_column(Series::new(name.into(), values))
        .with_context(|| format!("replace column '{name}'"))?;
    Ok(out)
}
