//! Patient table cleaning and feature derivation.

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
use tracing::debug;

use bcc_ingest::{any_to_string, parse_decimal};
use bcc_model::{BmiCategory, PatientConfig, bmi, schema};

use crate::cleaning::{
    dedupe_keep_last, drop_incomplete_rows, filter_rows, require_columns, strip_sentinels,
};

/// Clean the raw patient table and derive the BMI features.
///
/// After deduplication and sentinel removal, records with a disallowed sex
/// code are excluded and the column is dropped. Weight and height are parsed
/// as locale-tolerant numerics, the body-mass index and its bucket are
/// derived per row, and the insurance category is mapped onto its canonical
/// short codes.
pub fn clean_patient(df: &DataFrame, config: &PatientConfig) -> Result<DataFrame> {
    require_columns(df, "patient", schema::PATIENT_REQUIRED)?;
    let out = dedupe_keep_last(df, schema::KEY)?;
    let out = strip_sentinels(&out, &config.sentinels)?;
    let out = drop_incomplete_rows(&out)?;
    let out = exclude_sex_codes(&out, &config.excluded_sex_codes)?;
    let out = out.drop(schema::SEX).context("drop sex column")?;
    let out = coerce_biometrics(&out)?;
    let out = derive_bmi_features(&out)?;
    let out = map_insurance(&out, config)?;
    debug!(
        rows = out.height(),
        columns = out.width(),
        "patient table cleaned"
    );
    Ok(out)
}

fn exclude_sex_codes(df: &DataFrame, excluded: &[String]) -> Result<DataFrame> {
    let column = df.column(schema::SEX).context("sex column")?;
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        keep.push(!excluded.iter().any(|code| code == &value));
    }
    filter_rows(df, &keep, "exclude disallowed sex codes")
}

/// Parse weight and height as numerics, then drop rows where either failed.
///
/// Cells are coerced through text with comma decimal separators rewritten to
/// dots; anything that still does not parse becomes missing.
fn coerce_biometrics(df: &DataFrame) -> Result<DataFrame> {
    let mut out = df.clone();
    for name in [schema::WEIGHT, schema::HEIGHT] {
        let column = out.column(name)?;
        let values: Vec<Option<f64>> = (0..column.len())
            .map(|idx| {
                let text = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
                parse_decimal(&text)
            })
            .collect();
        out.with_column(Series::new(name.into(), values))
            .with_context(|| format!("coerce '{name}' to numeric"))?;
    }
    let weight = out.column(schema::WEIGHT)?.f64().context("weight column")?;
    let height = out.column(schema::HEIGHT)?.f64().context("height column")?;
    let keep: Vec<bool> = weight
        .into_iter()
        .zip(height)
        .map(|(w, h)| w.is_some() && h.is_some())
        .collect();
    filter_rows(&out, &keep, "drop rows without numeric weight and height")
}

fn derive_bmi_features(df: &DataFrame) -> Result<DataFrame> {
    let weight = df.column(schema::WEIGHT)?.f64().context("weight column")?;
    let height = df.column(schema::HEIGHT)?.f64().context("height column")?;
    let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());
    let mut buckets: Vec<Option<&str>> = Vec::with_capacity(df.height());
    for (w, h) in weight.into_iter().zip(height) {
        if let (Some(w), Some(h)) = (w, h) {
            let value = bmi(w, h);
            values.push(Some(value));
            buckets.push(Some(BmiCategory::from_bmi(value).code()));
        } else {
            values.push(None);
            buckets.push(None);
        }
    }
    let mut out = df.clone();
    out.with_column(Series::new(schema::BMI.into(), values))
        .context("add bmi column")?;
    out.with_column(Series::new(schema::BMI_CATEGORY.into(), buckets))
        .context("add bmi bucket column")?;
    Ok(out)
}

fn map_insurance(df: &DataFrame, config: &PatientConfig) -> Result<DataFrame> {
    let ca = df
        .column(schema::INSURANCE)
        .context("insurance column")?
        .str()
        .context("insurance column as text")?;
    let mut mapped: Vec<Option<&str>> = Vec::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());
    for cell in ca {
        let code = cell
            .and_then(|value| config.insurance_map.get(value))
            .map(String::as_str);
        keep.push(code.is_some());
        mapped.push(code);
    }
    let mut out = df.clone();
    out.with_column(Series::new(schema::INSURANCE.into(), mapped))
        .context("map insurance categories")?;
    // Unmapped categories are missing values; drop them in the same pass.
    filter_rows(&out, &keep, "drop rows with unknown insurance category")
}
