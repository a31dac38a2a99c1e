//! Shared cleaning primitives used by the stage transformations.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use polars::prelude::{
    AnyValue, BooleanChunked, Column, DataFrame, NamedFrom, NewChunkedArray, Series,
};

use bcc_ingest::any_to_string;
use bcc_model::PrepError;

/// Fail with a schema error when any required column is absent.
///
/// Stages call this before transforming so a malformed input surfaces as a
/// diagnostic instead of an error deep inside a frame operation.
pub fn require_columns(df: &DataFrame, table: &str, columns: &[&str]) -> Result<(), PrepError> {
    for name in columns {
        if df.column(name).is_err() {
            return Err(PrepError::missing_column(table, *name));
        }
    }
    Ok(())
}

/// Replace sentinel tokens with nulls in every text column.
///
/// Matching is whole-cell and case-sensitive; non-text columns pass through
/// untouched.
pub fn strip_sentinels(df: &DataFrame, sentinels: &[String]) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let Ok(ca) = column.str() else {
            columns.push(column.clone());
            continue;
        };
        let values: Vec<Option<&str>> = ca
            .into_iter()
            .map(|cell| cell.filter(|value| !sentinels.iter().any(|token| token == value)))
            .collect();
        columns.push(Series::new(column.name().clone(), values).into());
    }
    DataFrame::new(columns).context("rebuild frame without sentinel values")
}

/// Remove every row containing at least one null cell.
pub fn drop_incomplete_rows(df: &DataFrame) -> Result<DataFrame> {
    let mut keep = vec![true; df.height()];
    for column in df.get_columns() {
        if column.null_count() == 0 {
            continue;
        }
        for (idx, valid) in column.is_not_null().into_iter().enumerate() {
            if !valid.unwrap_or(false) {
                keep[idx] = false;
            }
        }
    }
    filter_rows(df, &keep, "drop rows with missing values")
}

/// Deduplicate rows on a key column, keeping the last occurrence.
///
/// The last row in file order stands in for the most recent record of an
/// identifier. Null keys collapse into a single group like any other value.
pub fn dedupe_keep_last(df: &DataFrame, key: &str) -> Result<DataFrame> {
    let column = df
        .column(key)
        .with_context(|| format!("dedupe key column '{key}'"))?;
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut keep = vec![false; df.height()];
    for idx in (0..df.height()).rev() {
        let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        if seen.insert(value) {
            keep[idx] = true;
        }
    }
    filter_rows(df, &keep, "deduplicate rows by identifier")
}

pub(crate) fn filter_rows(df: &DataFrame, keep: &[bool], action: &'static str) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    df.filter(&mask).context(action)
}
