//! Integration of the cleaned clinical and patient tables.

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, DataType, IntoLazy, JoinArgs, JoinType, col};
use tracing::debug;

use bcc_model::schema;

use crate::cleaning::require_columns;

/// Inner-join the cleaned tables on the patient code.
///
/// Both key columns are coerced to text first so a numeric/string mismatch
/// between the two files cannot poison the join. Identifiers present in only
/// one table are discarded, and the key itself is dropped from the result:
/// it links the records but is not an input feature.
///
/// Fails with a schema error before producing any output when either table
/// lacks the key column.
pub fn merge_cohort(clinical: &DataFrame, patient: &DataFrame) -> Result<DataFrame> {
    require_columns(clinical, "clinical", schema::MERGE_REQUIRED)?;
    require_columns(patient, "patient", schema::MERGE_REQUIRED)?;
    let clinical = key_as_text(clinical).context("normalize clinical join key")?;
    let patient = key_as_text(patient).context("normalize patient join key")?;
    let joined = clinical
        .lazy()
        .join(
            patient.lazy(),
            [col(schema::KEY)],
            [col(schema::KEY)],
            JoinArgs::new(JoinType::Inner),
        )
        .collect()
        .context("inner join on patient code")?;
    let joined = joined.drop(schema::KEY).context("drop join key column")?;
    debug!(
        rows = joined.height(),
        columns = joined.width(),
        "tables merged"
    );
    Ok(joined)
}

fn key_as_text(df: &DataFrame) -> Result<DataFrame> {
    let mut out = df.clone();
    let key = out
        .column(schema::KEY)?
        .as_materialized_series()
        .cast(&DataType::String)
        .context("cast join key to string")?;
    out.with_column(key)?;
    Ok(out)
}
