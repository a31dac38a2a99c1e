//! Pipeline driver with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Clinical cleaner**: `bc04.csv` -> `bc_preprocessed.csv`
//! 2. **Patient cleaner**: `pc04.csv` -> `pc_preprocessed.csv`
//! 3. **Merger**: both cleaned tables -> `bcc_parcial.csv`
//! 4. **Normalizer**: `bcc_parcial.csv` -> `bcc_final.csv`
//!
//! Each stage is a pure frame transformation; file I/O happens only here at
//! the stage boundaries, so stage N+1 always consumes the artifact stage N
//! wrote.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use bcc_ingest::{read_csv, write_csv};
use bcc_model::{ClinicalConfig, PatientConfig, artifacts};
use bcc_transform::{clean_clinical, clean_patient, merge_cohort, normalize_features};

use crate::types::{PipelineResult, StageSummary};

/// Run the four pipeline stages against the source files in `data_dir`,
/// writing every artifact into `output_dir`.
pub fn run_pipeline(data_dir: &Path, output_dir: &Path) -> Result<PipelineResult> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let started = Instant::now();
    let mut stages = Vec::new();

    let clinical_clean = {
        let span = info_span!("clinical");
        let _guard = span.enter();
        let input = data_dir.join(artifacts::CLINICAL_SOURCE);
        let output = output_dir.join(artifacts::CLINICAL_CLEAN);
        let raw = read_csv(&input)?;
        let rows_in = raw.height();
        let mut cleaned = clean_clinical(&raw, &ClinicalConfig::default())?;
        write_csv(&mut cleaned, &output)?;
        info!(
            rows_in,
            rows_out = cleaned.height(),
            columns = cleaned.width(),
            output = %output.display(),
            "clinical table cleaned"
        );
        stages.push(StageSummary {
            stage: "clinical",
            inputs: artifacts::CLINICAL_SOURCE.to_string(),
            output: output.clone(),
            rows_in,
            rows_out: cleaned.height(),
            columns_out: cleaned.width(),
        });
        output
    };

    let patient_clean = {
        let span = info_span!("patient");
        let _guard = span.enter();
        let input = data_dir.join(artifacts::PATIENT_SOURCE);
        let output = output_dir.join(artifacts::PATIENT_CLEAN);
        let raw = read_csv(&input)?;
        let rows_in = raw.height();
        let mut cleaned = clean_patient(&raw, &PatientConfig::default())?;
        write_csv(&mut cleaned, &output)?;
        info!(
            rows_in,
            rows_out = cleaned.height(),
            columns = cleaned.width(),
            output = %output.display(),
            "patient table cleaned"
        );
        stages.push(StageSummary {
            stage: "patient",
            inputs: artifacts::PATIENT_SOURCE.to_string(),
            output: output.clone(),
            rows_in,
            rows_out: cleaned.height(),
            columns_out: cleaned.width(),
        });
        output
    };

    let merged_artifact = {
        let span = info_span!("merge");
        let _guard = span.enter();
        let output = output_dir.join(artifacts::MERGED);
        let clinical = read_csv(&clinical_clean)?;
        let patient = read_csv(&patient_clean)?;
        let rows_in = clinical.height() + patient.height();
        let mut merged = merge_cohort(&clinical, &patient)?;
        write_csv(&mut merged, &output)?;
        info!(
            rows_in,
            rows_out = merged.height(),
            columns = merged.width(),
            output = %output.display(),
            "tables merged"
        );
        stages.push(StageSummary {
            stage: "merge",
            inputs: format!(
                "{} + {}",
                artifacts::CLINICAL_CLEAN,
                artifacts::PATIENT_CLEAN
            ),
            output: output.clone(),
            rows_in,
            rows_out: merged.height(),
            columns_out: merged.width(),
        });
        output
    };

    {
        let span = info_span!("normalize");
        let _guard = span.enter();
        let output = output_dir.join(artifacts::FINAL);
        let merged = read_csv(&merged_artifact)?;
        let rows_in = merged.height();
        let mut normalized = normalize_features(&merged)?;
        write_csv(&mut normalized, &output)?;
        info!(
            rows_in,
            rows_out = normalized.height(),
            columns = normalized.width(),
            output = %output.display(),
            "final table written"
        );
        stages.push(StageSummary {
            stage: "normalize",
            inputs: artifacts::MERGED.to_string(),
            output,
            rows_in,
            rows_out: normalized.height(),
            columns_out: normalized.width(),
        });
    }

    Ok(PipelineResult {
        output_dir: output_dir.to_path_buf(),
        stages,
        elapsed: started.elapsed(),
    })
}
