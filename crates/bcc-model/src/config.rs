//! Stage configuration constants.
//!
//! Every transformation takes its configuration explicitly instead of reading
//! module-level state, so the stage functions stay pure and testable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tokens the source systems emit for invalid or unknown cells.
pub const SENTINEL_TOKENS: &[&str] = &["?", "erro"];

/// Fixed artifact names chained through the pipeline.
pub mod artifacts {
    pub const CLINICAL_SOURCE: &str = "bc04.csv";
    pub const PATIENT_SOURCE: &str = "pc04.csv";
    pub const CLINICAL_CLEAN: &str = "bc_preprocessed.csv";
    pub const PATIENT_CLEAN: &str = "pc_preprocessed.csv";
    pub const MERGED: &str = "bcc_parcial.csv";
    pub const FINAL: &str = "bcc_final.csv";
}

/// Configuration for the clinical cleaning stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalConfig {
    /// Columns carrying no signal for the downstream analysis.
    pub drop_columns: Vec<String>,
    /// Cell values treated as missing.
    pub sentinels: Vec<String>,
}

impl Default for ClinicalConfig {
    fn default() -> Self {
        Self {
            drop_columns: ["inv-nodes", "node-caps", "irradiat"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            sentinels: default_sentinels(),
        }
    }
}

/// Configuration for the patient cleaning stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientConfig {
    /// Cell values treated as missing.
    pub sentinels: Vec<String>,
    /// Sex codes whose records are excluded from the cohort.
    pub excluded_sex_codes: Vec<String>,
    /// Canonical short codes for the insurance category.
    pub insurance_map: BTreeMap<String, String>,
}

impl Default for PatientConfig {
    fn default() -> Self {
        let insurance_map = [("particular", "P"), ("sus", "S"), ("convenio", "C")]
            .iter()
            .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
            .collect();
        Self {
            sentinels: default_sentinels(),
            excluded_sex_codes: vec!["M".to_string(), "J".to_string()],
            insurance_map,
        }
    }
}

fn default_sentinels() -> Vec<String> {
    SENTINEL_TOKENS.iter().map(ToString::to_string).collect()
}

/// Body-mass index bucket.
///
/// Intervals are closed on the lower bound and open on the upper one, so a
/// value sitting exactly on a breakpoint lands in the higher bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseI,
    ObeseII,
    ObeseIII,
}

impl BmiCategory {
    /// Bucket breakpoints (lower bounds above zero).
    pub const BREAKPOINTS: [f64; 5] = [18.5, 25.0, 30.0, 35.0, 40.0];

    pub fn from_bmi(bmi: f64) -> Self {
        match bmi {
            value if value < Self::BREAKPOINTS[0] => Self::Underweight,
            value if value < Self::BREAKPOINTS[1] => Self::Normal,
            value if value < Self::BREAKPOINTS[2] => Self::Overweight,
            value if value < Self::BREAKPOINTS[3] => Self::ObeseI,
            value if value < Self::BREAKPOINTS[4] => Self::ObeseII,
            _ => Self::ObeseIII,
        }
    }

    /// Short code used in the output artifacts.
    pub fn code(self) -> &'static str {
        match self {
            Self::Underweight => "A",
            Self::Normal => "N",
            Self::Overweight => "P",
            Self::ObeseI => "1",
            Self::ObeseII => "2",
            Self::ObeseIII => "3",
        }
    }
}

/// Compute the body-mass index from weight in kilograms and height in
/// centimeters.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Pipeline stage descriptors, in execution order.
pub fn stage_descriptors() -> Vec<StageDescriptor> {
    vec![
        StageDescriptor {
            name: "clinical",
            description: "Clean the clinical table",
            input: artifacts::CLINICAL_SOURCE,
            output: artifacts::CLINICAL_CLEAN,
        },
        StageDescriptor {
            name: "patient",
            description: "Clean the patient table and derive BMI features",
            input: artifacts::PATIENT_SOURCE,
            output: artifacts::PATIENT_CLEAN,
        },
        StageDescriptor {
            name: "merge",
            description: "Inner-join the cleaned tables on the patient code",
            input: artifacts::CLINICAL_CLEAN,
            output: artifacts::MERGED,
        },
        StageDescriptor {
            name: "normalize",
            description: "Rescale weight to [0,1] and standardize height",
            input: artifacts::MERGED,
            output: artifacts::FINAL,
        },
    ]
}

/// Static description of one pipeline stage.
#[derive(Debug, Clone)]
pub struct StageDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input: &'static str,
    pub output: &'static str,
}
