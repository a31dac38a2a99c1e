//! Column naming for the fixed input and artifact schemas.
//!
//! The source files are duck-typed CSVs; each stage validates the columns it
//! needs before transforming rather than failing inside a library call.

/// Identifier column as it appears in the raw clinical export.
pub const PATIENT_ID: &str = "pacient";

/// Canonical join key shared by both cleaned tables.
pub const KEY: &str = "codigo";

pub const SEX: &str = "sexo";
pub const WEIGHT: &str = "peso";
pub const HEIGHT: &str = "altura";
pub const INSURANCE: &str = "convenio";

/// Derived body-mass index and its categorical bucket.
pub const BMI: &str = "IMC";
pub const BMI_CATEGORY: &str = "IMC_cat";

/// Columns each stage requires in its input table.
pub const CLINICAL_REQUIRED: &[&str] = &[PATIENT_ID];
pub const PATIENT_REQUIRED: &[&str] = &[KEY, SEX, WEIGHT, HEIGHT, INSURANCE];
pub const MERGE_REQUIRED: &[&str] = &[KEY];
pub const SCALE_REQUIRED: &[&str] = &[BMI, WEIGHT, HEIGHT];
