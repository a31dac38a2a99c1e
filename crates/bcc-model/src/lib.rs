pub mod config;
pub mod error;
pub mod schema;

pub use config::{
    BmiCategory, ClinicalConfig, PatientConfig, SENTINEL_TOKENS, StageDescriptor, artifacts, bmi,
    stage_descriptors,
};
pub use error::{PrepError, Result};
