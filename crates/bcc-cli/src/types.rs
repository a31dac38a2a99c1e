use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
pub struct PipelineResult {
    pub output_dir: PathBuf,
    pub stages: Vec<StageSummary>,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct StageSummary {
    pub stage: &'static str,
    /// Input artifact names, for display only.
    pub inputs: String,
    pub output: PathBuf,
    /// Total rows across the stage's input tables.
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns_out: usize,
}
