use anyhow::Result;
use comfy_table::Table;

use bcc_cli::pipeline::run_pipeline;
use bcc_cli::types::PipelineResult;
use bcc_model::stage_descriptors;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

pub fn run_prepare(args: &RunArgs) -> Result<PipelineResult> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.data_dir.clone());
    run_pipeline(&args.data_dir, &output_dir)
}

pub fn run_stages() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Stage", "Description", "Input", "Output"]);
    apply_table_style(&mut table);
    for stage in stage_descriptors() {
        table.add_row(vec![stage.name, stage.description, stage.input, stage.output]);
    }
    println!("{table}");
    Ok(())
}
