use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table};

use bcc_cli::types::PipelineResult;

pub fn print_summary(result: &PipelineResult) {
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        "Stage", "Inputs", "Output", "Rows in", "Rows out", "Columns",
    ]);
    apply_table_style(&mut table);
    for index in 3..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stage in &result.stages {
        table.add_row(vec![
            Cell::new(stage.stage),
            Cell::new(&stage.inputs),
            Cell::new(file_name(&stage.output)),
            Cell::new(stage.rows_in),
            Cell::new(stage.rows_out),
            Cell::new(stage.columns_out),
        ]);
    }
    println!("{table}");
    println!("Completed in {:.2?}", result.elapsed);
}

pub fn apply_table_style(table: &mut Table) {
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
