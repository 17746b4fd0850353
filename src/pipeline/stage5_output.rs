use anyhow::Result;
use tracing::info;

use crate::ctx::{Ctx, Task};
use crate::io::{json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage5Output;

impl Stage5Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Output {
    fn name(&self) -> &'static str {
        "stage5_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        match &ctx.task {
            Task::Enrich(_) => {
                ctx.report.warnings = ctx.warnings.clone();
                if ctx.write_json {
                    json_writer::write_json(&ctx.output.json_path, &ctx.report)?;
                    info!(path = %ctx.output.json_path.display(), "json_written");
                }
                if ctx.write_tsv {
                    tsv_writer::write_complex_tsv(&ctx.output.tsv_path, ctx)?;
                    info!(path = %ctx.output.tsv_path.display(), "complex_tsv_written");
                }
            }
            Task::Isoforms(settings) => {
                tsv_writer::write_isoform_tsv(&settings.output_path, ctx)?;
                info!(
                    path = %settings.output_path.display(),
                    rows = ctx.isoform_rows.len(),
                    "isoform_table_written"
                );
            }
            Task::Validate(_) => {}
        }
        Ok(())
    }
}
