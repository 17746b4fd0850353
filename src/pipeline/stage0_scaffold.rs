use anyhow::Result;
use std::fs;
use tracing::info;

use crate::ctx::{Ctx, Task};
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.writes_reports() {
            fs::create_dir_all(&ctx.output.out_dir)?;
            info!(
                out_dir = %ctx.output.out_dir.display(),
                "output_dir_ready"
            );
        }
        if let Task::Isoforms(settings) = &ctx.task {
            if let Some(parent) = settings.output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }

        ctx.report.settings.threads = ctx.threads;
        if let Task::Enrich(settings) = &ctx.task {
            ctx.report.settings.metric = Some(settings.metric);
            ctx.report.settings.organism = Some(settings.organism.clone());
            ctx.report.settings.homolog_translation = settings.homologs_path.is_some();
        }

        Ok(())
    }
}
