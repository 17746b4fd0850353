use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::ctx::{Ctx, Task};
use crate::enrich::MetricKind;
use crate::pipeline::Stage;
use crate::proteins::{load_homolog_map, load_isoform_map, load_ned_table, load_tissue_counts};

pub struct Stage1Proteins;

impl Stage1Proteins {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Proteins {
    fn name(&self) -> &'static str {
        "stage1_proteins"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let records = load_ned_table(&ctx.ned_path)?;
        let classified = records.iter().filter(|r| r.decay.is_classified()).count();
        info!(
            path = %ctx.ned_path.display(),
            records = records.len(),
            classified,
            "ned_table_loaded"
        );
        if records.is_empty() {
            warn!("NED table has no records");
            ctx.warnings.push("NED table has no records".to_string());
        }
        ctx.report.coverage.records_loaded = records.len() as u64;
        ctx.records = records;

        if let Some(path) = ctx.task.homologs_path() {
            let homologs = load_homolog_map(path)?;
            info!(path = %path.display(), pairs = homologs.len(), "homolog_map_loaded");
            ctx.homologs = Some(homologs);
        }

        match &ctx.task {
            Task::Enrich(settings) if settings.metric == MetricKind::TissueCount => {
                let Some(path) = &settings.tissue_table_path else {
                    bail!("--metric tissue-count requires --tissue-table");
                };
                let counts = load_tissue_counts(path)?;
                info!(path = %path.display(), proteins = counts.len(), "tissue_table_loaded");
                ctx.tissue_counts = Some(counts);
            }
            Task::Enrich(settings) => {
                if settings.tissue_table_path.is_some() {
                    warn!(metric = %settings.metric, "tissue table ignored for this metric");
                    ctx.warnings.push(format!(
                        "--tissue-table ignored for metric {}",
                        settings.metric
                    ));
                }
            }
            Task::Isoforms(settings) => {
                if let Some(path) = &settings.protein_map_path {
                    let map = load_isoform_map(path)?;
                    info!(path = %path.display(), proteins = map.len(), "protein_map_loaded");
                    ctx.isoform_map = Some(map);
                }
            }
            Task::Validate(_) => {}
        }

        Ok(())
    }
}
