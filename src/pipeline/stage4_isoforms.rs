use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::ctx::{Ctx, Task};
use crate::isoform::{IsoformSelector, load_expression_matrix, load_tissue_list};
use crate::pipeline::Stage;

pub struct Stage4Isoforms;

impl Stage4Isoforms {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Isoforms {
    fn name(&self) -> &'static str {
        "stage4_isoforms"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Task::Isoforms(settings) = &ctx.task else {
            bail!("isoform stage requires the isoforms task");
        };

        let primary = load_expression_matrix(&settings.expression_path)?;
        info!(
            path = %settings.expression_path.display(),
            isoforms = primary.len(),
            tissues = primary.tissues().len(),
            duplicates = primary.duplicates(),
            "expression_matrix_loaded"
        );

        let base: Vec<String> = match &settings.tissues_path {
            Some(path) => load_tissue_list(path)?,
            None => primary.tissues().to_vec(),
        };
        let tissues: Vec<String> = base
            .into_iter()
            .filter(|t| !settings.skip_tissues.iter().any(|s| s == t))
            .collect();
        if tissues.is_empty() {
            bail!("no tissues left after applying the tissue selection");
        }

        let mut warnings = Vec::new();
        let (primary, absent) = primary.project(&tissues);
        for tissue in &absent {
            warn!(tissue = %tissue, "tissue not present in expression matrix");
            warnings.push(format!(
                "tissue '{}' not present in {}; treated as missing",
                tissue,
                settings.expression_path.display()
            ));
        }

        let fallback = match &settings.fallback_expression_path {
            Some(path) => {
                let matrix = load_expression_matrix(path)?;
                info!(
                    path = %path.display(),
                    isoforms = matrix.len(),
                    "fallback_matrix_loaded"
                );
                Some(matrix.project(&tissues).0)
            }
            None => None,
        };

        let selector = IsoformSelector::new(&primary)
            .with_fallback(fallback.as_ref())
            .with_isoform_map(ctx.isoform_map.as_ref())
            .with_threads(ctx.threads);
        let rows = selector.select_all(&ctx.records)?;
        info!(
            proteins = ctx.records.len(),
            selected = rows.len(),
            tissues = tissues.len(),
            "representative_isoforms_selected"
        );

        ctx.warnings.extend(warnings);
        ctx.tissues = tissues;
        ctx.isoform_rows = rows;
        Ok(())
    }
}
