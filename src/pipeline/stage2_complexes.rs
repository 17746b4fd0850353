use anyhow::Result;
use tracing::{info, warn};

use crate::complex::{filter_organism, load_complexes};
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage2Complexes;

impl Stage2Complexes {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Complexes {
    fn name(&self) -> &'static str {
        "stage2_complexes"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(path) = ctx.task.complexes_path().cloned() else {
            return Ok(());
        };
        let all = load_complexes(&path)?;
        ctx.complexes_in_file = all.len();

        let complexes = match ctx.task.organism() {
            Some(organism) => filter_organism(all, organism),
            None => all,
        };
        let ambiguous = complexes
            .iter()
            .flat_map(|c| &c.subunits)
            .filter(|g| g.is_ambiguous())
            .count();
        info!(
            path = %path.display(),
            in_file = ctx.complexes_in_file,
            selected = complexes.len(),
            ambiguous_positions = ambiguous,
            "complexes_loaded"
        );

        if complexes.is_empty() {
            let msg = match ctx.task.organism() {
                Some(organism) => format!("no complexes found for organism '{}'", organism),
                None => "complex database is empty".to_string(),
            };
            warn!("{}", msg);
            ctx.warnings.push(msg);
        }

        ctx.report.coverage.complexes_total = complexes.len() as u64;
        ctx.complexes = complexes;
        Ok(())
    }
}
