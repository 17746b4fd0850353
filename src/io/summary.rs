use anyhow::{Context, Result};

use crate::ctx::{Ctx, Task};

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let mut out = String::new();
    out.push_str(&format!("kira-halflife v{}\n", version));

    match &ctx.task {
        Task::Enrich(settings) => {
            let run = ctx
                .enrichment
                .as_ref()
                .context("enrichment results missing")?;
            let coverage = &ctx.report.coverage;
            let outcome = &run.outcome;
            out.push_str(&format!(
                "Metric: {}, organism={}, homologs={}\n",
                settings.metric,
                settings.organism,
                if settings.homologs_path.is_some() { "yes" } else { "no" }
            ));
            out.push_str(&format!(
                "Proteins: {} records, {} in table ({} classified), {} homolog misses, {} metric misses\n",
                coverage.records_loaded,
                coverage.table_entries,
                coverage.classified_entries,
                coverage.homolog_misses,
                coverage.metric_misses
            ));
            out.push_str(&format!(
                "Complexes: {} total, {} tested, {} skipped\n",
                coverage.complexes_total, outcome.trials, outcome.skipped
            ));
            match outcome.p_value {
                Some(p) => out.push_str(&format!(
                    "Result: {}/{} NED>=ED, p={:.4e}\n",
                    outcome.successes, outcome.trials, p
                )),
                None => out.push_str(&format!(
                    "Result: {}/{} NED>=ED, p=undefined (no trials)\n",
                    outcome.successes, outcome.trials
                )),
            }
        }
        Task::Isoforms(settings) => {
            out.push_str(&format!(
                "Isoforms: {} of {} proteins selected over {} tissues -> {}\n",
                ctx.isoform_rows.len(),
                ctx.records.len(),
                ctx.tissues.len(),
                settings.output_path.display()
            ));
        }
        Task::Validate(_) => {
            out.push_str(&format!(
                "Validate: {} records, {} complexes\n",
                ctx.records.len(),
                ctx.complexes.len()
            ));
        }
    }

    Ok(out)
}
