use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::ctx::{Ctx, Task};
use crate::enrich::{EnrichmentTester, Metric, MetricKind, NULL_PROBABILITY};
use crate::pipeline::Stage;
use crate::schema::v1::{EnrichmentResult, TestStatus};

pub struct Stage3Enrich;

impl Stage3Enrich {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Enrich {
    fn name(&self) -> &'static str {
        "stage3_enrich"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Task::Enrich(settings) = &ctx.task else {
            bail!("enrichment stage requires the enrich task");
        };
        let metric = match settings.metric {
            MetricKind::Abundance => Metric::Abundance,
            MetricKind::LogAbundance => Metric::LogAbundance,
            MetricKind::TissueCount => Metric::TissueCount(
                ctx.tissue_counts
                    .take()
                    .context("tissue counts not loaded before Stage 3")?,
            ),
        };

        let tester = EnrichmentTester::new().with_threads(ctx.threads);
        let (table, run) =
            tester.run_records(&ctx.records, &metric, ctx.homologs.as_ref(), &ctx.complexes)?;
        let stats = table.stats();
        let outcome = &run.outcome;

        match outcome.p_value {
            Some(p) => info!(
                metric = %metric.kind(),
                successes = outcome.successes,
                trials = outcome.trials,
                skipped = outcome.skipped,
                p_value = p,
                "binomial_test_done"
            ),
            None => {
                warn!(
                    metric = %metric.kind(),
                    skipped = outcome.skipped,
                    "no complex had both NED and ED subunits; test undefined"
                );
                ctx.warnings
                    .push("binomial test undefined: zero trials".to_string());
            }
        }
        if stats.homolog_misses > 0 {
            ctx.warnings.push(format!(
                "{} records had no homolog mapping and were skipped",
                stats.homolog_misses
            ));
        }

        let coverage = &mut ctx.report.coverage;
        coverage.table_entries = stats.entries as u64;
        coverage.classified_entries = stats.classified as u64;
        coverage.homolog_misses = stats.homolog_misses as u64;
        coverage.metric_misses = stats.metric_misses as u64;
        coverage.complexes_tested = outcome.trials;
        coverage.complexes_skipped = outcome.skipped;
        ctx.report.result = Some(EnrichmentResult {
            successes: outcome.successes,
            trials: outcome.trials,
            null_probability: NULL_PROBABILITY,
            p_value: outcome.p_value,
            status: if outcome.is_defined() {
                TestStatus::Tested
            } else {
                TestStatus::Undefined
            },
        });

        if let Metric::TissueCount(counts) = metric {
            ctx.tissue_counts = Some(counts);
        }
        ctx.enrichment = Some(run);
        Ok(())
    }
}
