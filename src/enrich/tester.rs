use anyhow::Result;
use tracing::{debug, info};

use crate::complex::{ComplexStructure, aggregate};
use crate::enrich::{
    ComplexComparison, EnrichmentOutcome, EnrichmentRun, MetricExtractor, Verdict,
};
use crate::math::stats::mean;
use crate::proteins::{HomologMap, ProteinRecord, ProteinTable};

#[cfg(feature = "mt")]
use rayon::prelude::*;

/// One engine for every metric variant: build the protein table through the
/// metric extractor (and optional homolog translation), compare every complex,
/// then reduce the verdicts into a binomial test.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentTester {
    threads: usize,
}

impl EnrichmentTester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Worker threads for the per-complex map step (0 = rayon default).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn run_records<E>(
        &self,
        records: &[ProteinRecord],
        metric: &E,
        homologs: Option<&HomologMap>,
        complexes: &[ComplexStructure],
    ) -> Result<(ProteinTable, EnrichmentRun)>
    where
        E: MetricExtractor + ?Sized,
    {
        let table = ProteinTable::build(records, metric, homologs);
        let stats = table.stats();
        info!(
            records = stats.records,
            entries = stats.entries,
            classified = stats.classified,
            homolog_misses = stats.homolog_misses,
            metric_misses = stats.metric_misses,
            "protein_table_built"
        );
        let run = self.run(complexes, &table)?;
        Ok((table, run))
    }

    pub fn run(&self, complexes: &[ComplexStructure], table: &ProteinTable) -> Result<EnrichmentRun> {
        let comparisons = self.compare_all(complexes, table)?;
        let outcome = EnrichmentOutcome::from_comparisons(&comparisons)?;
        debug!(
            successes = outcome.successes,
            trials = outcome.trials,
            skipped = outcome.skipped,
            "enrichment_reduced"
        );
        Ok(EnrichmentRun {
            comparisons,
            outcome,
        })
    }

    #[cfg(feature = "mt")]
    fn compare_all(
        &self,
        complexes: &[ComplexStructure],
        table: &ProteinTable,
    ) -> Result<Vec<ComplexComparison>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
        // par_iter().collect() preserves complex order.
        Ok(pool.install(|| complexes.par_iter().map(|c| compare(c, table)).collect()))
    }

    #[cfg(not(feature = "mt"))]
    fn compare_all(
        &self,
        complexes: &[ComplexStructure],
        table: &ProteinTable,
    ) -> Result<Vec<ComplexComparison>> {
        let _ = self.threads;
        Ok(complexes.iter().map(|c| compare(c, table)).collect())
    }
}

/// Win/loss decision for one complex. Ties (`mean_ned == mean_ed`) count as a
/// success.
pub fn compare(complex: &ComplexStructure, table: &ProteinTable) -> ComplexComparison {
    let groups = aggregate(complex, table);
    let mean_ned = mean(&groups.ned_values);
    let mean_ed = mean(&groups.ed_values);
    let verdict = match (mean_ned, mean_ed) {
        (Some(n), Some(e)) if groups.is_comparable() => {
            if n >= e {
                Verdict::Success
            } else {
                Verdict::Failure
            }
        }
        _ => Verdict::Skipped,
    };
    ComplexComparison {
        complex_id: complex.id.clone(),
        n_ned: groups.ned_values.len(),
        n_ed: groups.ed_values.len(),
        mean_ned,
        mean_ed,
        verdict,
    }
}
