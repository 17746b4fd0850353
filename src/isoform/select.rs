use anyhow::Result;

use crate::isoform::{ExpressionMatrix, IsoformExpressionVector, RepresentativeRow};
use crate::proteins::{IsoformMap, ProteinRecord};

#[cfg(feature = "mt")]
use rayon::prelude::*;

/// Best-covered vector first (fewest missing tissues), then the highest mean
/// of present values. All-missing vectors and vectors with a non-finite mean
/// never win, even alone. Full ties keep the input order.
pub fn select_representative(
    vectors: Vec<IsoformExpressionVector>,
) -> Option<IsoformExpressionVector> {
    let mut keyed: Vec<(usize, f64, IsoformExpressionVector)> = vectors
        .into_iter()
        .filter_map(|v| {
            let mean = v.present_mean().filter(|m| m.is_finite())?;
            Some((v.missing_count(), mean, v))
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.total_cmp(&a.1)));
    keyed.into_iter().next().map(|(_, _, v)| v)
}

/// Picks one representative vector per protein from the isoform matrices.
pub struct IsoformSelector<'a> {
    primary: &'a ExpressionMatrix,
    fallback: Option<&'a ExpressionMatrix>,
    isoforms: Option<&'a IsoformMap>,
    threads: usize,
}

impl<'a> IsoformSelector<'a> {
    pub fn new(primary: &'a ExpressionMatrix) -> Self {
        Self {
            primary,
            fallback: None,
            isoforms: None,
            threads: 0,
        }
    }

    /// Consulted only when the primary matrix yields no usable vector.
    pub fn with_fallback(mut self, fallback: Option<&'a ExpressionMatrix>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Without a map, the protein identifier is its only candidate.
    pub fn with_isoform_map(mut self, isoforms: Option<&'a IsoformMap>) -> Self {
        self.isoforms = isoforms;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn select_for(&self, record: &ProteinRecord) -> Option<RepresentativeRow> {
        let candidates: Vec<&str> = match self.isoforms {
            Some(map) => map.isoforms(&record.id)?.iter().map(String::as_str).collect(),
            None => vec![record.id.as_str()],
        };
        let vector = pick(self.primary, &candidates)
            .or_else(|| self.fallback.and_then(|m| pick(m, &candidates)))?;
        Some(RepresentativeRow {
            protein: record.id.clone(),
            vector,
            description: record.description.clone(),
        })
    }

    /// Output rows follow record order; proteins without a usable vector are
    /// dropped.
    #[cfg(feature = "mt")]
    pub fn select_all(&self, records: &[ProteinRecord]) -> Result<Vec<RepresentativeRow>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
        let rows: Vec<Option<RepresentativeRow>> =
            pool.install(|| records.par_iter().map(|r| self.select_for(r)).collect());
        Ok(rows.into_iter().flatten().collect())
    }

    #[cfg(not(feature = "mt"))]
    pub fn select_all(&self, records: &[ProteinRecord]) -> Result<Vec<RepresentativeRow>> {
        let _ = self.threads;
        Ok(records.iter().filter_map(|r| self.select_for(r)).collect())
    }
}

fn pick(matrix: &ExpressionMatrix, candidates: &[&str]) -> Option<IsoformExpressionVector> {
    let vectors = candidates
        .iter()
        .filter_map(|id| {
            matrix
                .get(id)
                .map(|values| IsoformExpressionVector::new(*id, values.to_vec()))
        })
        .collect();
    select_representative(vectors)
}
