use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::proteins::ProteinRecord;

/// Scalar extracted from a protein record for the NED/ED comparison.
///
/// `id` is the identifier the record is stored under, i.e. after homolog
/// translation when one is configured.
pub trait MetricExtractor {
    fn extract(&self, id: &str, record: &ProteinRecord) -> Option<f64>;
}

impl<F> MetricExtractor for F
where
    F: Fn(&str, &ProteinRecord) -> Option<f64>,
{
    fn extract(&self, id: &str, record: &ProteinRecord) -> Option<f64> {
        self(id, record)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    Abundance,
    LogAbundance,
    TissueCount,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Abundance => "abundance",
            MetricKind::LogAbundance => "log-abundance",
            MetricKind::TissueCount => "tissue-count",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum Metric {
    Abundance,
    /// Natural log; records with a non-positive abundance have no value.
    LogAbundance,
    /// Tissue coverage keyed by the stored identifier.
    TissueCount(HashMap<String, u32>),
}

impl Metric {
    pub fn kind(&self) -> MetricKind {
        match self {
            Metric::Abundance => MetricKind::Abundance,
            Metric::LogAbundance => MetricKind::LogAbundance,
            Metric::TissueCount(_) => MetricKind::TissueCount,
        }
    }
}

impl MetricExtractor for Metric {
    fn extract(&self, id: &str, record: &ProteinRecord) -> Option<f64> {
        match self {
            Metric::Abundance => Some(record.abundance),
            Metric::LogAbundance => (record.abundance > 0.0).then(|| record.abundance.ln()),
            Metric::TissueCount(counts) => counts.get(id).map(|&c| f64::from(c)),
        }
    }
}
