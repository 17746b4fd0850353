use std::collections::HashMap;

use serde::Serialize;

use crate::enrich::MetricExtractor;
use crate::proteins::{DecayClass, HomologMap, ProteinRecord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProteinEntry {
    pub value: f64,
    pub decay: DecayClass,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub records: usize,
    pub homolog_misses: usize,
    pub metric_misses: usize,
    pub entries: usize,
    pub classified: usize,
}

/// Protein metric table for one run: identifier -> (metric value, decay class).
#[derive(Debug, Clone, Default)]
pub struct ProteinTable {
    entries: HashMap<String, ProteinEntry>,
    stats: TableStats,
}

impl ProteinTable {
    /// Builds the table through an optional homolog translation followed by
    /// metric extraction. Records that fail either step are skipped, and a
    /// later record overwrites an earlier one with the same final identifier.
    pub fn build<E>(records: &[ProteinRecord], metric: &E, homologs: Option<&HomologMap>) -> Self
    where
        E: MetricExtractor + ?Sized,
    {
        let mut entries = HashMap::with_capacity(records.len());
        let mut stats = TableStats {
            records: records.len(),
            ..TableStats::default()
        };

        for record in records {
            let id = match homologs {
                Some(map) => match map.translate(&record.id) {
                    Some(target) => target,
                    None => {
                        stats.homolog_misses += 1;
                        continue;
                    }
                },
                None => record.id.as_str(),
            };
            let Some(value) = metric.extract(id, record) else {
                stats.metric_misses += 1;
                continue;
            };
            entries.insert(
                id.to_string(),
                ProteinEntry {
                    value,
                    decay: record.decay,
                },
            );
        }

        stats.entries = entries.len();
        stats.classified = entries.values().filter(|e| e.decay.is_classified()).count();
        Self { entries, stats }
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64, DecayClass)>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        for (id, value, decay) in entries {
            map.insert(id.into(), ProteinEntry { value, decay });
        }
        let stats = TableStats {
            records: map.len(),
            entries: map.len(),
            classified: map.values().filter(|e| e.decay.is_classified()).count(),
            ..TableStats::default()
        };
        Self {
            entries: map,
            stats,
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&ProteinEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> &TableStats {
        &self.stats
    }
}
