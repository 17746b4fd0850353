use serde::{Deserialize, Serialize};

use crate::enrich::MetricKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSettings {
    pub metric: Option<MetricKind>,
    pub organism: Option<String>,
    pub homolog_translation: bool,
    pub threads: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Coverage {
    pub records_loaded: u64,
    pub table_entries: u64,
    pub classified_entries: u64,
    pub homolog_misses: u64,
    pub metric_misses: u64,
    pub complexes_total: u64,
    pub complexes_tested: u64,
    pub complexes_skipped: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    Tested,
    Undefined,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub successes: u64,
    pub trials: u64,
    pub null_probability: f64,
    pub p_value: Option<f64>,
    pub status: TestStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HalflifeV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub settings: RunSettings,
    pub coverage: Coverage,
    pub result: Option<EnrichmentResult>,
    pub warnings: Vec<String>,
}

impl HalflifeV1 {
    pub fn empty(tool_version: &str, threads: usize) -> Self {
        Self {
            tool: "kira-halflife".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            settings: RunSettings {
                metric: None,
                organism: None,
                homolog_translation: false,
                threads,
            },
            coverage: Coverage::default(),
            result: None,
            warnings: Vec::new(),
        }
    }
}
