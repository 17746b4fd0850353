mod metric;
mod tester;

use std::fmt;

use anyhow::Result;

use crate::math::stats::binomial_test_two_sided;

pub use metric::{Metric, MetricExtractor, MetricKind};
pub use tester::{EnrichmentTester, compare};

/// Null success probability for the complex-level sign test.
pub const NULL_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
    Skipped,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Success => "success",
            Verdict::Failure => "failure",
            Verdict::Skipped => "skipped",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplexComparison {
    pub complex_id: String,
    pub n_ned: usize,
    pub n_ed: usize,
    pub mean_ned: Option<f64>,
    pub mean_ed: Option<f64>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentOutcome {
    pub successes: u64,
    pub trials: u64,
    pub skipped: u64,
    /// `None` when no complex qualified as a trial.
    pub p_value: Option<f64>,
}

impl EnrichmentOutcome {
    pub fn from_comparisons(comparisons: &[ComplexComparison]) -> Result<Self> {
        let mut successes = 0u64;
        let mut trials = 0u64;
        let mut skipped = 0u64;
        for c in comparisons {
            match c.verdict {
                Verdict::Success => {
                    trials += 1;
                    successes += 1;
                }
                Verdict::Failure => trials += 1,
                Verdict::Skipped => skipped += 1,
            }
        }
        let p_value = if trials == 0 {
            None
        } else {
            Some(binomial_test_two_sided(successes, trials, NULL_PROBABILITY)?)
        };
        Ok(Self {
            successes,
            trials,
            skipped,
            p_value,
        })
    }

    pub fn is_defined(&self) -> bool {
        self.p_value.is_some()
    }

    /// `successes trials p_value`, with `NA` for an undefined test.
    pub fn triple(&self) -> String {
        match self.p_value {
            Some(p) => format!("{} {} {}", self.successes, self.trials, p),
            None => format!("{} {} NA", self.successes, self.trials),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnrichmentRun {
    pub comparisons: Vec<ComplexComparison>,
    pub outcome: EnrichmentOutcome,
}
