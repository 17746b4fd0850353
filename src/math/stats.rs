//! Statistical primitives for the complex-level comparison.

use anyhow::{Result, bail};
use statrs::distribution::{Binomial, Discrete, DiscreteCDF};

/// Relative tolerance used when collecting outcomes "as extreme as" the
/// observed one, so that symmetric tails are not lost to rounding.
const PMF_RTOL: f64 = 1.0 + 1e-7;

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Exact two-sided binomial test: the probability, under `Binomial(trials, p)`,
/// of every outcome whose mass does not exceed that of `successes`.
///
/// `trials == 0` is rejected; callers report that case as an undefined test.
pub fn binomial_test_two_sided(successes: u64, trials: u64, p: f64) -> Result<f64> {
    if trials == 0 {
        bail!("binomial test is undefined for zero trials");
    }
    if successes > trials {
        bail!("successes ({}) exceed trials ({})", successes, trials);
    }
    if !(0.0..=1.0).contains(&p) {
        bail!("null probability {} outside [0, 1]", p);
    }

    let dist = Binomial::new(p, trials)
        .map_err(|e| anyhow::anyhow!("invalid binomial parameters: {}", e))?;
    let expected = trials as f64 * p;
    let observed = successes as f64;
    let threshold = dist.pmf(successes) * PMF_RTOL;

    let pval = if observed < expected {
        let start = expected.ceil() as u64;
        let extreme = (start..=trials)
            .filter(|&k| dist.pmf(k) <= threshold)
            .count() as u64;
        dist.cdf(successes) + upper_tail(&dist, trials - extreme)
    } else if observed > expected {
        let end = expected.floor() as u64;
        let extreme = (0..=end).filter(|&k| dist.pmf(k) <= threshold).count() as u64;
        lower_tail(&dist, extreme) + dist.sf(successes - 1)
    } else {
        1.0
    };

    Ok(pval.clamp(0.0, 1.0))
}

/// P(X > k).
fn upper_tail(dist: &Binomial, k: u64) -> f64 {
    dist.sf(k)
}

/// P(X < k).
fn lower_tail(dist: &Binomial, k: u64) -> f64 {
    if k == 0 { 0.0 } else { dist.cdf(k - 1) }
}
