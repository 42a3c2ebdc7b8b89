//! Quantile generation
//!
//! Turns a distribution and a dot count into representative values:
//! evaluate the quantile function at `n` evenly spaced probability
//! levels. Unlike drawing random samples, the result is deterministic
//! and stays faithful to the distribution even at small `n`.

use quando_dist::{Distribution, DistributionError};

use crate::error::{DotplotError, DotplotResult};

/// Evenly spaced probability levels `(i - 0.5) / n` for `i = 1..=n`.
///
/// Levels are strictly inside (0, 1), strictly increasing, and
/// symmetric around 0.5, so the distribution is never evaluated at its
/// (possibly infinite) tail endpoints.
pub fn probability_levels(n: usize) -> DotplotResult<Vec<f64>> {
    if n == 0 {
        return Err(DotplotError::InvalidSampleCount { n });
    }
    Ok((1..=n).map(|i| (i as f64 - 0.5) / n as f64).collect())
}

/// Evaluate the distribution's quantile function at `n` evenly spaced
/// levels.
///
/// The output is non-decreasing for any monotone quantile function and
/// bit-identical across calls with the same inputs. A non-finite
/// quantile at any level is reported as a domain error carrying the
/// offending level, so the caller can adjust distribution parameters.
pub fn quantiles<D>(dist: &D, n: usize) -> DotplotResult<Vec<f64>>
where
    D: Distribution + ?Sized,
{
    let levels = probability_levels(n)?;
    let mut values = Vec::with_capacity(n);
    for &level in &levels {
        let x = dist.inv_cdf(level)?;
        if !x.is_finite() {
            return Err(DistributionError::Domain { level }.into());
        }
        values.push(x);
    }
    Ok(values)
}
