//! Distribution capability interface
//!
//! A distribution is anything that can answer "which value sits at
//! probability p?" through its quantile function (inverse CDF). The
//! forward CDF and density are optional extras for diagnostic overlays;
//! consumers that only build dotplots never need them.

use crate::error::{DistributionError, DistributionResult};

/// A continuous probability distribution exposed through its quantile
/// function.
///
/// `inv_cdf` is the one required capability. Implementations are
/// immutable value types: construct once, evaluate freely.
pub trait Distribution {
    /// Inverse CDF: the value `x` with `P(X <= x) = p`.
    ///
    /// `p` must lie strictly inside (0, 1). Returns
    /// [`DistributionError::Domain`] when the quantile is undefined or
    /// non-finite at `p`.
    fn inv_cdf(&self, p: f64) -> DistributionResult<f64>;

    /// Forward CDF, for diagnostic overlays. `None` when the family
    /// does not provide one.
    fn cdf(&self, _x: f64) -> Option<f64> {
        None
    }

    /// Probability density, for diagnostic overlays. `None` when the
    /// family does not provide one.
    fn density(&self, _x: f64) -> Option<f64> {
        None
    }
}

/// Reject probability levels outside the open interval (0, 1).
///
/// Levels of exactly 0 or 1 would ask for infinite tail quantiles.
pub fn validate_level(p: f64) -> DistributionResult<()> {
    if p.is_finite() && p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(DistributionError::Domain { level: p })
    }
}
