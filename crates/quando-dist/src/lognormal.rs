//! Log-normal distribution
//!
//! Parameterized on the log scale: if ln X ~ N(mu, sigma²) then
//! X ~ LogNormal(mu, sigma). The median is exp(mu), which makes
//! `from_median` the convenient constructor when a model reports a
//! central prediction directly (e.g. "the bus arrives around minute
//! 11.4").

use serde::{Deserialize, Serialize};

use crate::distribution::{validate_level, Distribution};
use crate::error::{DistributionError, DistributionResult};
use crate::special;

/// Log-normal distribution with log-scale location `mu` and scale `sigma`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogNormal {
    mu: f64,
    sigma: f64,
}

impl LogNormal {
    /// Create from log-scale parameters. Requires finite `mu` and `sigma > 0`.
    pub fn new(mu: f64, sigma: f64) -> DistributionResult<Self> {
        if !mu.is_finite() {
            return Err(DistributionError::InvalidParameter {
                name: "mu",
                value: mu,
            });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(DistributionError::InvalidParameter {
                name: "sigma",
                value: sigma,
            });
        }
        Ok(Self { mu, sigma })
    }

    /// Create from the distribution's median on the natural scale.
    pub fn from_median(median: f64, sigma: f64) -> DistributionResult<Self> {
        if !(median.is_finite() && median > 0.0) {
            return Err(DistributionError::InvalidParameter {
                name: "median",
                value: median,
            });
        }
        Self::new(median.ln(), sigma)
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Median on the natural scale, exp(mu).
    pub fn median(&self) -> f64 {
        self.mu.exp()
    }
}

impl Distribution for LogNormal {
    fn inv_cdf(&self, p: f64) -> DistributionResult<f64> {
        validate_level(p)?;
        Ok((self.mu + self.sigma * special::normal_quantile(p)).exp())
    }

    fn cdf(&self, x: f64) -> Option<f64> {
        if x <= 0.0 {
            return Some(0.0);
        }
        Some(special::normal_cdf((x.ln() - self.mu) / self.sigma))
    }

    fn density(&self, x: f64) -> Option<f64> {
        if x <= 0.0 {
            return Some(0.0);
        }
        let z = (x.ln() - self.mu) / self.sigma;
        Some(special::normal_pdf(z) / (x * self.sigma))
    }
}
