//! Normal distribution N(μ, σ²)

use serde::{Deserialize, Serialize};

use crate::distribution::{validate_level, Distribution};
use crate::error::{DistributionError, DistributionResult};
use crate::special;

/// Normal distribution with mean `mu` and standard deviation `sigma`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Create a normal distribution. Requires finite `mu` and `sigma > 0`.
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

    /// The standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Distribution for Normal {
    fn inv_cdf(&self, p: f64) -> DistributionResult<f64> {
        validate_level(p)?;
        Ok(self.mu + self.sigma * special::normal_quantile(p))
    }

    fn cdf(&self, x: f64) -> Option<f64> {
        Some(special::normal_cdf((x - self.mu) / self.sigma))
    }

    fn density(&self, x: f64) -> Option<f64> {
        let z = (x - self.mu) / self.sigma;
        Some(special::normal_pdf(z) / self.sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_median_is_mu() {
        let d = Normal::new(3.5, 2.0).unwrap();
        assert!((d.inv_cdf(0.5).unwrap() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_quantiles_symmetric_about_mean() {
        let d = Normal::standard();
        let upper = d.inv_cdf(0.975).unwrap();
        let lower = d.inv_cdf(0.025).unwrap();
        assert!((upper + lower).abs() < 1e-9);
        assert!((upper - 1.959_964).abs() < 1e-5);
    }

    #[test]
    fn test_level_boundaries_are_domain_errors() {
        let d = Normal::standard();
        assert!(matches!(
            d.inv_cdf(0.0),
            Err(DistributionError::Domain { .. })
        ));
        assert!(matches!(
            d.inv_cdf(1.0),
            Err(DistributionError::Domain { .. })
        ));
    }

    #[test]
    fn test_cdf_and_density_at_center() {
        let d = Normal::new(1.0, 2.0).unwrap();
        assert!((d.cdf(1.0).unwrap() - 0.5).abs() < 1e-12);
        let peak = d.density(1.0).unwrap();
        // 1 / (sigma * sqrt(2 pi))
        assert!((peak - 0.199_471_140_2).abs() < 1e-9);
    }
}
