//! Box-Cox-t distribution (GAMLSS BCT parameterization)
//!
//! A four-parameter family for positive, skewed, heavy-tailed outcomes:
//! location `mu > 0`, scale `sigma > 0`, skewness `nu` (the Box-Cox
//! power), and tail weight `tau > 0` (t degrees of freedom). The
//! transformed variable
//!
//! ```text
//! z = ((y / mu)^nu - 1) / (nu * sigma)      (nu != 0)
//! z = ln(y / mu) / sigma                    (nu == 0)
//! ```
//!
//! follows a Student-t with `tau` degrees of freedom, truncated so that
//! y stays positive. An additive location `shift` moves the whole
//! support, which is how arrival-time models offset predictions from a
//! reference minute.
//!
//! With `nu = 0` and large `tau` the family collapses to
//! LogNormal(ln mu, sigma).

use serde::{Deserialize, Serialize};

use crate::distribution::{validate_level, Distribution};
use crate::error::{DistributionError, DistributionResult};
use crate::special;

/// Box-Cox-t distribution with optional additive location shift
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxCoxT {
    mu: f64,
    sigma: f64,
    nu: f64,
    tau: f64,
    shift: f64,
}

impl BoxCoxT {
    /// Create an unshifted BCT distribution.
    ///
    /// Requires `mu > 0`, `sigma > 0`, `tau > 0`, all parameters finite.
    pub fn new(mu: f64, sigma: f64, nu: f64, tau: f64) -> DistributionResult<Self> {
        Self::shifted(mu, sigma, nu, tau, 0.0)
    }

    /// Create a BCT distribution whose support starts at `shift`.
    pub fn shifted(mu: f64, sigma: f64, nu: f64, tau: f64, shift: f64) -> DistributionResult<Self> {
        if !(mu.is_finite() && mu > 0.0) {
            return Err(DistributionError::InvalidParameter {
                name: "mu",
                value: mu,
            });
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(DistributionError::InvalidParameter {
                name: "sigma",
                value: sigma,
            });
        }
        if !nu.is_finite() {
            return Err(DistributionError::InvalidParameter {
                name: "nu",
                value: nu,
            });
        }
        if !(tau.is_finite() && tau > 0.0) {
            return Err(DistributionError::InvalidParameter {
                name: "tau",
                value: tau,
            });
        }
        if !shift.is_finite() {
            return Err(DistributionError::InvalidParameter {
                name: "shift",
                value: shift,
            });
        }
        Ok(Self {
            mu,
            sigma,
            nu,
            tau,
            shift,
        })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn nu(&self) -> f64 {
        self.nu
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Probability mass of the untruncated t below 1/(sigma |nu|); the
    /// truncation normalizer that keeps the support positive.
    fn truncation_mass(&self) -> f64 {
        if self.nu == 0.0 {
            1.0
        } else {
            special::student_t_cdf(1.0 / (self.sigma * self.nu.abs()), self.tau)
        }
    }

    /// The t-scale value for a point `y` on the positive (unshifted) scale.
    fn z_of(&self, y: f64) -> f64 {
        if self.nu == 0.0 {
            (y / self.mu).ln() / self.sigma
        } else {
            ((y / self.mu).powf(self.nu) - 1.0) / (self.nu * self.sigma)
        }
    }
}

impl Distribution for BoxCoxT {
    fn inv_cdf(&self, p: f64) -> DistributionResult<f64> {
        validate_level(p)?;
        let y = if self.nu == 0.0 {
            let z = special::student_t_quantile(p, self.tau);
            self.mu * (self.sigma * z).exp()
        } else {
            let c = self.truncation_mass();
            let z = if self.nu < 0.0 {
                special::student_t_quantile(p * c, self.tau)
            } else {
                special::student_t_quantile(1.0 - (1.0 - p) * c, self.tau)
            };
            let base = 1.0 + self.nu * self.sigma * z;
            if base <= 0.0 {
                return Err(DistributionError::Domain { level: p });
            }
            self.mu * base.powf(1.0 / self.nu)
        };
        let x = y + self.shift;
        if !x.is_finite() {
            return Err(DistributionError::Domain { level: p });
        }
        Ok(x)
    }

    fn cdf(&self, x: f64) -> Option<f64> {
        let y = x - self.shift;
        if y <= 0.0 {
            return Some(0.0);
        }
        let z = self.z_of(y);
        let c = self.truncation_mass();
        let below = special::student_t_cdf(z, self.tau);
        let p = if self.nu > 0.0 {
            let cut = special::student_t_cdf(-1.0 / (self.sigma * self.nu), self.tau);
            (below - cut) / c
        } else {
            below / c
        };
        Some(p.clamp(0.0, 1.0))
    }

    fn density(&self, x: f64) -> Option<f64> {
        let y = x - self.shift;
        if y <= 0.0 {
            return Some(0.0);
        }
        let z = self.z_of(y);
        let jacobian = y.powf(self.nu - 1.0) / (self.mu.powf(self.nu) * self.sigma);
        Some(special::student_t_pdf(z, self.tau) * jacobian / self.truncation_mass())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lognormal::LogNormal;

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(BoxCoxT::new(0.0, 0.2, 0.0, 4.0).is_err());
        assert!(BoxCoxT::new(-2.0, 0.2, 0.0, 4.0).is_err());
        assert!(BoxCoxT::new(11.4, 0.0, 0.0, 4.0).is_err());
        assert!(BoxCoxT::new(11.4, 0.2, 0.0, 0.0).is_err());
        assert!(BoxCoxT::new(11.4, 0.2, f64::NAN, 4.0).is_err());
        assert!(BoxCoxT::shifted(11.4, 0.2, 0.0, 4.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_degenerates_to_log_normal() {
        // nu = 0 with very heavy tau is analytically LogNormal(ln mu, sigma)
        let bct = BoxCoxT::new(11.4, 0.2, 0.0, 1e6).unwrap();
        let ln = LogNormal::from_median(11.4, 0.2).unwrap();
        for i in 1..20 {
            let p = i as f64 / 20.0;
            let a = bct.inv_cdf(p).unwrap();
            let b = ln.inv_cdf(p).unwrap();
            assert!(
                ((a - b) / b).abs() < 1e-6,
                "p = {p}: BCT {a} vs LogNormal {b}"
            );
        }
    }

    #[test]
    fn test_shift_translates_quantiles() {
        let base = BoxCoxT::new(11.4, 0.2, 0.3, 5.0).unwrap();
        let moved = BoxCoxT::shifted(11.4, 0.2, 0.3, 5.0, 2.5).unwrap();
        for &p in &[0.1, 0.5, 0.9] {
            let a = base.inv_cdf(p).unwrap();
            let b = moved.inv_cdf(p).unwrap();
            assert!((b - a - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_quantiles_monotone_under_skew() {
        for &nu in &[-0.7, -0.2, 0.0, 0.4, 1.3] {
            let d = BoxCoxT::new(10.0, 0.3, nu, 4.0).unwrap();
            let mut prev = f64::NEG_INFINITY;
            for i in 1..40 {
                let p = i as f64 / 40.0;
                let q = d.inv_cdf(p).unwrap();
                assert!(q >= prev, "nu = {nu}: quantiles not monotone at p = {p}");
                prev = q;
            }
        }
    }

    #[test]
    fn test_cdf_inverts_quantile() {
        for &nu in &[-0.5, 0.0, 0.8] {
            let d = BoxCoxT::new(11.4, 0.25, nu, 6.0).unwrap();
            for &p in &[0.05, 0.3, 0.5, 0.7, 0.95] {
                let x = d.inv_cdf(p).unwrap();
                let back = d.cdf(x).unwrap();
                assert!((back - p).abs() < 1e-8, "nu = {nu}, p = {p}, got {back}");
            }
        }
    }

    #[test]
    fn test_support_starts_at_shift() {
        let d = BoxCoxT::shifted(11.4, 0.2, 0.0, 4.0, 3.0).unwrap();
        assert_eq!(d.cdf(3.0), Some(0.0));
        assert_eq!(d.cdf(2.0), Some(0.0));
        assert_eq!(d.density(2.9), Some(0.0));
        assert!(d.inv_cdf(0.01).unwrap() > 3.0);
    }
}
