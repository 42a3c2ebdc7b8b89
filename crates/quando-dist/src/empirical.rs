//! Sample-backed distribution
//!
//! Wraps raw draws (historical observations, posterior samples) in the
//! distribution capability so they can feed a dotplot with no parametric
//! fit in between. Quantiles interpolate linearly between order
//! statistics, so the quantile function is continuous and monotone.

use serde::{Deserialize, Serialize};

use crate::distribution::{validate_level, Distribution};
use crate::error::{DistributionError, DistributionResult};

/// Distribution backed by a finite sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empirical {
    /// Sorted finite values
    values: Vec<f64>,
}

impl Empirical {
    /// Build from raw samples. Non-finite values are dropped; an empty
    /// (or all-non-finite) sample is an error.
    pub fn from_samples(data: &[f64]) -> DistributionResult<Self> {
        let mut values: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        if values.is_empty() {
            return Err(DistributionError::EmptySample);
        }
        values.sort_by(f64::total_cmp);
        Ok(Self { values })
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The sorted sample.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Linear interpolation between order statistics at position
    /// p * (n - 1).
    fn interpolated_quantile(&self, p: f64) -> f64 {
        let n = self.values.len();
        if n == 1 {
            return self.values[0];
        }
        let h = p * (n - 1) as f64;
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        let w = h - lo as f64;
        self.values[lo] * (1.0 - w) + self.values[hi] * w
    }
}

impl Distribution for Empirical {
    fn inv_cdf(&self, p: f64) -> DistributionResult<f64> {
        validate_level(p)?;
        Ok(self.interpolated_quantile(p))
    }

    fn cdf(&self, x: f64) -> Option<f64> {
        let below = self.values.partition_point(|&v| v <= x);
        Some(below as f64 / self.values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_is_an_error() {
        assert!(matches!(
            Empirical::from_samples(&[]),
            Err(DistributionError::EmptySample)
        ));
        assert!(matches!(
            Empirical::from_samples(&[f64::NAN, f64::INFINITY]),
            Err(DistributionError::EmptySample)
        ));
    }

    #[test]
    fn test_non_finite_values_dropped() {
        let d = Empirical::from_samples(&[2.0, f64::NAN, 1.0, 3.0]).unwrap();
        assert_eq!(d.len(), 3);
        assert_eq!(d.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_median_of_uniform_grid() {
        let data: Vec<f64> = (1..=101).map(|x| x as f64).collect();
        let d = Empirical::from_samples(&data).unwrap();
        assert!((d.inv_cdf(0.5).unwrap() - 51.0).abs() < 1e-12);
    }

    #[test]
    fn test_interpolation_between_order_statistics() {
        let d = Empirical::from_samples(&[0.0, 10.0]).unwrap();
        assert!((d.inv_cdf(0.25).unwrap() - 2.5).abs() < 1e-12);
        assert!((d.inv_cdf(0.75).unwrap() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_is_a_point_mass() {
        let d = Empirical::from_samples(&[4.2]).unwrap();
        assert_eq!(d.inv_cdf(0.1).unwrap(), 4.2);
        assert_eq!(d.inv_cdf(0.9).unwrap(), 4.2);
    }

    #[test]
    fn test_cdf_counts_ranks() {
        let d = Empirical::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(d.cdf(0.5), Some(0.0));
        assert_eq!(d.cdf(2.0), Some(0.5));
        assert_eq!(d.cdf(10.0), Some(1.0));
    }

    #[test]
    fn test_density_not_provided() {
        let d = Empirical::from_samples(&[1.0, 2.0]).unwrap();
        assert!(d.density(1.5).is_none());
    }
}
