//! Dotplot assembly and counting queries
//!
//! A [`Dotplot`] is the immutable product of the whole pipeline:
//! quantile generation, bin-width resolution, and stacking. It is a
//! pure function of (distribution, n, bin-width policy) and carries
//! everything a renderer needs.

use serde::{Deserialize, Serialize};

use quando_dist::Distribution;

use crate::binwidth::{BinWidthStrategy, IqrBinWidth};
use crate::error::{DotplotError, DotplotResult};
use crate::layout::stack_dots;
use crate::quantile::{probability_levels, quantiles};

/// One rendering unit of a quantile dotplot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    /// True quantile value; counting and queries always use this
    pub value: f64,
    /// Probability level the value was drawn at
    pub level: f64,
    /// Display x of the column this dot stacks into
    pub bin_center: f64,
    /// Vertical layer inside the column, 0 at the baseline
    pub stack: u32,
}

/// An immutable quantile dotplot: n dots in non-decreasing value order
/// plus the bin width they were stacked with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dotplot {
    dots: Vec<Dot>,
    bin_width: f64,
}

impl Dotplot {
    /// Build a dotplot with an explicit bin width.
    pub fn from_distribution<D>(dist: &D, n: usize, bin_width: f64) -> DotplotResult<Self>
    where
        D: Distribution + ?Sized,
    {
        let values = quantiles(dist, n)?;
        Self::assemble(values, bin_width)
    }

    /// Build a dotplot, choosing the bin width with the default
    /// [`IqrBinWidth`] heuristic.
    pub fn auto<D>(dist: &D, n: usize) -> DotplotResult<Self>
    where
        D: Distribution + ?Sized,
    {
        Self::with_strategy(dist, n, &IqrBinWidth::default())
    }

    /// Build a dotplot with a caller-supplied bin-width policy.
    pub fn with_strategy<D, S>(dist: &D, n: usize, strategy: &S) -> DotplotResult<Self>
    where
        D: Distribution + ?Sized,
        S: BinWidthStrategy + ?Sized,
    {
        let values = quantiles(dist, n)?;
        let bin_width = strategy.bin_width(&values);
        Self::assemble(values, bin_width)
    }

    /// Build from pre-computed quantile values, e.g. posterior draws
    /// already reduced to order statistics.
    ///
    /// Values must be sorted ascending; levels are assigned as
    /// `(i - 0.5) / n` by position.
    pub fn from_quantiles(values: Vec<f64>, bin_width: f64) -> DotplotResult<Self> {
        Self::assemble(values, bin_width)
    }

    fn assemble(values: Vec<f64>, bin_width: f64) -> DotplotResult<Self> {
        let levels = probability_levels(values.len())?;
        let stacked = stack_dots(&values, bin_width, None)?;
        let dots = values
            .iter()
            .zip(levels)
            .zip(stacked)
            .map(|((&value, level), s)| Dot {
                value,
                level,
                bin_center: s.bin_center,
                stack: s.stack,
            })
            .collect();
        Ok(Self { dots, bin_width })
    }

    /// The dots, in non-decreasing value order.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// The bin width the dots were stacked with.
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Number of dots.
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Height of the tallest column, for scaling a display's y-axis.
    pub fn max_column_height(&self) -> u32 {
        self.dots.iter().map(|d| d.stack + 1).max().unwrap_or(0)
    }

    /// Approximate the p-quantile by counting dots from the left.
    ///
    /// The k-th dot (1-indexed, `k = round(p * n)` clamped to 1..=n)
    /// approximates the p-quantile. The approximation resolves
    /// probability only to within ±1/(2n); it becomes exact as
    /// n grows. Returns `None` for p outside [0, 1].
    pub fn value_at(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        let n = self.dots.len();
        let k = ((p * n as f64).round() as usize).clamp(1, n);
        Some(self.dots[k - 1].value)
    }

    /// Number of dots at or below `x`, reading the plot left to right.
    pub fn count_at_or_below(&self, x: f64) -> usize {
        self.dots.partition_point(|d| d.value <= x)
    }
}
