//! Data-parallel construction of independent dotplots
//!
//! Every dotplot is a pure function of its own inputs, so a batch (one
//! plot per visualization condition, say) shares nothing and
//! parallelizes without any locking. Results stay in input order.

use rayon::prelude::*;

use quando_dist::Distribution;

use crate::binwidth::BinWidthStrategy;
use crate::dotplot::Dotplot;
use crate::error::DotplotResult;

/// Build one dotplot per distribution in parallel, all with the same
/// explicit bin width.
pub fn dotplot_batch<D>(dists: &[D], n: usize, bin_width: f64) -> Vec<DotplotResult<Dotplot>>
where
    D: Distribution + Sync,
{
    dists
        .par_iter()
        .map(|d| Dotplot::from_distribution(d, n, bin_width))
        .collect()
}

/// Parallel batch with a bin-width policy applied per item.
pub fn dotplot_batch_with_strategy<D, S>(
    dists: &[D],
    n: usize,
    strategy: &S,
) -> Vec<DotplotResult<Dotplot>>
where
    D: Distribution + Sync,
    S: BinWidthStrategy + Sync,
{
    dists
        .par_iter()
        .map(|d| Dotplot::with_strategy(d, n, strategy))
        .collect()
}
