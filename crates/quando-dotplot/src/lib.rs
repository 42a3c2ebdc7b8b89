//! quando-dotplot - Deterministic quantile dotplots
//!
//! Turns any distribution exposing a quantile function into a
//! frequency-style dot display:
//!
//! - **Quantile generation**: evenly spaced probability levels through
//!   the inverse CDF
//! - **Bin-width policies**: pluggable, with an IQR-based default
//! - **Wilkinson layout**: stacking of nearby points into columns
//! - **Counting queries**: read probabilities back off the finished plot
//!
//! # Design Philosophy
//!
//! Quantile dotplots beat random-sample dotplots because they:
//! - Are deterministic: the same distribution always yields the same plot
//! - Spread dots evenly in probability, so counting k of n dots reads
//!   off the k/n quantile
//! - Stay faithful at small n, where random draws are noisy
//!
//! The whole pipeline is stateless: construct a distribution, generate
//! quantiles, lay out dots, query. Nothing holds mutable state across
//! calls, so independent dotplots parallelize freely (see the
//! `parallel` feature).
//!
//! # Example
//!
//! ```
//! use quando_dist::LogNormal;
//! use quando_dotplot::Dotplot;
//!
//! let arrival = LogNormal::from_median(11.4, 0.2).unwrap();
//! let plot = Dotplot::from_distribution(&arrival, 20, 1.25).unwrap();
//! assert_eq!(plot.len(), 20);
//! // Two dots from the left is roughly the 10% quantile
//! let leave_by = plot.value_at(0.10).unwrap();
//! assert!(leave_by > 8.0 && leave_by < 9.5);
//! ```

pub mod binwidth;
pub mod dotplot;
pub mod error;
pub mod layout;
pub mod quantile;

#[cfg(feature = "parallel")]
pub mod batch;

pub use binwidth::*;
pub use dotplot::*;
pub use error::*;
pub use layout::*;
pub use quantile::*;

#[cfg(feature = "parallel")]
pub use batch::*;
