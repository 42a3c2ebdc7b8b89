//! quando-dist - Distribution families for quantile dotplot construction
//!
//! This crate provides the distribution side of the quando toolchain:
//!
//! - **Distribution**: capability trait (quantile function, optional CDF/density)
//! - **Normal / LogNormal**: the symmetric and log-symmetric workhorses
//! - **BoxCoxT**: skewed, heavy-tailed family for arrival-time predictions
//! - **Empirical**: raw samples or posterior draws, no parametric fit
//!
//! # Design Philosophy
//!
//! Consumers only ever need the quantile function, so the trait requires
//! nothing else; the forward CDF and density are optional diagnostics.
//! One implementing type per family, chosen at construction time, keeps
//! dispatch static where the family is known and allows `dyn
//! Distribution` where it is not.

pub mod boxcoxt;
pub mod distribution;
pub mod empirical;
pub mod error;
pub mod lognormal;
pub mod normal;
pub mod special;

pub use boxcoxt::*;
pub use distribution::*;
pub use empirical::*;
pub use error::*;
pub use lognormal::*;
pub use normal::*;
