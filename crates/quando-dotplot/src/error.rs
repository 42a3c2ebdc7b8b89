//! Error types for quando-dotplot
//!
//! Every failure is a local validation error surfaced directly to the
//! caller; there is no internal state to roll back and no partial
//! output. Either the full ordered dot sequence is produced or nothing
//! is.

use thiserror::Error;

use quando_dist::DistributionError;

/// Errors from building a quantile dotplot
#[derive(Error, Debug)]
pub enum DotplotError {
    /// Fewer than one dot requested
    #[error("sample count must be at least 1 (got {n})")]
    InvalidSampleCount { n: usize },

    /// Non-positive or non-finite bin width
    #[error("bin width must be positive and finite (got {width})")]
    InvalidBinWidth { width: f64 },

    /// Distribution failed at a required probability level
    #[error("distribution error: {0}")]
    Distribution(#[from] DistributionError),
}

/// Result type alias for dotplot operations
pub type DotplotResult<T> = Result<T, DotplotError>;
