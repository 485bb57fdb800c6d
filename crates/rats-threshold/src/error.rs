//! Error types for rats-threshold
//!
//! Both failure modes are fatal to the run that raised them: no partial
//! output is produced, and the caller retries from scratch with
//! corrected inputs if desired.

use thiserror::Error;

/// Errors that can occur during threshold selection and binarization
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rats_core::Error),

    /// Scalar and gradient images are not congruent
    #[error(
        "region mismatch: scalar image (origin {scalar_origin:?}, extent {scalar_extent:?}) \
         vs gradient image (origin {gradient_origin:?}, extent {gradient_extent:?})"
    )]
    RegionMismatch {
        scalar_origin: Vec<i64>,
        scalar_extent: Vec<usize>,
        gradient_origin: Vec<i64>,
        gradient_extent: Vec<usize>,
    },

    /// Total gradient weight is zero, so no threshold is defined
    #[error("degenerate input: total gradient weight is zero, threshold is undefined")]
    DegenerateInput,

    /// Weighting exponent outside the supported range
    #[error("invalid weighting exponent {pow}: must be finite and non-negative")]
    InvalidPow { pow: f64 },
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;
