//! Error types for rats-core
//!
//! Provides a unified error type for image construction and access.
//! Each variant captures enough context for diagnostics without
//! exposing internal representation details.

use thiserror::Error;

/// rats-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// The requested region is too large to address in memory
    #[error("allocation failed: region of {pixels} pixels exceeds addressable memory")]
    AllocationFailed {
        /// Total pixel count of the rejected region
        pixels: u128,
    },

    /// A pixel buffer does not match the region it is supposed to cover
    #[error("data size mismatch: region holds {expected} pixels, buffer holds {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },

    /// An index lies outside the image region
    #[error("index {index:?} outside region (origin {origin:?}, extent {extent:?})")]
    IndexOutOfBounds {
        index: Vec<i64>,
        origin: Vec<i64>,
        extent: Vec<usize>,
    },
}

/// Result type alias for rats-core operations
pub type Result<T> = std::result::Result<T, Error>;
