//! Error types for rats-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rats_core::Error),

    /// Structuring element has no elements
    #[error("empty structuring element")]
    EmptySel,
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
