//! rats-morph - Morphological gradient supply
//!
//! Minimal grayscale morphology used to produce the gradient-magnitude
//! image that RATS threshold selection consumes:
//!
//! - Structuring elements (SEL) as explicit offset lists
//! - Grayscale dilation and erosion with edge-clamped borders
//! - Morphological gradient (dilation minus erosion)
//!
//! The threshold core treats the gradient as an opaque upstream
//! computation; any other non-negative gradient operator works equally
//! well as long as its output is congruent to the scalar image.

mod error;
pub mod grayscale;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use grayscale::{dilate_gray, erode_gray, gradient_gray};
pub use sel::Sel;
