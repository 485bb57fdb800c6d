//! rats-threshold - Robust automatic threshold selection (RATS)
//!
//! This crate implements the RATS binarization method: the global
//! threshold is the mean of the input intensities weighted by the
//! co-registered gradient magnitudes, which concentrates influence on
//! pixels near strong intensity transitions.
//!
//! Two pieces, evaluated in strict order:
//!
//! - [`compute_threshold`] - the gradient-weighted mean reduction
//! - [`RatsThresholdFilter`] - validation, reduction, and pointwise
//!   two-class output
//!
//! Producing the gradient image is a separate concern; see the
//! `rats-morph` crate for a morphological gradient supplier.

pub mod calculator;
mod error;
pub mod filter;

pub use calculator::compute_threshold;
pub use error::{ThresholdError, ThresholdResult};
pub use filter::RatsThresholdFilter;
