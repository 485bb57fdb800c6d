//! rats-core - Basic data structures for the RATS thresholding library
//!
//! This crate provides the small image-processing substrate the
//! threshold filter runs on:
//!
//! - [`Image`] - An N-dimensional rectangular grid of pixels
//! - [`Region`] - Index origin + per-axis extent of an image
//! - [`Pixel`] - Conversions between stored pixel types and `f64`
//!
//! Images here always buffer exactly their region. The general
//! demand-driven "requested region" machinery of a full image pipeline
//! collapses to whole-region processing for a global-reduction
//! algorithm, so no partial buffering is provided.

pub mod error;
pub mod image;
pub mod pixel;
pub mod region;

pub use error::{Error, Result};
pub use image::{Image, Image1, Image2, Image3};
pub use pixel::Pixel;
pub use region::Region;
