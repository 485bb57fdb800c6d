//! Binarization with a robust automatic threshold
//!
//! [`RatsThresholdFilter`] validates that the scalar and gradient
//! images are congruent, computes the global threshold (phase 1), and
//! only then classifies every pixel (phase 2). The phase boundary is a
//! hard barrier: classification never starts without a valid global
//! threshold, and a failed run produces no output at all.

use crate::calculator::{check_congruent, compute_threshold};
use crate::error::ThresholdResult;
use rats_core::{Image, Pixel};

/// Two-class thresholding filter using RATS threshold selection.
///
/// Pixels strictly greater than the computed threshold map to
/// `inside_value`; pixels less than or equal to it (ties included) map
/// to `outside_value`. The tie-break is fixed and observable, so it is
/// part of the contract.
///
/// The filter borrows its inputs read-only for the duration of a run
/// and owns the output buffer until `run` returns it. The computed
/// threshold is retrievable read-only after a successful run and is
/// recomputed from scratch on every run.
#[derive(Debug, Clone)]
pub struct RatsThresholdFilter<T, O = T> {
    pow: f64,
    inside_value: O,
    outside_value: O,
    threshold: Option<T>,
}

impl<T: Pixel, O: Pixel> Default for RatsThresholdFilter<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Pixel, O: Pixel> RatsThresholdFilter<T, O> {
    /// Create a filter with `pow = 1.0`, `inside_value = O::MAX`, and
    /// `outside_value = O::ZERO`.
    pub fn new() -> Self {
        Self {
            pow: 1.0,
            inside_value: O::MAX,
            outside_value: O::ZERO,
            threshold: None,
        }
    }

    /// Set the gradient weighting exponent.
    pub fn set_pow(&mut self, pow: f64) {
        self.pow = pow;
    }

    /// Get the gradient weighting exponent.
    pub fn pow(&self) -> f64 {
        self.pow
    }

    /// Set the output value for pixels above the threshold.
    pub fn set_inside_value(&mut self, value: O) {
        self.inside_value = value;
    }

    /// Get the output value for pixels above the threshold.
    pub fn inside_value(&self) -> O {
        self.inside_value
    }

    /// Set the output value for pixels at or below the threshold.
    pub fn set_outside_value(&mut self, value: O) {
        self.outside_value = value;
    }

    /// Get the output value for pixels at or below the threshold.
    pub fn outside_value(&self) -> O {
        self.outside_value
    }

    /// Get the threshold computed by the most recent successful run.
    ///
    /// `None` before the first run, after a failed run, and after a
    /// run on an empty region.
    pub fn threshold(&self) -> Option<T> {
        self.threshold
    }

    /// Threshold `input` using the gradient-weighted mean of its
    /// intensities as the cut point.
    ///
    /// Both inputs must be congruent; the output is congruent to them
    /// and every one of its pixels is exactly `inside_value` or
    /// `outside_value`. An empty region yields an empty output without
    /// touching the calculator.
    ///
    /// # Errors
    ///
    /// - [`ThresholdError::RegionMismatch`](crate::ThresholdError::RegionMismatch)
    ///   if the gradient image is not congruent to the scalar image;
    ///   detected before any reduction work.
    /// - [`ThresholdError::InvalidPow`](crate::ThresholdError::InvalidPow)
    ///   if the configured exponent is negative, NaN, or infinite.
    /// - [`ThresholdError::DegenerateInput`](crate::ThresholdError::DegenerateInput)
    ///   if the total gradient weight is zero.
    pub fn run<G, const D: usize>(
        &mut self,
        input: &Image<T, D>,
        gradient: &Image<G, D>,
    ) -> ThresholdResult<Image<O, D>>
    where
        G: Pixel,
    {
        // A failed run must not leave the previous run's value visible.
        self.threshold = None;

        check_congruent(input, gradient)?;

        if input.is_empty() {
            log::debug!("empty requested region, skipping reduction");
            return Ok(Image::new_congruent_to(input)?);
        }

        // Phase 1: global reduction. Must fully complete before any
        // pixel is classified.
        let threshold = compute_threshold(input, gradient, self.pow)?;
        self.threshold = Some(threshold);
        log::debug!(
            "computed threshold {:?} over {} pixels (pow = {})",
            threshold,
            input.len(),
            self.pow
        );

        // Phase 2: pointwise classification.
        let mut output: Image<O, D> = Image::new_congruent_to(input)?;
        for (out, &value) in output.as_mut_slice().iter_mut().zip(input.as_slice()) {
            *out = if value > threshold {
                self.inside_value
            } else {
                self.outside_value
            };
        }
        Ok(output)
    }
}
