//! Robust automatic threshold (RATS) selection
//!
//! The threshold is the gradient-weighted mean of the scalar image:
//! each pixel's intensity contributes with weight `G[p]^pow`, so the
//! result is the mean intensity where the image changes the most.
//!
//! Accumulation runs in `f64` regardless of the stored pixel type and
//! is chunked: partial sums are computed per fixed-size chunk of the
//! flat buffers and combined in chunk order. The combine order is what
//! a tiled parallel reduction would use, so the summation stays
//! reproducible for a given input independent of scheduling.

use crate::error::{ThresholdError, ThresholdResult};
use rats_core::{Image, Pixel};

/// Chunk length for the partial reduction.
const CHUNK: usize = 4096;

/// Per-chunk accumulator state.
#[derive(Debug, Clone, Copy, Default)]
struct Partial {
    /// Sum of `I[p] * w(p)`
    weighted: f64,
    /// Sum of `w(p)`
    weight: f64,
}

/// Compute the gradient-weighted mean intensity of `input`.
///
/// The weight of each pixel is `gradient[p]^pow`, with the convention
/// `0^0 = 1` so that `pow = 0` degrades cleanly to the unweighted
/// arithmetic mean. Gradient values must be non-negative, which
/// "gradient magnitude" semantics already guarantee; `pow` must be
/// finite and non-negative, since a negative exponent turns a zero
/// gradient pixel into an infinite weight and poisons the sums.
///
/// This is a pure function of the two images and `pow`; it holds only
/// read-only borrows and blocks until the full reduction completes.
///
/// # Errors
///
/// - [`ThresholdError::InvalidPow`] if `pow` is negative, NaN, or
///   infinite.
/// - [`ThresholdError::RegionMismatch`] if the images are not
///   congruent.
/// - [`ThresholdError::DegenerateInput`] if the total weight is zero
///   (all gradients zero under a positive power, or an empty region).
pub fn compute_threshold<T, G, const D: usize>(
    input: &Image<T, D>,
    gradient: &Image<G, D>,
    pow: f64,
) -> ThresholdResult<T>
where
    T: Pixel,
    G: Pixel,
{
    if !pow.is_finite() || pow < 0.0 {
        return Err(ThresholdError::InvalidPow { pow });
    }
    check_congruent(input, gradient)?;

    let mut total = Partial::default();
    let chunks = input
        .as_slice()
        .chunks(CHUNK)
        .zip(gradient.as_slice().chunks(CHUNK));
    for (scalar_chunk, gradient_chunk) in chunks {
        let partial = reduce_chunk(scalar_chunk, gradient_chunk, pow);
        total.weighted += partial.weighted;
        total.weight += partial.weight;
    }

    if total.weight == 0.0 {
        return Err(ThresholdError::DegenerateInput);
    }
    Ok(T::from_f64(total.weighted / total.weight))
}

/// Reduce one chunk to its partial sums. Workers writing only to
/// private accumulators is what makes the tiled decomposition safe.
fn reduce_chunk<T: Pixel, G: Pixel>(scalar: &[T], gradient: &[G], pow: f64) -> Partial {
    let mut partial = Partial::default();
    for (&value, &grad) in scalar.iter().zip(gradient.iter()) {
        let w = weight(grad.to_f64(), pow);
        partial.weighted += value.to_f64() * w;
        partial.weight += w;
    }
    partial
}

/// Gradient weight `g^pow` with `0^0 = 1`.
#[inline]
fn weight(g: f64, pow: f64) -> f64 {
    if pow == 0.0 { 1.0 } else { g.powf(pow) }
}

/// Fail with [`ThresholdError::RegionMismatch`] unless the two images
/// are congruent. Cheap, and always performed before any reduction.
pub(crate) fn check_congruent<T, G, const D: usize>(
    input: &Image<T, D>,
    gradient: &Image<G, D>,
) -> ThresholdResult<()> {
    if input.congruent_with(gradient) {
        return Ok(());
    }
    Err(ThresholdError::RegionMismatch {
        scalar_origin: input.region().index().to_vec(),
        scalar_extent: input.region().extent().to_vec(),
        gradient_origin: gradient.region().index().to_vec(),
        gradient_extent: gradient.region().extent().to_vec(),
    })
}
