//! RATS threshold regression tests
//!
//! End-to-end checks of the observable contract:
//!   (1) uniform gradient weights reduce the threshold to the mean
//!   (2) pow = 0 ignores the gradient entirely (0^0 = 1 convention)
//!   (3) a flat gradient is reported as degenerate, never defaulted
//!   (4) shape mismatch fails before any reduction work
//!   (5) the output is always exactly two-valued
//!   (6) ties classify outside, consistently across runs
//!   (7) the 1-D monotone ramp scenario
//!   (8) an empty requested region is a no-op, not an error
//!   (9) a negative exponent is a typed error, not a NaN threshold

use rats_core::{Image1, Image2, Pixel, Region};
use rats_threshold::{RatsThresholdFilter, ThresholdError, compute_threshold};

fn ramp_2d(width: usize, height: usize) -> Image2<u8> {
    let region = Region::with_extent([width, height]);
    let data = (0..width * height).map(|i| (i % 256) as u8).collect();
    Image2::from_data(region, data).unwrap()
}

fn constant_2d(width: usize, height: usize, value: u8) -> Image2<u8> {
    let region = Region::with_extent([width, height]);
    Image2::from_data(region, vec![value; width * height]).unwrap()
}

/// Test 1: every gradient pixel equal to the same c > 0 with pow = 1
/// makes the threshold the arithmetic mean of the scalar image.
#[test]
fn rats_reg_uniform_weights_give_mean() {
    let input = ramp_2d(16, 16);
    let mean = input.as_slice().iter().map(|&v| v.to_f64()).sum::<f64>() / input.len() as f64;

    for c in [1u8, 7, 200] {
        let gradient = constant_2d(16, 16, c);
        let t = compute_threshold(&input, &gradient, 1.0).unwrap();
        assert_eq!(t, u8::from_f64(mean), "constant gradient {c}");
    }
}

/// Test 2: pow = 0 yields the unweighted mean regardless of gradient
/// content, including gradient pixels that are exactly zero.
#[test]
fn rats_reg_zero_pow_ignores_gradient() {
    let input = ramp_2d(8, 8);
    let mean = input.as_slice().iter().map(|&v| v.to_f64()).sum::<f64>() / input.len() as f64;

    let region = input.region();
    let wild = Image2::from_data(
        region,
        (0..64).map(|i| if i % 3 == 0 { 0u8 } else { 250 }).collect(),
    )
    .unwrap();
    let flat = constant_2d(8, 8, 0);

    assert_eq!(compute_threshold(&input, &wild, 0.0).unwrap(), u8::from_f64(mean));
    // Even an all-zero gradient is non-degenerate under pow = 0
    assert_eq!(compute_threshold(&input, &flat, 0.0).unwrap(), u8::from_f64(mean));
}

/// Test 3: an all-zero gradient under a positive power must surface
/// DegenerateInput, not a divide-by-zero value or silent default.
#[test]
fn rats_reg_flat_gradient_is_degenerate() {
    let input = ramp_2d(8, 8);
    let gradient = constant_2d(8, 8, 0);

    assert!(matches!(
        compute_threshold(&input, &gradient, 2.0),
        Err(ThresholdError::DegenerateInput)
    ));

    let mut filter: RatsThresholdFilter<u8> = RatsThresholdFilter::new();
    filter.set_pow(2.0);
    assert!(matches!(
        filter.run(&input, &gradient),
        Err(ThresholdError::DegenerateInput)
    ));
}

/// Test 4: a gradient image one pixel narrower than the scalar image
/// fails the cheap shape check before the reduction runs; the filter
/// never acquires a threshold.
#[test]
fn rats_reg_shape_mismatch_precedes_reduction() {
    let input = ramp_2d(8, 8);
    let narrow = constant_2d(7, 8, 1);

    let mut filter: RatsThresholdFilter<u8> = RatsThresholdFilter::new();
    let err = filter.run(&input, &narrow).unwrap_err();
    assert!(matches!(err, ThresholdError::RegionMismatch { .. }));
    assert_eq!(filter.threshold(), None);
}

/// Test 5: every output pixel of a valid run is exactly inside_value
/// or outside_value, and both classes are reachable.
#[test]
fn rats_reg_binary_partition_totality() {
    let input = ramp_2d(32, 32);
    let gradient = constant_2d(32, 32, 3);

    let mut filter: RatsThresholdFilter<u8> = RatsThresholdFilter::new();
    filter.set_inside_value(200);
    filter.set_outside_value(10);
    let output = filter.run(&input, &gradient).unwrap();

    assert!(output.congruent_with(&input));
    assert!(output.as_slice().iter().all(|&p| p == 200 || p == 10));
    assert!(output.as_slice().contains(&200));
    assert!(output.as_slice().contains(&10));
}

/// Test 6: a pixel exactly equal to the threshold classifies outside,
/// and repeated runs on identical inputs agree bit-for-bit.
#[test]
fn rats_reg_tie_break_determinism() {
    let input = constant_2d(8, 8, 42);
    let gradient = constant_2d(8, 8, 1);

    let mut filter: RatsThresholdFilter<u8> = RatsThresholdFilter::new();
    let first = filter.run(&input, &gradient).unwrap();
    assert_eq!(filter.threshold(), Some(42));
    // Every pixel ties with the threshold and must land outside
    assert!(first.as_slice().iter().all(|&p| p == 0));

    for _ in 0..3 {
        let again = filter.run(&input, &gradient).unwrap();
        assert_eq!(again.as_slice(), first.as_slice());
        assert_eq!(filter.threshold(), Some(42));
    }
}

/// Test 7: 1-D ramp [1..9] with unit gradient: threshold 5, values
/// above 5 inside, the rest (5 included) outside.
#[test]
fn rats_reg_monotone_ramp_1d() {
    let region = Region::with_extent([9]);
    let input = Image1::from_data(region, (1..=9).collect::<Vec<u8>>()).unwrap();
    let gradient = Image1::from_data(region, vec![1u8; 9]).unwrap();

    let mut filter: RatsThresholdFilter<u8> = RatsThresholdFilter::new();
    let output = filter.run(&input, &gradient).unwrap();

    assert_eq!(filter.threshold(), Some(5));
    let expected: Vec<u8> = vec![0, 0, 0, 0, 0, 255, 255, 255, 255];
    assert_eq!(output.as_slice(), expected.as_slice());
}

/// Test 8: a congruent pair of zero-extent images yields an empty
/// output and no threshold, not an error.
#[test]
fn rats_reg_empty_region_is_noop() {
    let region = Region::new([3, 3], [0, 5]);
    let input: Image2<u8> = Image2::new(region).unwrap();
    let gradient: Image2<u8> = Image2::new(region).unwrap();

    let mut filter: RatsThresholdFilter<u8> = RatsThresholdFilter::new();
    let output = filter.run(&input, &gradient).unwrap();
    assert!(output.is_empty());
    assert!(output.congruent_with(&input));
    assert_eq!(filter.threshold(), None);
}

/// A negative weighting exponent is rejected up front: with any zero
/// gradient pixel it would produce an infinite weight, a NaN quotient,
/// and a silently wrong all-zero output.
#[test]
fn rats_reg_negative_pow_rejected() {
    let input = ramp_2d(4, 4);
    let mut gradient = constant_2d(4, 4, 1);
    gradient.set([0, 0], 0).unwrap();

    let mut filter: RatsThresholdFilter<u8> = RatsThresholdFilter::new();
    filter.set_pow(-1.0);
    assert!(matches!(
        filter.run(&input, &gradient),
        Err(ThresholdError::InvalidPow { .. })
    ));
    assert_eq!(filter.threshold(), None);
}

/// Output pixel type may differ from the input pixel type; the
/// defaults come from the output type's numeric range.
#[test]
fn rats_reg_distinct_output_pixel_type() {
    let input = ramp_2d(8, 8);
    let gradient = constant_2d(8, 8, 1);

    let mut filter: RatsThresholdFilter<u8, u16> = RatsThresholdFilter::new();
    let output = filter.run(&input, &gradient).unwrap();
    assert!(output.as_slice().iter().all(|&p| p == 0 || p == u16::MAX));
}

/// Thresholds recompute independently per run; nothing is cached
/// across unrelated inputs.
#[test]
fn rats_reg_threshold_recomputed_per_run() {
    let gradient = constant_2d(4, 4, 1);
    let low = constant_2d(4, 4, 10);
    let high = constant_2d(4, 4, 100);

    let mut filter: RatsThresholdFilter<u8> = RatsThresholdFilter::new();
    filter.run(&low, &gradient).unwrap();
    assert_eq!(filter.threshold(), Some(10));
    filter.run(&high, &gradient).unwrap();
    assert_eq!(filter.threshold(), Some(100));
}
