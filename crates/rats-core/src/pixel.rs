//! Pixel type conversions
//!
//! The threshold reduction accumulates in `f64` regardless of the
//! stored pixel type, so every usable pixel type must convert to and
//! from `f64`. Integer conversions round to nearest and saturate at
//! the type bounds; float conversions are plain casts.

/// A scalar pixel type.
///
/// `Send + Sync` is required so images can be shared read-only across
/// data-parallel workers.
pub trait Pixel: Copy + PartialOrd + Send + Sync + std::fmt::Debug + 'static {
    /// Additive identity, the default "outside" output value.
    const ZERO: Self;
    /// Largest representable value, the default "inside" output value.
    const MAX: Self;

    /// Widen to `f64` for accumulation.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`. Integer types round to nearest and saturate;
    /// float types cast directly.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_pixel_int {
    ($($t:ty),*) => {
        $(
            impl Pixel for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    // `as` saturates on out-of-range and maps NaN to 0
                    v.round() as $t
                }
            }
        )*
    };
}

macro_rules! impl_pixel_float {
    ($($t:ty),*) => {
        $(
            impl Pixel for $t {
                const ZERO: Self = 0.0;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_pixel_int!(u8, u16, u32, i16, i32);
impl_pixel_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_rounding() {
        assert_eq!(u8::from_f64(4.4), 4);
        assert_eq!(u8::from_f64(4.6), 5);
        assert_eq!(i16::from_f64(-2.6), -3);
    }

    #[test]
    fn test_int_saturation() {
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(u8::from_f64(-5.0), 0);
        assert_eq!(u16::from_f64(1e9), u16::MAX);
        assert_eq!(i16::from_f64(-1e9), i16::MIN);
    }

    #[test]
    fn test_float_cast() {
        assert_eq!(f32::from_f64(1.5), 1.5f32);
        assert_eq!(f64::from_f64(-0.25), -0.25);
    }

    #[test]
    fn test_widening_is_exact_for_u16() {
        for v in [0u16, 1, 255, 256, 65535] {
            assert_eq!(u16::from_f64(v.to_f64()), v);
        }
    }
}
