//! The image container
//!
//! [`Image`] is an owned N-dimensional rectangular grid of pixels. The
//! buffer always covers exactly the image's [`Region`], linearized with
//! axis 0 fastest. Physical placement (origin, per-axis spacing) is
//! carried as metadata and copied to derived images; it does not affect
//! indexing.
//!
//! # Ownership model
//!
//! Filters borrow their input images read-only for the duration of a
//! run and exclusively own their output buffer until it is handed back
//! to the caller, so `Image` is a plain value type with no interior
//! sharing.

use crate::error::{Error, Result};
use crate::pixel::Pixel;
use crate::region::Region;

/// N-dimensional image of pixels of type `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T, const D: usize> {
    region: Region<D>,
    origin: [f64; D],
    spacing: [f64; D],
    data: Vec<T>,
}

/// 1-dimensional image.
pub type Image1<T> = Image<T, 1>;
/// 2-dimensional image.
pub type Image2<T> = Image<T, 2>;
/// 3-dimensional image.
pub type Image3<T> = Image<T, 3>;

impl<T: Pixel, const D: usize> Image<T, D> {
    /// Create a zero-filled image covering `region`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the region's pixel count
    /// does not fit in memory.
    pub fn new(region: Region<D>) -> Result<Self> {
        let len = region.num_pixels()?;
        Ok(Self {
            region,
            origin: [0.0; D],
            spacing: [1.0; D],
            data: vec![T::ZERO; len],
        })
    }

    /// Create an image covering `region` from an existing buffer.
    ///
    /// The buffer must be linearized with axis 0 fastest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataSizeMismatch`] if the buffer length does
    /// not equal the region's pixel count.
    pub fn from_data(region: Region<D>, data: Vec<T>) -> Result<Self> {
        let expected = region.num_pixels()?;
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            region,
            origin: [0.0; D],
            spacing: [1.0; D],
            data,
        })
    }

    /// Create a zero-filled image congruent to `template`, carrying its
    /// spacing and origin. The pixel type may differ.
    pub fn new_congruent_to<U: Pixel>(template: &Image<U, D>) -> Result<Self> {
        let mut image = Self::new(template.region)?;
        image.origin = template.origin;
        image.spacing = template.spacing;
        Ok(image)
    }
}

impl<T, const D: usize> Image<T, D> {
    /// Get the image region.
    #[inline]
    pub fn region(&self) -> Region<D> {
        self.region
    }

    /// Get the physical origin.
    #[inline]
    pub fn origin(&self) -> [f64; D] {
        self.origin
    }

    /// Set the physical origin.
    pub fn set_origin(&mut self, origin: [f64; D]) {
        self.origin = origin;
    }

    /// Get the per-axis spacing.
    #[inline]
    pub fn spacing(&self) -> [f64; D] {
        self.spacing
    }

    /// Set the per-axis spacing.
    pub fn set_spacing(&mut self, spacing: [f64; D]) {
        self.spacing = spacing;
    }

    /// Total pixel count.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check pixel-for-pixel index correspondence with another image.
    ///
    /// Two images are congruent when their regions have identical
    /// index origins and extents; the pixel types may differ.
    pub fn congruent_with<U>(&self, other: &Image<U, D>) -> bool {
        self.region == other.region
    }

    /// Get the flat pixel buffer, axis 0 fastest.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the flat pixel buffer mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Copy, const D: usize> Image<T, D> {
    /// Get the pixel at an index.
    ///
    /// Returns `None` if the index lies outside the region.
    pub fn get(&self, index: [i64; D]) -> Option<T> {
        self.region.offset_of(index).map(|o| self.data[o])
    }

    /// Set the pixel at an index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index lies outside
    /// the region.
    pub fn set(&mut self, index: [i64; D], value: T) -> Result<()> {
        match self.region.offset_of(index) {
            Some(offset) => {
                self.data[offset] = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                index: index.to_vec(),
                origin: self.region.index().to_vec(),
                extent: self.region.extent().to_vec(),
            }),
        }
    }

    /// Fill every pixel with a value.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}
