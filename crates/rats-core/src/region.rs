//! Image regions
//!
//! A [`Region`] describes the index-space subset of an image: an index
//! origin and an extent per axis. Two images correspond pixel-for-pixel
//! exactly when their regions are equal ("congruent" images).

use crate::error::{Error, Result};

/// Index origin + extent per axis.
///
/// Axis 0 varies fastest in the linearized pixel order, so for 2-D
/// images axis 0 is x and axis 1 is y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region<const D: usize> {
    index: [i64; D],
    extent: [usize; D],
}

impl<const D: usize> Region<D> {
    /// Create a region with the given index origin and extent.
    ///
    /// Zero extents are valid and describe an empty region.
    pub fn new(index: [i64; D], extent: [usize; D]) -> Self {
        Self { index, extent }
    }

    /// Create a region with origin zero on every axis.
    pub fn with_extent(extent: [usize; D]) -> Self {
        Self {
            index: [0; D],
            extent,
        }
    }

    /// Get the index origin.
    #[inline]
    pub fn index(&self) -> [i64; D] {
        self.index
    }

    /// Get the per-axis extent.
    #[inline]
    pub fn extent(&self) -> [usize; D] {
        self.extent
    }

    /// Total pixel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the product of extents
    /// does not fit in `usize`.
    pub fn num_pixels(&self) -> Result<usize> {
        let mut total: u128 = 1;
        for &e in &self.extent {
            total = total.saturating_mul(e as u128);
        }
        usize::try_from(total).map_err(|_| Error::AllocationFailed { pixels: total })
    }

    /// Check whether any axis has a zero extent.
    pub fn is_empty(&self) -> bool {
        self.extent.iter().any(|&e| e == 0)
    }

    /// Check whether an index falls inside the region.
    pub fn contains(&self, index: [i64; D]) -> bool {
        index
            .iter()
            .zip(self.index.iter().zip(self.extent.iter()))
            .all(|(&i, (&o, &e))| i >= o && (i - o) < e as i64)
    }

    /// Linear offset of an index, axis 0 fastest.
    ///
    /// Returns `None` if the index lies outside the region.
    pub fn offset_of(&self, index: [i64; D]) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let mut offset = 0usize;
        let mut stride = 1usize;
        for axis in 0..D {
            let rel = (index[axis] - self.index[axis]) as usize;
            offset += rel * stride;
            stride *= self.extent[axis];
        }
        Some(offset)
    }

    /// Index at a linear offset, axis 0 fastest.
    ///
    /// Returns `None` if the offset is past the end of the region.
    pub fn index_at(&self, mut offset: usize) -> Option<[i64; D]> {
        if offset >= self.num_pixels().ok()? {
            return None;
        }
        let mut index = self.index;
        for axis in 0..D {
            index[axis] += (offset % self.extent[axis]) as i64;
            offset /= self.extent[axis];
        }
        Some(index)
    }
}
