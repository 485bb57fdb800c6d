//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological
//! operations, stored as the list of index offsets relative to its
//! origin.

/// Structuring element as an explicit offset list.
///
/// Offsets are `[dx, dy]` relative to the origin pixel; the origin
/// itself is always a member for the shapes constructed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    offsets: Vec<[i64; 2]>,
}

impl Sel {
    /// Create a disk (Euclidean ball) of the given radius.
    ///
    /// Radius 0 degenerates to the single origin pixel.
    pub fn disk(radius: u32) -> Self {
        let r = radius as i64;
        let r2 = r * r;
        let mut offsets = Vec::new();
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r2 {
                    offsets.push([dx, dy]);
                }
            }
        }
        Self { offsets }
    }

    /// Create a rectangular "brick" of `width x height`, centered.
    ///
    /// Even sizes extend one pixel further on the negative side.
    pub fn brick(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self {
                offsets: Vec::new(),
            };
        }
        let (w, h) = (width as i64, height as i64);
        let mut offsets = Vec::new();
        for dy in -(h / 2)..=((h - 1) / 2) {
            for dx in -(w / 2)..=((w - 1) / 2) {
                offsets.push([dx, dy]);
            }
        }
        Self { offsets }
    }

    /// Get the neighborhood offsets.
    #[inline]
    pub fn offsets(&self) -> &[[i64; 2]] {
        &self.offsets
    }

    /// Number of elements in the neighborhood.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check whether the neighborhood is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
