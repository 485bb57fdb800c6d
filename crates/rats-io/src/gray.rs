//! Depth-tagged grayscale image
//!
//! Raster files store either 8- or 16-bit grayscale; the pipeline keeps
//! the stored depth end to end so a 16-bit input produces a 16-bit
//! output.

use rats_core::Image2;

/// A 2-D grayscale image at its stored bit depth.
#[derive(Debug, Clone, PartialEq)]
pub enum GrayImage {
    /// 8-bit grayscale
    U8(Image2<u8>),
    /// 16-bit grayscale
    U16(Image2<u16>),
}

impl GrayImage {
    /// Width and height in pixels.
    pub fn extent(&self) -> [usize; 2] {
        match self {
            GrayImage::U8(img) => img.region().extent(),
            GrayImage::U16(img) => img.region().extent(),
        }
    }

    /// Total pixel count.
    pub fn len(&self) -> usize {
        match self {
            GrayImage::U8(img) => img.len(),
            GrayImage::U16(img) => img.len(),
        }
    }

    /// Check whether the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
