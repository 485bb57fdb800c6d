//! RATS - Robust automatic threshold selection for Rust
//!
//! Binarizes a scalar image using the RATS method: the global threshold
//! is the mean intensity weighted by a co-registered gradient-magnitude
//! image, concentrating influence on pixels near strong intensity
//! transitions.
//!
//! # Example
//!
//! ```
//! use rats::{Image1, Region, threshold::RatsThresholdFilter};
//!
//! let region = Region::with_extent([9]);
//! let input = Image1::from_data(region, (1..=9).collect::<Vec<u8>>()).unwrap();
//! let gradient = Image1::from_data(region, vec![1u8; 9]).unwrap();
//!
//! let mut filter: RatsThresholdFilter<u8> = RatsThresholdFilter::new();
//! let output = filter.run(&input, &gradient).unwrap();
//! assert_eq!(filter.threshold(), Some(5));
//! assert_eq!(output.as_slice()[4], 0);
//! assert_eq!(output.as_slice()[5], 255);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rats_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rats_io as io;
pub use rats_morph as morph;
pub use rats_threshold as threshold;
