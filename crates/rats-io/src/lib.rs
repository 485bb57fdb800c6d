//! rats-io - Grayscale image ingestion and egress
//!
//! Reads and writes the raster formats the driver pipeline speaks:
//!
//! - Binary PGM (P5), 8- and 16-bit
//! - Grayscale PNG, 8- and 16-bit (feature `png-format`, default on)
//!
//! Format negotiation is by file extension; see [`read_image`] and
//! [`write_image`].

mod error;
mod gray;
pub mod pnm;

#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use gray::GrayImage;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a grayscale image, choosing the decoder by file extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let path = path.as_ref();
    match extension_of(path)?.as_str() {
        "pgm" | "pnm" => pnm::read_pgm(BufReader::new(File::open(path)?)),
        #[cfg(feature = "png-format")]
        "png" => png::read_png(BufReader::new(File::open(path)?)),
        ext => Err(IoError::UnsupportedFormat(format!(
            "unsupported file extension: .{ext}"
        ))),
    }
}

/// Write a grayscale image, choosing the encoder by file extension.
pub fn write_image<P: AsRef<Path>>(image: &GrayImage, path: P) -> IoResult<()> {
    let path = path.as_ref();
    match extension_of(path)?.as_str() {
        "pgm" | "pnm" => pnm::write_pgm(image, BufWriter::new(File::create(path)?)),
        #[cfg(feature = "png-format")]
        "png" => png::write_png(image, BufWriter::new(File::create(path)?)),
        ext => Err(IoError::UnsupportedFormat(format!(
            "unsupported file extension: .{ext}"
        ))),
    }
}

fn extension_of(path: &Path) -> IoResult<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| {
            IoError::UnsupportedFormat(format!("no file extension on {}", path.display()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rats_core::{Image2, Region};

    fn sample() -> GrayImage {
        let region = Region::with_extent([3, 3]);
        GrayImage::U8(Image2::from_data(region, (0u8..9).collect()).unwrap())
    }

    #[test]
    fn test_file_roundtrip_pgm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.pgm");
        let img = sample();
        write_image(&img, &path).unwrap();
        assert_eq!(read_image(&path).unwrap(), img);
    }

    #[cfg(feature = "png-format")]
    #[test]
    fn test_file_roundtrip_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        let img = sample();
        write_image(&img, &path).unwrap();
        assert_eq!(read_image(&path).unwrap(), img);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let img = sample();
        assert!(matches!(
            write_image(&img, "out.tiff"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            read_image("in.xyz"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
