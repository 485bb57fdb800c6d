//! PNG grayscale format support
//!
//! Reads and writes 8- and 16-bit grayscale PNG. Color, indexed, and
//! alpha images are rejected rather than silently converted; the
//! thresholding pipeline is defined on scalar images only.

use crate::error::{IoError, IoResult};
use crate::gray::GrayImage;
use png::{BitDepth, ColorType, Decoder, Encoder};
use rats_core::{Image2, Region};
use std::io::{BufRead, Seek, Write};

/// Read a grayscale PNG image.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<GrayImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let info = reader.info();
    let width = info.width as usize;
    let height = info.height as usize;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if color_type != ColorType::Grayscale {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG color type: {color_type:?}"
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let region = Region::with_extent([width, height]);

    match bit_depth {
        BitDepth::Eight => {
            let mut pixels = Vec::with_capacity(width * height);
            for y in 0..height {
                let row = &data[y * bytes_per_row..];
                pixels.extend_from_slice(&row[..width]);
            }
            Ok(GrayImage::U8(Image2::from_data(region, pixels)?))
        }
        BitDepth::Sixteen => {
            let mut pixels = Vec::with_capacity(width * height);
            for y in 0..height {
                let row = &data[y * bytes_per_row..];
                for x in 0..width {
                    pixels.push(u16::from_be_bytes([row[2 * x], row[2 * x + 1]]));
                }
            }
            Ok(GrayImage::U16(Image2::from_data(region, pixels)?))
        }
        other => Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG grayscale bit depth: {other:?}"
        ))),
    }
}

/// Write a grayscale PNG image.
pub fn write_png<W: Write>(image: &GrayImage, writer: W) -> IoResult<()> {
    let [width, height] = image.extent();
    let (width, height) = (width as u32, height as u32);

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Grayscale);

    match image {
        GrayImage::U8(img) => {
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;
            writer
                .write_image_data(img.as_slice())
                .map_err(|e| IoError::EncodeError(format!("PNG write error: {e}")))?;
        }
        GrayImage::U16(img) => {
            encoder.set_depth(BitDepth::Sixteen);
            let mut writer = encoder
                .write_header()
                .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;
            let mut data = Vec::with_capacity(img.len() * 2);
            for &v in img.as_slice() {
                data.extend_from_slice(&v.to_be_bytes());
            }
            writer
                .write_image_data(&data)
                .map_err(|e| IoError::EncodeError(format!("PNG write error: {e}")))?;
        }
    }
    Ok(())
}
