//! PGM (Portable Gray Map) format support
//!
//! Reads and writes binary PGM (P5). Maxval up to 255 maps to 8-bit
//! images; larger maxvals up to 65535 map to 16-bit images stored
//! big-endian, per the PGM specification. ASCII P2 and the other PNM
//! variants are not supported.

use crate::error::{IoError, IoResult};
use crate::gray::GrayImage;
use rats_core::{Image2, Region};
use std::io::{BufRead, Write};

/// Read a binary PGM (P5) image from a reader.
pub fn read_pgm<R: BufRead>(mut reader: R) -> IoResult<GrayImage> {
    let mut header = [0u8; 2];
    reader.read_exact(&mut header)?;
    if &header != b"P5" {
        return Err(IoError::UnsupportedFormat(format!(
            "not a binary PGM: magic {:?}",
            String::from_utf8_lossy(&header)
        )));
    }

    let width = read_header_value(&mut reader)?;
    let height = read_header_value(&mut reader)?;
    let maxval = read_header_value(&mut reader)?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("invalid maxval {maxval}")));
    }

    let region = Region::with_extent([width, height]);
    let pixels = width
        .checked_mul(height)
        .ok_or_else(|| IoError::InvalidData("image dimensions overflow".into()))?;

    if maxval <= 255 {
        let mut buf = vec![0u8; pixels];
        reader.read_exact(&mut buf)?;
        Ok(GrayImage::U8(Image2::from_data(region, buf)?))
    } else {
        let mut buf = vec![0u8; pixels * 2];
        reader.read_exact(&mut buf)?;
        let data = buf
            .chunks_exact(2)
            .map(|b| u16::from_be_bytes([b[0], b[1]]))
            .collect();
        Ok(GrayImage::U16(Image2::from_data(region, data)?))
    }
}

/// Write an image as binary PGM (P5) to a writer.
pub fn write_pgm<W: Write>(image: &GrayImage, mut writer: W) -> IoResult<()> {
    let [width, height] = image.extent();
    match image {
        GrayImage::U8(img) => {
            write!(writer, "P5\n{width} {height}\n255\n")?;
            writer.write_all(img.as_slice())?;
        }
        GrayImage::U16(img) => {
            write!(writer, "P5\n{width} {height}\n65535\n")?;
            let mut buf = Vec::with_capacity(img.len() * 2);
            for &v in img.as_slice() {
                buf.extend_from_slice(&v.to_be_bytes());
            }
            writer.write_all(&buf)?;
        }
    }
    Ok(())
}

/// Read the next whitespace-delimited decimal token, skipping `#`
/// comments that run to end of line.
fn read_header_value<R: BufRead>(reader: &mut R) -> IoResult<usize> {
    let mut token = String::new();
    let mut in_comment = false;
    loop {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        let c = byte[0];
        if in_comment {
            if c == b'\n' {
                in_comment = false;
            }
            continue;
        }
        match c {
            b'#' => in_comment = true,
            c if c.is_ascii_whitespace() => {
                if !token.is_empty() {
                    break;
                }
            }
            c if c.is_ascii_digit() => token.push(c as char),
            c => {
                return Err(IoError::InvalidData(format!(
                    "unexpected byte {c:#04x} in PGM header"
                )));
            }
        }
    }
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("bad PGM header token: {token}")))
}
