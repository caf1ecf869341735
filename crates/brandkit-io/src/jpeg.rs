//! JPEG image format support
//!
//! Reads 8-bit grayscale and RGB JPEGs with `jpeg-decoder`, writes RGB
//! with `jpeg-encoder`. CMYK and 16-bit data are rejected.

use crate::{IoError, IoResult};
use brandkit_core::{Pix, Rgba};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use std::io::{Read, Write};

/// Default encoder quality.
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// An opaque `Pix`; grayscale input is replicated into the color channels.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG header".to_string()))?;
    let (width, height) = (info.width as u32, info.height as u32);

    let pixels: Vec<Rgba> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&g| Rgba::rgb(g, g, g)).collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|c| Rgba::rgb(c[0], c[1], c[2]))
            .collect(),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    Ok(Pix::from_raw(width, height, pixels)?)
}

/// Write a JPEG image at the given quality (1..=100).
///
/// The alpha channel is dropped.
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W, quality: u8) -> IoResult<()> {
    let too_large = || {
        IoError::InvalidData(format!(
            "{}x{} exceeds the JPEG size limit",
            pix.width(),
            pix.height()
        ))
    };
    let width = u16::try_from(pix.width()).map_err(|_| too_large())?;
    let height = u16::try_from(pix.height()).map_err(|_| too_large())?;

    let data: Vec<u8> = pix.data().iter().flat_map(|p| [p.r, p.g, p.b]).collect();
    Encoder::new(writer, quality.clamp(1, 100))
        .encode(&data, width, height, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_roundtrip_solid() {
        let c = Rgba::rgb(17, 124, 50);
        let pix = Pix::new_filled(16, 16, c).unwrap();
        let mut buffer = Vec::new();
        write_jpeg(&pix, &mut buffer, DEFAULT_QUALITY).unwrap();
        let pix2 = read_jpeg(buffer.as_slice()).unwrap();
        assert_eq!((pix2.width(), pix2.height()), (16, 16));

        // Lossy, but a flat color survives closely
        let p = pix2.get_pixel(8, 8).unwrap();
        assert!(p.r.abs_diff(c.r) <= 4 && p.g.abs_diff(c.g) <= 4 && p.b.abs_diff(c.b) <= 4);
        assert_eq!(p.a, 255);
    }

    #[test]
    fn test_read_garbage() {
        let data = [0xFF, 0xD8, 0xFF, 0x00, 0x00];
        assert!(read_jpeg(&data[..]).is_err());
    }
}
