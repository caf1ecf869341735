//! PNG image format support
//!
//! Every PNG color type is expanded to 8-bit RGBA on read. Writing always
//! produces 8-bit RGBA so transparency survives a round trip.

use crate::{IoError, IoResult};
use brandkit_core::{Pix, Rgba};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    // Palette and low bit depths expand to 8 bits; 16-bit samples are stripped
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..y * bytes_per_row + width as usize * samples];
        pixels.extend(row.chunks_exact(samples).map(|s| match s {
            [g] => Rgba::rgb(*g, *g, *g),
            [g, a] => Rgba::new(*g, *g, *g, *a),
            [r, g, b] => Rgba::rgb(*r, *g, *b),
            [r, g, b, a] => Rgba::new(*r, *g, *b, *a),
            _ => Rgba::TRANSPARENT,
        }));
    }

    Ok(Pix::from_raw(width, height, pixels)?)
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data: Vec<u8> = pix
        .data()
        .iter()
        .flat_map(|&p| <[u8; 4]>::from(p))
        .collect();

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
