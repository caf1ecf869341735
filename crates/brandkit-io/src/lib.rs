//! brandkit-io - Image I/O for brandkit
//!
//! Reads and writes PNG and JPEG images. Format support is gated behind
//! the `png-format` and `jpeg` features, both enabled by default.
//!
//! Decoded images carry their source format in [`Pix::informat`].

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use brandkit_core::ImageFormat;
pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};

use brandkit_core::Pix;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read an image from a file path
///
/// The format is detected from the file contents, not the extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let data = fs::read(path)?;
    read_image_mem(&data)
}

/// Read an image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    let pix = match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(std::io::Cursor::new(data))?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(data)?,
        other => return Err(unsupported(other)),
    };

    let mut pm = pix.into_mut();
    pm.set_informat(format);
    Ok(pm.into())
}

/// Write an image to a file path
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Write an image to memory
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(pix, &mut buffer, format)?;
    Ok(buffer)
}

/// Write an image in the specified format
pub fn write_image_format<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer, jpeg::DEFAULT_QUALITY),
        other => {
            let _ = writer;
            Err(unsupported(other))
        }
    }
}

fn unsupported(format: ImageFormat) -> IoError {
    IoError::UnsupportedFormat(format!("{:?} support not enabled", format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_core::Rgba;

    #[test]
    fn test_unknown_format_rejected() {
        let pix = Pix::new(2, 2).unwrap();
        assert!(matches!(
            write_image_mem(&pix, ImageFormat::Unknown),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("brandkit-io-definitely-missing.png");
        assert!(matches!(read_image(path), Err(IoError::Io(_))));
    }

    #[cfg(feature = "png-format")]
    #[test]
    fn test_informat_recorded() {
        let pix = Pix::new_filled(3, 3, Rgba::WHITE).unwrap();
        let bytes = write_image_mem(&pix, ImageFormat::Png).unwrap();
        let pix2 = read_image_mem(&bytes).unwrap();
        assert_eq!(pix2.informat(), ImageFormat::Png);
        assert!(pix.equals(&pix2));
    }
}
