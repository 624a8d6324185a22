//! Capgrid I/O - image reading for captcha recognition
//!
//! Reads a raster image file into a [`capgrid_core::IntensityGrid`].
//! Formats are detected by magic bytes, never by extension, and each
//! reader extracts only the first channel: the captcha family this
//! workspace targets encodes all channels identically.
//!
//! Format support is feature-gated the same way throughout the workspace:
//! `jpeg` and `png-format` are both enabled by default.

mod error;
pub mod format;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use capgrid_core::IntensityGrid;
use std::path::Path;

/// Read an image file into an intensity grid.
///
/// # Errors
///
/// Returns [`IoError`] if the file is missing, unreadable, not a
/// recognized raster format, or structurally corrupt.
pub fn read_intensity<P: AsRef<Path>>(path: P) -> IoResult<IntensityGrid> {
    let data = std::fs::read(path)?;
    read_intensity_bytes(&data)
}

/// Read an in-memory image into an intensity grid.
pub fn read_intensity_bytes(data: &[u8]) -> IoResult<IntensityGrid> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(std::io::Cursor::new(data)),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(std::io::Cursor::new(data)),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let result = read_intensity("/nonexistent/input00.jpg");
        assert!(matches!(result, Err(IoError::Io(_))));
    }

    #[test]
    fn test_read_garbage_bytes() {
        let result = read_intensity_bytes(b"definitely not an image");
        assert!(matches!(result, Err(IoError::UnsupportedFormat(_))));
    }

    #[cfg(feature = "png-format")]
    #[test]
    fn test_dispatch_ignores_extension_conventions() {
        // A PNG payload is readable even though training files are
        // named .jpg; dispatch goes by signature alone.
        let mut bytes = Vec::new();
        {
            let mut encoder = ::png::Encoder::new(&mut bytes, 2, 2);
            encoder.set_color(::png::ColorType::Grayscale);
            encoder.set_depth(::png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[1, 2, 3, 4]).unwrap();
        }
        let grid = read_intensity_bytes(&bytes).unwrap();
        assert_eq!(grid.data(), &[1, 2, 3, 4]);
    }
}
