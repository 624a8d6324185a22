//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and extracts the
//! first channel as the intensity grid. The captcha family this crate
//! targets encodes all color channels identically, so the first channel
//! is taken as ground truth intensity; this is a documented assumption,
//! not a general-purpose grayscale conversion.

use crate::{IoError, IoResult};
use capgrid_core::IntensityGrid;
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// The first channel of the decoded image as an [`IntensityGrid`].
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<IntensityGrid> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    // Stride of one pixel in the decoded buffer; the first byte of each
    // pixel is the first channel (L16 is big-endian, so byte 0 is the
    // high byte).
    let bytes_per_pixel = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::L16 => 2,
        PixelFormat::RGB24 => 3,
        PixelFormat::CMYK32 => 4,
    };

    let expected = width as usize * height as usize * bytes_per_pixel;
    if pixels.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG buffer too short: expected {} bytes, got {}",
            expected,
            pixels.len()
        )));
    }

    let data: Vec<u8> = pixels
        .chunks_exact(bytes_per_pixel)
        .map(|px| px[0])
        .collect();

    IntensityGrid::from_raw(width, height, data).map_err(IoError::Core)
}
