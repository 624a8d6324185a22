//! PNG image format support
//!
//! Reads PNG images using the `png` crate and extracts the first channel
//! as the intensity grid. PNG is the lossless sibling of the JPEG inputs:
//! the fixed captcha layout is pixel-exact, so fixtures and alternate
//! sources are usually stored as PNG.

use crate::{IoError, IoResult};
use capgrid_core::IntensityGrid;
use png::{BitDepth, ColorType, Decoder};
use std::io::{BufRead, Seek};

/// Read a PNG image and extract its first channel.
///
/// Indexed PNGs are rejected: a palette gives no equal-channel guarantee,
/// which puts it outside the captcha family this crate targets.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<IntensityGrid> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    // Samples per pixel for the supported color types
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG has no first-channel intensity".to_string(),
            ));
        }
    };

    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        // 16-bit samples are big-endian; the high byte carries the intensity
        BitDepth::Sixteen => 2,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG bit depth: {:?}",
                bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let bytes_per_pixel = samples * bytes_per_sample;
    let data_bytes = &buf[..output_info.buffer_size()];

    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data_bytes[y * bytes_per_row..];
        for x in 0..width as usize {
            data.push(row[x * bytes_per_pixel]);
        }
    }

    IntensityGrid::from_raw(width, height, data).map_err(IoError::Core)
}

#[cfg(test)]
mod tests {
    use super::*;
    use png::Encoder;

    fn encode(color: ColorType, width: u32, height: u32, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_read_grayscale() {
        let pixels: Vec<u8> = (0..12).map(|i| i * 20).collect();
        let bytes = encode(ColorType::Grayscale, 4, 3, &pixels);
        let grid = read_png(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.data(), &pixels[..]);
    }

    #[test]
    fn test_read_rgb_first_channel() {
        // R differs from G/B; the reader must keep R
        let mut pixels = Vec::new();
        for i in 0..6u8 {
            pixels.extend_from_slice(&[i * 10, 255, 0]);
        }
        let bytes = encode(ColorType::Rgb, 3, 2, &pixels);
        let grid = read_png(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(grid.data(), &[0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_read_rgba_first_channel() {
        let mut pixels = Vec::new();
        for i in 0..4u8 {
            pixels.extend_from_slice(&[100 + i, 0, 0, 255]);
        }
        let bytes = encode(ColorType::Rgba, 2, 2, &pixels);
        let grid = read_png(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(grid.data(), &[100, 101, 102, 103]);
    }

    #[test]
    fn test_read_corrupt_data() {
        let result = read_png(std::io::Cursor::new(b"\x89PNG\r\n\x1a\nnot a real png"));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
