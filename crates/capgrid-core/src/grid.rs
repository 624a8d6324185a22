//! Intensity grid - single-channel image container
//!
//! [`IntensityGrid`] is the decoded form of a captcha image: one 8-bit
//! brightness value per pixel, row-major. Grids are produced once by the
//! I/O layer, consumed by segmentation, and then discarded; there is no
//! shared ownership or in-place mutation after construction.

use crate::error::{Error, Result};

/// Single-channel 8-bit image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl IntensityGrid {
    /// Create a grid filled with a uniform intensity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        })
    }

    /// Create a grid from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero, or
    /// [`Error::DataSizeMismatch`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intensity at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set the intensity at `(x, y)`.
    ///
    /// Construction-time helper for synthesizing grids; decoded grids are
    /// not mutated after they leave the I/O layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::RegionOutOfBounds {
                x,
                y,
                width: 1,
                height: 1,
                grid_width: self.width,
                grid_height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Copy a rectangular region into a new grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if the region extends past the
    /// grid boundary, and [`Error::InvalidDimension`] for an empty region.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if x + width > self.width || y + height > self.height {
            return Err(Error::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                grid_width: self.width,
                grid_height: self.height,
            });
        }
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for row in y..y + height {
            let start = row as usize * self.width as usize + x as usize;
            data.extend_from_slice(&self.data[start..start + width as usize]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// The raw row-major pixel buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
