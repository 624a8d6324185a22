//! Error types for capgrid-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Capgrid core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the stated dimensions
    #[error("data size mismatch: expected {expected} bytes, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },

    /// A requested region extends past the grid boundary
    #[error(
        "region out of bounds: {x},{y} {width}x{height} on a {grid_width}x{grid_height} grid"
    )]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        grid_width: u32,
        grid_height: u32,
    },

    /// A mask cell index is outside the fixed 10x8 mask
    #[error("cell out of bounds: row {row}, col {col}")]
    CellOutOfBounds { row: usize, col: usize },
}

/// Result type alias for capgrid core operations
pub type Result<T> = std::result::Result<T, Error>;
