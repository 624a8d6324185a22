//! Capgrid Core - Basic data structures for captcha recognition
//!
//! This crate provides the fundamental data structures used throughout
//! the capgrid recognizer:
//!
//! - [`IntensityGrid`] - decoded single-channel image
//! - [`Morphology`] - fixed 10x8 boolean character mask
//!
//! Both types are immutable in normal use: a grid is decoded once and
//! consumed by segmentation, and a mask never changes after extraction.

pub mod error;
pub mod grid;
pub mod morphology;

pub use error::{Error, Result};
pub use grid::IntensityGrid;
pub use morphology::{MORPH_CELLS, MORPH_HEIGHT, MORPH_WIDTH, Morphology};
