//! capgrid - fixed-geometry captcha recognition
//!
//! Umbrella crate re-exporting the capgrid workspace:
//!
//! - [`capgrid_core`] - intensity grids and character masks
//! - [`capgrid_io`] - raster decoding to intensity grids
//! - [`capgrid_recog`] - segmentation, training, classification, pipeline
//!
//! Most callers only need [`Recognizer`] and [`ClassifierKind`]:
//!
//! ```no_run
//! use capgrid::{ClassifierKind, Recognizer};
//!
//! let (recognizer, _report) =
//!     Recognizer::train("sampleCaptchas", ClassifierKind::Exact).unwrap();
//! let text = recognizer.run("input100.jpg", "output100.txt").unwrap();
//! assert!(text.len() <= 5);
//! ```

pub use capgrid_core;
pub use capgrid_io;
pub use capgrid_recog;

pub use capgrid_core::{IntensityGrid, Morphology};
pub use capgrid_recog::{ClassifierKind, Corpus, Recognizer, TrainingReport};
