//! capgrid-recog - fixed-geometry captcha recognition
//!
//! This crate implements the interesting half of the capgrid workspace:
//!
//! - **Segmentation**: crop the fixed character band, threshold it, and
//!   slice it into 5 character masks ([`segment`])
//! - **Training**: build a [`Corpus`] of distinct per-character masks
//!   from the labeled sample directory ([`train`])
//! - **Classification**: exact structural lookup or naive Bayes over
//!   pixel features ([`classify`])
//! - **Pipeline**: decode, segment, classify, persist ([`Recognizer`])
//!
//! # Quick Start
//!
//! ```no_run
//! use capgrid_recog::{ClassifierKind, Recognizer};
//!
//! let (recognizer, report) =
//!     Recognizer::train("sampleCaptchas", ClassifierKind::Exact).unwrap();
//! println!("trained from {} samples", report.trained_count());
//!
//! let text = recognizer.run("input/input100.jpg", "output/output100.txt").unwrap();
//! println!("recognized: {}", text);
//! ```

pub mod classify;
pub mod corpus;
mod error;
pub mod pipeline;
pub mod segment;
pub mod train;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use classify::{Classifier, ClassifierKind, ExactMatcher, PixelBayes};
pub use corpus::{CharClass, Corpus};
pub use pipeline::Recognizer;
pub use segment::{INK_THRESHOLD, SLOT_COUNT, segment};
pub use train::{SampleReport, SampleStatus, SkipReason, TrainingReport, load_training_dir};

// Re-export core for convenience
pub use capgrid_core;
