//! Error types for capgrid-recog

use thiserror::Error;

/// Errors that can occur during recognition operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] capgrid_core::Error),

    /// Image reading error
    #[error("image error: {0}")]
    Image(#[from] capgrid_io::IoError),

    /// Standard I/O error while persisting results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No training samples survived corpus construction
    #[error("empty corpus: no training samples loaded")]
    EmptyCorpus,
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
