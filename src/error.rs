//! Error types for DDS conversion operations

use image::error::ImageError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting DDS files
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path has no file stem to derive the output name from
    #[error("input path {0} has no file stem")]
    NoFileStem(PathBuf),

    /// JPEG quality outside the accepted range
    #[error("JPEG quality {0} is out of range (expected 1-100)")]
    QualityOutOfRange(u8),

    /// Input folder could not be enumerated
    #[error("failed to read input folder {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },

    /// Source file could not be opened
    #[error("failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    /// Source file could not be decoded as a DDS texture
    #[error("failed to decode {path}: {source}")]
    Decode { path: PathBuf, source: ImageError },

    /// Encoding or writing the output file failed
    #[error("failed to write {path}: {source}")]
    Encode { path: PathBuf, source: ImageError },

    /// The background batch thread panicked before producing an outcome
    #[error("batch worker thread panicked")]
    WorkerPanicked,
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
