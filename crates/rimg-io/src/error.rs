//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported bit depth or pixel layout.
    #[error("unsupported pixel layout: {0}")]
    UnsupportedLayout(String),

    /// Decoded data is inconsistent with the reported dimensions.
    #[error("invalid image data: {0}")]
    InvalidData(String),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
