//! Error types for core buffer construction.

use thiserror::Error;

/// Error type for core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Buffer dimensions are invalid or inconsistent with the data length.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Unsupported channel count.
    #[error("unsupported channel count: {0} (expected 1-4)")]
    UnsupportedChannels(u32),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
