//! Error types for ASCII rendering.

use thiserror::Error;

/// Error type for ASCII rendering.
#[derive(Error, Debug)]
pub enum AsciiError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Ramp is too short or unknown.
    #[error("invalid ramp: {0}")]
    InvalidRamp(String),
}

/// Result type for ASCII rendering.
pub type AsciiResult<T> = Result<T, AsciiError>;
