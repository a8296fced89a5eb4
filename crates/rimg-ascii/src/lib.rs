//! # rimg-ascii
//!
//! Brightness-to-glyph mapping for ASCII-art rendering.
//!
//! The renderer averages the luminance of sampling blocks, optionally
//! shapes the averaged brightness (gamma, contrast stretch), and maps it
//! to a position in an ordered character ramp.
//!
//! # Example
//!
//! ```rust
//! use rimg_core::PixelBuffer;
//! use rimg_ascii::{render, AsciiOptions};
//!
//! let buf = PixelBuffer::filled(20, 10, 3, &[0, 0, 0]).unwrap();
//! let art = render(&buf, &AsciiOptions::default()).unwrap();
//! assert!(art.rows().iter().all(|r| r.chars().all(|c| c == ' ')));
//! ```

#![warn(missing_docs)]

mod error;
mod ramp;
mod render;

pub use error::{AsciiError, AsciiResult};
pub use ramp::{Ramp, RampStyle};
pub use render::{render, AsciiArt, AsciiOptions};
