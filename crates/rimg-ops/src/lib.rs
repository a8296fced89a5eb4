//! # rimg-ops
//!
//! Pixel transform engine for 8-bit raster buffers.
//!
//! # Modules
//!
//! - [`color`] - Per-pixel maps (grayscale, invert)
//! - [`filter`] - Convolution filters (box and Gaussian blur)
//! - [`edge`] - Sobel gradient edge detection with hysteresis
//! - [`transform`] - Flips and 180-degree rotation
//!
//! # Contract
//!
//! Per-pixel and geometric transforms mutate the caller's buffer in place;
//! neighborhood operations ([`filter::convolve`], [`edge::detect_edges`])
//! allocate and return a fresh buffer and never alias their input. All
//! operations validate arguments up front and return [`OpsError`] instead
//! of panicking or silently no-opping.
//!
//! # Example
//!
//! ```rust
//! use rimg_core::PixelBuffer;
//! use rimg_ops::{color, filter};
//!
//! let mut buf = PixelBuffer::filled(8, 8, 3, &[100, 150, 200]).unwrap();
//! color::grayscale(&mut buf).unwrap();
//! let blurred = filter::gaussian_blur(&buf, 2).unwrap();
//! assert_eq!(blurred.dimensions(), buf.dimensions());
//! ```

#![warn(missing_docs)]

mod error;

pub mod color;
pub mod edge;
pub mod filter;
pub mod transform;

pub use error::{OpsError, OpsResult};
pub use filter::Kernel;
