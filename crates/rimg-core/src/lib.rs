//! # rimg-core
//!
//! Core types for raster image processing.
//!
//! This crate provides the data model shared by the rest of the workspace:
//!
//! - [`PixelBuffer`] - Owned 8-bit raster buffer (interleaved, row-major)
//! - [`luminance_map`] - Shared brightness computation (Rec.601 weights)
//! - [`CoreError`] - Error type for buffer construction
//!
//! # Used By
//!
//! - `rimg-ops` - Pixel transform operations
//! - `rimg-ascii` - Brightness-to-glyph rendering
//! - `rimg-io` - Image loading/saving

#![warn(missing_docs)]

mod buffer;
mod error;
mod luminance;

pub use buffer::PixelBuffer;
pub use error::{CoreError, CoreResult};
pub use luminance::{color_channels, luma, luminance_map};
