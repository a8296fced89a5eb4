//! # rimg-io
//!
//! Image I/O for the rimg raster pipeline.
//!
//! This crate reads and writes the formats the pipeline operates on:
//!
//! - **JPEG** - baseline decode, quality-controlled encode
//! - **PNG** - lossless with alpha support
//! - **BMP** - uncompressed interchange
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rimg_io::{read, write};
//!
//! // Read any supported format (auto-detected)
//! let image = read("input.jpg")?;
//!
//! // Write to a different format
//! write("output.png", &image)?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Channels | Notes |
//! |--------|------|-------|----------|-------|
//! | JPEG | Yes | Yes | 1, 3 | Alpha stripped on write, CMYK converted on read |
//! | PNG | Yes | Yes | 1-4 | 16-bit narrowed to 8 on read |
//! | BMP | Yes | Yes | 1-4 | Via the `image` crate |
//!
//! # Dependencies
//!
//! - [`rimg-core`] - Pixel buffer type
//! - [`png`] - PNG support
//! - [`jpeg-decoder`] / [`jpeg-encoder`] - JPEG support
//! - [`image`] - BMP support

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

pub mod bmp;
pub mod jpeg;
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use jpeg::JpegWriterOptions;

use rimg_core::PixelBuffer;
use std::path::Path;

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes first, then by file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let format = Format::detect(path)?;

    match format {
        Format::Png => png::read(path),
        Format::Jpeg => jpeg::read(path),
        Format::Bmp => bmp::read(path),
        Format::Unknown => Err(unsupported(path)),
    }
}

/// Writes an image to a file, detecting format from the extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created
/// - The extension does not name a supported format
/// - The image layout is incompatible with the format
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);

    match format {
        Format::Png => png::write(path, image),
        Format::Jpeg => jpeg::write(path, image),
        Format::Bmp => bmp::write(path, image),
        Format::Unknown => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}
