//! JPEG format support.
//!
//! Decoding uses `jpeg-decoder` and covers grayscale, RGB, and CMYK
//! baseline streams; 16-bit lossless grayscale is narrowed to 8 bits.
//! Encoding uses `jpeg-encoder`. JPEG has no alpha channel, so 2- and
//! 4-channel buffers are written with their alpha stripped.
//!
//! # Example
//!
//! ```rust,ignore
//! use rimg_io::jpeg::{self, JpegWriterOptions};
//!
//! let image = jpeg::read("input.jpg")?;
//! jpeg::write_with_options("output.jpg", &image, &JpegWriterOptions { quality: 95 })?;
//! ```

use crate::{IoError, IoResult};
use rimg_core::PixelBuffer;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// JPEG encoding options.
#[derive(Debug, Clone, Copy)]
pub struct JpegWriterOptions {
    /// Quality, 1-100.
    pub quality: u8,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self { quality: 90 }
    }
}

/// Reads a JPEG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    trace!(path = %path.as_ref().display(), "jpeg read");
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));

    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG metadata".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let (channels, data) = match info.pixel_format {
        jpeg_decoder::PixelFormat::L8 => (1, pixels),
        jpeg_decoder::PixelFormat::RGB24 => (3, pixels),
        // Big-endian 16-bit grayscale, narrowed to the high byte.
        jpeg_decoder::PixelFormat::L16 => (1, pixels.chunks_exact(2).map(|s| s[0]).collect()),
        jpeg_decoder::PixelFormat::CMYK32 => (3, cmyk_to_rgb(&pixels)),
    };

    PixelBuffer::from_data(width, height, channels, data)
        .map_err(|e| IoError::InvalidData(e.to_string()))
}

/// Writes an image to a JPEG file with default quality.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    write_with_options(path, image, &JpegWriterOptions::default())
}

/// Writes an image to a JPEG file.
///
/// Single-channel buffers are encoded as grayscale, everything else as
/// RGB; alpha is dropped.
pub fn write_with_options<P: AsRef<Path>>(
    path: P,
    image: &PixelBuffer,
    options: &JpegWriterOptions,
) -> IoResult<()> {
    trace!(path = %path.as_ref().display(), quality = options.quality, "jpeg write");
    if image.width() > u16::MAX as u32 || image.height() > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "image {}x{} exceeds the JPEG size limit",
            image.width(),
            image.height()
        )));
    }

    let (color_type, data) = match image.channels() {
        1 => (jpeg_encoder::ColorType::Luma, image.data().to_vec()),
        2 => (
            jpeg_encoder::ColorType::Luma,
            image.data().iter().step_by(2).copied().collect(),
        ),
        3 => (jpeg_encoder::ColorType::Rgb, image.data().to_vec()),
        4 => (
            jpeg_encoder::ColorType::Rgb,
            image
                .data()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
        ),
        n => {
            return Err(IoError::EncodeError(format!(
                "unsupported channel count: {}",
                n
            )))
        }
    };

    let quality = options.quality.clamp(1, 100);
    let mut encoded = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut encoded, quality);
    encoder
        .encode(
            &data,
            image.width() as u16,
            image.height() as u16,
            color_type,
        )
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    std::fs::write(path, encoded)?;
    Ok(())
}

fn cmyk_to_rgb(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(4)
        .flat_map(|px| {
            let k = px[3] as u32;
            [
                (px[0] as u32 * k / 255) as u8,
                (px[1] as u32 * k / 255) as u8,
                (px[2] as u32 * k / 255) as u8,
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_rgb(width: u32, height: u32) -> PixelBuffer {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push((x * 4) as u8);
                data.push((y * 4) as u8);
                data.push(128);
            }
        }
        PixelBuffer::from_data(width, height, 3, data).unwrap()
    }

    #[test]
    fn test_roundtrip_rgb_is_lossy_but_close() {
        let image = gradient_rgb(32, 32);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.jpg");

        write_with_options(&path, &image, &JpegWriterOptions { quality: 95 })
            .expect("write failed");
        let loaded = read(&path).expect("read failed");

        assert_eq!(loaded.dimensions(), image.dimensions());
        assert_eq!(loaded.channels(), 3);

        let max_diff = image
            .data()
            .iter()
            .zip(loaded.data())
            .map(|(&a, &b)| (a as i16 - b as i16).unsigned_abs())
            .max()
            .unwrap();
        assert!(max_diff <= 16, "max sample error {} too large", max_diff);
    }

    #[test]
    fn test_grayscale_stays_single_channel() {
        let image = PixelBuffer::filled(16, 16, 1, &[77]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.jpg");

        write(&path, &image).expect("write failed");
        let loaded = read(&path).expect("read failed");

        assert_eq!(loaded.channels(), 1);
        assert_eq!(loaded.dimensions(), (16, 16));
    }

    #[test]
    fn test_rgba_drops_alpha() {
        let image = PixelBuffer::filled(8, 8, 4, &[200, 100, 50, 255]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.jpg");

        write(&path, &image).expect("write failed");
        let loaded = read(&path).expect("read failed");

        assert_eq!(loaded.channels(), 3);
    }

    #[test]
    fn test_oversized_image_rejected() {
        let image = PixelBuffer::new(70_000, 1, 1).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.jpg");
        assert!(write(&path, &image).is_err());
    }
}
