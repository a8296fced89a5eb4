//! BMP format support.
//!
//! Delegates to the `image` crate. Decoded data is kept in the codec's
//! channel count where it maps onto an interleaved 8-bit layout, and
//! falls back to RGB otherwise.

use crate::{IoError, IoResult};
use image::{DynamicImage, ImageFormat, ImageReader};
use rimg_core::PixelBuffer;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// Reads a BMP file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    trace!(path = %path.as_ref().display(), "bmp read");
    let file = File::open(path.as_ref())?;
    let reader = ImageReader::with_format(BufReader::new(file), ImageFormat::Bmp);
    let decoded = reader
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let (width, height) = (decoded.width(), decoded.height());
    let (channels, data) = match decoded {
        DynamicImage::ImageLuma8(img) => (1, img.into_raw()),
        DynamicImage::ImageLumaA8(img) => (2, img.into_raw()),
        DynamicImage::ImageRgb8(img) => (3, img.into_raw()),
        DynamicImage::ImageRgba8(img) => (4, img.into_raw()),
        other => (3, other.into_rgb8().into_raw()),
    };

    PixelBuffer::from_data(width, height, channels, data)
        .map_err(|e| IoError::InvalidData(e.to_string()))
}

/// Writes an image to a BMP file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    trace!(path = %path.as_ref().display(), "bmp write");
    let (width, height) = image.dimensions();
    let data = image.data().to_vec();

    let dynamic = match image.channels() {
        1 => image::GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        2 => image::GrayAlphaImage::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
        3 => image::RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        4 => image::RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
        n => {
            return Err(IoError::EncodeError(format!(
                "unsupported channel count: {}",
                n
            )))
        }
    }
    .ok_or_else(|| IoError::EncodeError("buffer size mismatch".into()))?;

    dynamic
        .save_with_format(path.as_ref(), ImageFormat::Bmp)
        .map_err(|e| IoError::EncodeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_rgb() {
        let mut data = Vec::new();
        for i in 0..(8 * 8) {
            data.extend_from_slice(&[(i * 3) as u8, (i * 5) as u8, 200]);
        }
        let image = PixelBuffer::from_data(8, 8, 3, data).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.bmp");
        write(&path, &image).expect("write failed");
        let loaded = read(&path).expect("read failed");

        assert_eq!(loaded, image);
    }

    #[test]
    fn test_roundtrip_grayscale() {
        let image = PixelBuffer::filled(6, 4, 1, &[33]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.bmp");

        write(&path, &image).expect("write failed");
        let loaded = read(&path).expect("read failed");

        assert_eq!(loaded.dimensions(), (6, 4));
        assert!(loaded.data().iter().all(|&s| s == 33));
    }
}
