//! PNG format support.
//!
//! 8-bit gray, gray+alpha, RGB, and RGBA are passed through with the
//! codec's channel count; 16-bit images are narrowed to 8 bits. Palette
//! and sub-byte depths are not supported.
//!
//! # Example
//!
//! ```rust,ignore
//! use rimg_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write("output.png", &image)?;
//! ```

use crate::{IoError, IoResult};
use rimg_core::PixelBuffer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::trace;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    trace!(path = %path.as_ref().display(), "png read");
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(IoError::UnsupportedLayout("indexed PNG".into()));
        }
    };

    let data = match info.bit_depth {
        png::BitDepth::Eight => buf,
        // Narrow 16-bit samples (big-endian) to their high byte.
        png::BitDepth::Sixteen => buf.chunks_exact(2).map(|s| s[0]).collect(),
        depth => {
            return Err(IoError::UnsupportedLayout(format!(
                "PNG bit depth {:?}",
                depth
            )));
        }
    };

    PixelBuffer::from_data(info.width, info.height, channels, data)
        .map_err(|e| IoError::InvalidData(e.to_string()))
}

/// Writes an image to an 8-bit PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    trace!(path = %path.as_ref().display(), "png write");
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let color_type = match image.channels() {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => return Err(IoError::EncodeError(format!("unsupported channel count: {}", n))),
    };

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32, channels: u32) -> PixelBuffer {
        let mut data = Vec::with_capacity((width * height * channels) as usize);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    data.push((x * 8 + y * 4 + c * 50) as u8);
                }
            }
        }
        PixelBuffer::from_data(width, height, channels, data).unwrap()
    }

    #[test]
    fn test_roundtrip_rgb() {
        let image = gradient(32, 16, 3);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        write(&path, &image).expect("write failed");
        let loaded = read(&path).expect("read failed");

        assert_eq!(loaded, image);
    }

    #[test]
    fn test_roundtrip_rgba() {
        let image = gradient(16, 16, 4);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");

        write(&path, &image).expect("write failed");
        let loaded = read(&path).expect("read failed");

        assert_eq!(loaded, image);
    }

    #[test]
    fn test_roundtrip_grayscale_keeps_one_channel() {
        let image = gradient(8, 8, 1);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");

        write(&path, &image).expect("write failed");
        let loaded = read(&path).expect("read failed");

        assert_eq!(loaded.channels(), 1);
        assert_eq!(loaded, image);
    }
}
