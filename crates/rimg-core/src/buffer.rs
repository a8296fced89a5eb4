//! Raster buffer type.
//!
//! [`PixelBuffer`] is the single image container used across the workspace:
//! 8-bit samples, interleaved channels, rows stored top-to-bottom.
//!
//! # Memory Layout
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//! ```
//!
//! Channel semantics are fixed by channel count: gray[,alpha] for 1-2
//! channels, RGB[,A] for 3-4.

use crate::{CoreError, CoreResult};

/// Owned 8-bit raster buffer.
///
/// Invariant: `data.len() == width * height * channels`, with
/// `channels` in 1..=4. Constructors enforce this; the field accessors
/// cannot break it.
///
/// # Example
///
/// ```rust
/// use rimg_core::PixelBuffer;
///
/// let buf = PixelBuffer::filled(4, 4, 3, &[100, 150, 200]).unwrap();
/// assert_eq!(buf.pixel(2, 2), &[100, 150, 200]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] for a zero dimension and
    /// [`CoreError::UnsupportedChannels`] for a channel count outside 1..=4.
    pub fn new(width: u32, height: u32, channels: u32) -> CoreResult<Self> {
        Self::validate_shape(width, height, channels)?;
        let len = width as usize * height as usize * channels as usize;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0u8; len],
        })
    }

    /// Creates a buffer from existing sample data.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if `data.len()` is not
    /// exactly `width * height * channels`.
    pub fn from_data(width: u32, height: u32, channels: u32, data: Vec<u8>) -> CoreResult<Self> {
        Self::validate_shape(width, height, channels)?;
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(CoreError::InvalidDimensions(format!(
                "expected {} samples for {}x{}x{}, got {}",
                expected,
                width,
                height,
                channels,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Creates a buffer with every pixel set to `pixel`.
    ///
    /// `pixel.len()` must equal the channel count.
    pub fn filled(width: u32, height: u32, channels: u32, pixel: &[u8]) -> CoreResult<Self> {
        Self::validate_shape(width, height, channels)?;
        if pixel.len() != channels as usize {
            return Err(CoreError::InvalidDimensions(format!(
                "fill value has {} samples, buffer has {} channels",
                pixel.len(),
                channels
            )));
        }
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * channels as usize);
        for _ in 0..count {
            data.extend_from_slice(pixel);
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    fn validate_shape(width: u32, height: u32, channels: u32) -> CoreResult<()> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions(format!(
                "zero-area buffer {}x{}",
                width, height
            )));
        }
        if !(1..=4).contains(&channels) {
            return Err(CoreError::UnsupportedChannels(channels));
        }
        Ok(())
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of channels per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the total number of samples (pixels * channels).
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Returns the raw sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw sample data mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns the sample data.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the sample index of pixel (x, y), channel 0.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }

    /// Returns the samples of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let off = self.offset(x, y);
        &self.data[off..off + self.channels as usize]
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds or `pixel` has the wrong length.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: &[u8]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let off = self.offset(x, y);
        let c = self.channels as usize;
        self.data[off..off + c].copy_from_slice(pixel);
    }

    /// Returns row `y` as a slice of samples.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let row_len = self.width as usize * self.channels as usize;
        let start = y as usize * row_len;
        &self.data[start..start + row_len]
    }
}
