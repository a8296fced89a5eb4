//! Convolution filters.
//!
//! Provides box (uniform-mean) and Gaussian blur over a shared convolution
//! routine.
//!
//! # Boundary policy
//!
//! Sampled coordinates outside the image are clamped to the nearest valid
//! edge coordinate, so edge and corner pixels over-weight their border
//! values. The window is never shrunk.
//!
//! # Example
//!
//! ```rust
//! use rimg_core::PixelBuffer;
//! use rimg_ops::filter::{box_blur, gaussian_blur};
//!
//! let buf = PixelBuffer::filled(16, 16, 3, &[100, 150, 200]).unwrap();
//! let out = box_blur(&buf, 2).unwrap();
//! // Uniform input is invariant under blur.
//! assert_eq!(out, buf);
//! let _ = gaussian_blur(&buf, 2).unwrap();
//! ```

use crate::{OpsError, OpsResult};
use rimg_core::PixelBuffer;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Square convolution kernel with odd side length.
#[derive(Debug, Clone)]
pub struct Kernel {
    weights: Vec<f32>,
    size: usize,
}

impl Kernel {
    /// Creates a uniform-mean kernel of side `2 * radius + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] if `radius < 1`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rimg_ops::Kernel;
    ///
    /// let k = Kernel::mean(1).unwrap();
    /// assert_eq!(k.size(), 3);
    /// ```
    pub fn mean(radius: u32) -> OpsResult<Self> {
        let size = Self::side(radius)?;
        let count = size * size;
        Ok(Self {
            weights: vec![1.0 / count as f32; count],
            size,
        })
    }

    /// Creates a Gaussian kernel of side `2 * radius + 1` with
    /// `sigma = radius / 2`.
    ///
    /// Weights are `exp(-(dx^2 + dy^2) / (2 sigma^2))` normalized to sum
    /// to 1; the analytic `1 / (2 pi sigma^2)` factor cancels in the
    /// normalization.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] if `radius < 1`.
    pub fn gaussian(radius: u32) -> OpsResult<Self> {
        let size = Self::side(radius)?;
        let half = radius as i32;
        let sigma = radius as f32 / 2.0;
        let denom = 2.0 * sigma * sigma;

        let mut weights = Vec::with_capacity(size * size);
        let mut sum = 0.0f32;
        for dy in -half..=half {
            for dx in -half..=half {
                let d = (dx * dx + dy * dy) as f32;
                let w = (-d / denom).exp();
                weights.push(w);
                sum += w;
            }
        }
        for w in &mut weights {
            *w /= sum;
        }

        Ok(Self { weights, size })
    }

    fn side(radius: u32) -> OpsResult<usize> {
        if radius < 1 {
            return Err(OpsError::InvalidParameter(format!(
                "blur radius must be >= 1, got {}",
                radius
            )));
        }
        Ok(2 * radius as usize + 1)
    }

    /// Returns the kernel side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the kernel radius (half side).
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Returns the kernel weights, row-major.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

/// Box blur: each output sample is the mean of the `(2r+1)^2` window.
///
/// # Example
///
/// ```rust
/// use rimg_core::PixelBuffer;
/// use rimg_ops::filter::box_blur;
///
/// let buf = PixelBuffer::filled(4, 4, 3, &[100, 150, 200]).unwrap();
/// assert_eq!(box_blur(&buf, 1).unwrap(), buf);
/// ```
pub fn box_blur(buffer: &PixelBuffer, radius: u32) -> OpsResult<PixelBuffer> {
    debug!(radius, w = buffer.width(), h = buffer.height(), "box blur");
    convolve(buffer, &Kernel::mean(radius)?)
}

/// Gaussian blur with `sigma = radius / 2`.
pub fn gaussian_blur(buffer: &PixelBuffer, radius: u32) -> OpsResult<PixelBuffer> {
    debug!(radius, w = buffer.width(), h = buffer.height(), "gaussian blur");
    convolve(buffer, &Kernel::gaussian(radius)?)
}

/// Convolves every channel of `buffer` with `kernel` independently.
///
/// Writes into a freshly allocated buffer so the neighborhood reads never
/// observe already-filtered samples. Output samples are rounded and
/// clamped to [0, 255].
pub fn convolve(buffer: &PixelBuffer, kernel: &Kernel) -> OpsResult<PixelBuffer> {
    trace!(
        w = buffer.width(),
        h = buffer.height(),
        c = buffer.channels(),
        k = kernel.size(),
        "convolve"
    );

    let w = buffer.width() as usize;
    let h = buffer.height() as usize;
    let c = buffer.channels() as usize;
    let row_len = w * c;

    let mut dst = vec![0u8; buffer.sample_count()];

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| convolve_row(buffer, kernel, y, row));

    #[cfg(not(feature = "parallel"))]
    for (y, row) in dst.chunks_mut(row_len).enumerate() {
        convolve_row(buffer, kernel, y, row);
    }

    PixelBuffer::from_data(
        buffer.width(),
        buffer.height(),
        buffer.channels(),
        dst,
    )
    .map_err(|e| OpsError::InvalidDimensions(e.to_string()))
}

/// Fills one output row. Each output element depends only on read-only
/// input samples, so rows are independent.
fn convolve_row(src: &PixelBuffer, kernel: &Kernel, y: usize, row: &mut [u8]) {
    let w = src.width() as usize;
    let h = src.height() as usize;
    let c = src.channels() as usize;
    let r = kernel.radius() as isize;
    let size = kernel.size();
    let data = src.data();

    for x in 0..w {
        let mut sums = [0.0f32; 4];
        for ky in 0..size {
            let sy = (y as isize + ky as isize - r).clamp(0, h as isize - 1) as usize;
            for kx in 0..size {
                let sx = (x as isize + kx as isize - r).clamp(0, w as isize - 1) as usize;
                let weight = kernel.weights()[ky * size + kx];
                let off = (sy * w + sx) * c;
                for ch in 0..c {
                    sums[ch] += weight * data[off + ch] as f32;
                }
            }
        }
        let off = x * c;
        for ch in 0..c {
            row[off + ch] = sums[ch].round().clamp(0.0, 255.0) as u8;
        }
    }
}
