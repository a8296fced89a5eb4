//! Shared brightness computation.
//!
//! The edge detector and the ASCII renderer both reduce pixels to a single
//! brightness value using the same Rec.601 weighting, so the routine lives
//! here rather than in either consumer.

use crate::PixelBuffer;

/// Rec.601 luma of an RGB triple, rounded to the nearest integer.
///
/// Rounding (rather than truncating) keeps grayscale conversion exactly
/// idempotent: for a gray pixel the weighted sum is `g` up to float error,
/// and rounding recovers `g`.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let l = 0.299f32 * r as f32 + 0.587f32 * g as f32 + 0.114f32 * b as f32;
    l.round().clamp(0.0, 255.0) as u8
}

/// Number of leading color (non-alpha) channels for a channel count.
///
/// Gray and gray+alpha buffers have one color channel; RGB and RGBA have
/// three. Per-pixel color transforms touch only these channels.
#[inline]
pub fn color_channels(channels: u32) -> u32 {
    match channels {
        1 | 2 => 1,
        _ => 3,
    }
}

/// Computes the W*H luminance map of a buffer.
///
/// For 3- and 4-channel buffers this is the weighted [`luma`] of each
/// pixel; for 1- and 2-channel buffers the gray channel is copied directly.
///
/// # Example
///
/// ```rust
/// use rimg_core::{luminance_map, PixelBuffer};
///
/// let buf = PixelBuffer::filled(2, 2, 3, &[255, 255, 255]).unwrap();
/// assert_eq!(luminance_map(&buf), vec![255; 4]);
/// ```
pub fn luminance_map(buffer: &PixelBuffer) -> Vec<u8> {
    let c = buffer.channels() as usize;
    if c >= 3 {
        buffer
            .data()
            .chunks_exact(c)
            .map(|px| luma(px[0], px[1], px[2]))
            .collect()
    } else {
        buffer.data().chunks_exact(c).map(|px| px[0]).collect()
    }
}
