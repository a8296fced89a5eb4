//! Geometric transforms.
//!
//! Flips and 180-degree rotation. All three mutate the caller's buffer in
//! place through a full temporary copy, so the mirror never reads samples
//! it has already written. All channels are preserved unchanged.

use crate::OpsResult;
use rimg_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Flips the buffer vertically (top-bottom mirror) in place.
///
/// The pixel at (x, y) moves to (x, H-1-y).
///
/// # Example
///
/// ```rust
/// use rimg_core::PixelBuffer;
/// use rimg_ops::transform::flip_vertical;
///
/// let mut buf = PixelBuffer::from_data(1, 2, 1, vec![10, 20]).unwrap();
/// flip_vertical(&mut buf).unwrap();
/// assert_eq!(buf.data(), &[20, 10]);
/// ```
pub fn flip_vertical(buffer: &mut PixelBuffer) -> OpsResult<()> {
    trace!(w = buffer.width(), h = buffer.height(), "flip vertical");
    let h = buffer.height() as usize;
    let row_len = buffer.width() as usize * buffer.channels() as usize;
    let temp = buffer.data().to_vec();
    let data = buffer.data_mut();
    for y in 0..h {
        let src = y * row_len;
        let dst = (h - 1 - y) * row_len;
        data[dst..dst + row_len].copy_from_slice(&temp[src..src + row_len]);
    }
    Ok(())
}

/// Flips the buffer horizontally (left-right mirror) in place.
pub fn flip_horizontal(buffer: &mut PixelBuffer) -> OpsResult<()> {
    trace!(w = buffer.width(), h = buffer.height(), "flip horizontal");
    let w = buffer.width() as usize;
    let h = buffer.height() as usize;
    let c = buffer.channels() as usize;
    let temp = buffer.data().to_vec();
    let data = buffer.data_mut();
    for y in 0..h {
        for x in 0..w {
            let src = (y * w + x) * c;
            let dst = (y * w + (w - 1 - x)) * c;
            data[dst..dst + c].copy_from_slice(&temp[src..src + c]);
        }
    }
    Ok(())
}

/// Rotates the buffer 180 degrees in place.
///
/// Equivalent to a vertical followed by a horizontal flip.
pub fn rotate_180(buffer: &mut PixelBuffer) -> OpsResult<()> {
    trace!(w = buffer.width(), h = buffer.height(), "rotate 180");
    let w = buffer.width() as usize;
    let h = buffer.height() as usize;
    let c = buffer.channels() as usize;
    let temp = buffer.data().to_vec();
    let data = buffer.data_mut();
    for y in 0..h {
        for x in 0..w {
            let src = (y * w + x) * c;
            let dst = ((h - 1 - y) * w + (w - 1 - x)) * c;
            data[dst..dst + c].copy_from_slice(&temp[src..src + c]);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32, c: u32) -> PixelBuffer {
        let mut data = Vec::new();
        for y in 0..h {
            for x in 0..w {
                for ch in 0..c {
                    data.push((x * 7 + y * 31 + ch * 3) as u8);
                }
            }
        }
        PixelBuffer::from_data(w, h, c, data).unwrap()
    }

    #[test]
    fn test_flip_vertical_moves_rows() {
        let mut buf = PixelBuffer::from_data(2, 2, 1, vec![1, 2, 3, 4]).unwrap();
        flip_vertical(&mut buf).unwrap();
        assert_eq!(buf.data(), &[3, 4, 1, 2]);
    }

    #[test]
    fn test_flip_vertical_involution() {
        let original = gradient(5, 4, 3);
        let mut buf = original.clone();
        flip_vertical(&mut buf).unwrap();
        assert_ne!(buf, original);
        flip_vertical(&mut buf).unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn test_flip_horizontal_involution() {
        let original = gradient(4, 3, 4);
        let mut buf = original.clone();
        flip_horizontal(&mut buf).unwrap();
        flip_horizontal(&mut buf).unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn test_rotate_180_corners() {
        let mut buf = PixelBuffer::from_data(2, 2, 1, vec![1, 2, 3, 4]).unwrap();
        rotate_180(&mut buf).unwrap();
        assert_eq!(buf.data(), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_rotate_180_equals_both_flips() {
        let original = gradient(6, 5, 2);
        let mut rotated = original.clone();
        rotate_180(&mut rotated).unwrap();
        let mut flipped = original.clone();
        flip_vertical(&mut flipped).unwrap();
        flip_horizontal(&mut flipped).unwrap();
        assert_eq!(rotated, flipped);
    }
}
