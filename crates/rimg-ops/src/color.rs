//! Per-pixel color transforms.
//!
//! Grayscale and inversion are pure per-pixel maps with no neighborhood
//! dependency; both mutate the caller's buffer in place in O(W*H*C). The
//! alpha channel, when present, is never touched.

use crate::OpsResult;
use rimg_core::{color_channels, luma, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Converts a buffer to grayscale in place.
///
/// The Rec.601 luminance of each pixel is written to every color channel;
/// alpha is preserved. For 1- and 2-channel buffers the gray channel is
/// already the luminance, so this is a no-op on the data.
///
/// Idempotent: applying it twice gives the same result as applying it once.
///
/// # Example
///
/// ```rust
/// use rimg_core::PixelBuffer;
/// use rimg_ops::color::grayscale;
///
/// let mut buf = PixelBuffer::filled(2, 2, 3, &[255, 0, 0]).unwrap();
/// grayscale(&mut buf).unwrap();
/// let g = buf.pixel(0, 0)[0];
/// assert_eq!(buf.pixel(0, 0), &[g, g, g]);
/// ```
pub fn grayscale(buffer: &mut PixelBuffer) -> OpsResult<()> {
    trace!(
        w = buffer.width(),
        h = buffer.height(),
        c = buffer.channels(),
        "grayscale"
    );
    let c = buffer.channels() as usize;
    if c < 3 {
        return Ok(());
    }
    for px in buffer.data_mut().chunks_exact_mut(c) {
        let g = luma(px[0], px[1], px[2]);
        px[0] = g;
        px[1] = g;
        px[2] = g;
    }
    Ok(())
}

/// Inverts the color channels of a buffer in place.
///
/// Each color channel becomes `255 - value`; alpha is preserved. Applying
/// twice restores the original buffer exactly.
///
/// # Example
///
/// ```rust
/// use rimg_core::PixelBuffer;
/// use rimg_ops::color::invert;
///
/// let mut buf = PixelBuffer::filled(1, 1, 4, &[10, 20, 30, 200]).unwrap();
/// invert(&mut buf).unwrap();
/// assert_eq!(buf.pixel(0, 0), &[245, 235, 225, 200]);
/// ```
pub fn invert(buffer: &mut PixelBuffer) -> OpsResult<()> {
    trace!(
        w = buffer.width(),
        h = buffer.height(),
        c = buffer.channels(),
        "invert"
    );
    let c = buffer.channels() as usize;
    let color = color_channels(buffer.channels()) as usize;
    for px in buffer.data_mut().chunks_exact_mut(c) {
        for v in &mut px[..color] {
            *v = 255 - *v;
        }
    }
    Ok(())
}
