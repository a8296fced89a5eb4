//! Brightness quantization and grid rendering.
//!
//! The image is divided into `Hs x Vs` sampling blocks. Each block's mean
//! luminance is shaped (optional contrast stretch, then gamma) and mapped
//! to a ramp index; partial blocks at the right and bottom edges average
//! only their in-bounds pixels.

use crate::{AsciiError, AsciiResult, Ramp};
use rimg_core::{luminance_map, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Gamma is clamped to this range before shaping.
pub const GAMMA_RANGE: (f32, f32) = (0.1, 3.0);

/// Default vertical-to-horizontal step ratio. Glyph cells are roughly
/// twice as tall as wide, so vertical steps default to double the
/// horizontal step.
pub const DEFAULT_ASPECT: f32 = 2.0;

/// Rendering options.
#[derive(Debug, Clone)]
pub struct AsciiOptions {
    /// Horizontal sampling step in source pixels (>= 1).
    pub step: u32,
    /// Vertical step multiplier; `Vs = max(1, round(step * aspect))`.
    pub aspect: f32,
    /// Gamma shaping exponent, clamped to [0.1, 3.0].
    pub gamma: f32,
    /// Glyph ramp, darkest to brightest.
    pub ramp: Ramp,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self {
            step: 5,
            aspect: DEFAULT_ASPECT,
            gamma: 1.0,
            ramp: Ramp::default(),
        }
    }
}

impl AsciiOptions {
    /// Effective vertical step.
    pub fn vertical_step(&self) -> u32 {
        ((self.step as f32 * self.aspect).round() as u32).max(1)
    }

    /// Gamma actually applied by the renderer, clamped to [`GAMMA_RANGE`].
    pub fn effective_gamma(&self) -> f32 {
        self.gamma.clamp(GAMMA_RANGE.0, GAMMA_RANGE.1)
    }
}

/// A rendered character grid.
#[derive(Debug, Clone)]
pub struct AsciiArt {
    columns: usize,
    lines: usize,
    rows: Vec<String>,
}

impl AsciiArt {
    /// Grid width in glyphs.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Grid height in rows.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// The rendered rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl std::fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Renders a buffer into a character grid.
///
/// The grid has `ceil(W / Hs)` columns and `ceil(H / Vs)` rows, where
/// `Hs` is `options.step` and `Vs` is [`AsciiOptions::vertical_step`].
///
/// # Errors
///
/// Returns [`AsciiError::InvalidParameter`] if `step < 1` or the aspect
/// multiplier is not finite and positive.
pub fn render(buffer: &PixelBuffer, options: &AsciiOptions) -> AsciiResult<AsciiArt> {
    if options.step < 1 {
        return Err(AsciiError::InvalidParameter(format!(
            "sampling step must be >= 1, got {}",
            options.step
        )));
    }
    if !options.aspect.is_finite() || options.aspect <= 0.0 {
        return Err(AsciiError::InvalidParameter(format!(
            "aspect correction must be positive, got {}",
            options.aspect
        )));
    }

    let w = buffer.width() as usize;
    let h = buffer.height() as usize;
    let hs = options.step as usize;
    let vs = options.vertical_step() as usize;
    let gamma = options.effective_gamma();

    let columns = w.div_ceil(hs);
    let lines = h.div_ceil(vs);
    debug!(
        w,
        h,
        hs,
        vs,
        columns,
        lines,
        ramp = options.ramp.name(),
        "rendering ascii grid"
    );

    let lum = luminance_map(buffer);
    let ramp = &options.ramp;
    let max_index = (ramp.len() - 1) as f32;

    let mut rows = Vec::with_capacity(lines);
    for cell_y in 0..lines {
        let y0 = cell_y * vs;
        let y1 = (y0 + vs).min(h);
        let mut row = String::with_capacity(columns);
        for cell_x in 0..columns {
            let x0 = cell_x * hs;
            let x1 = (x0 + hs).min(w);

            // u64: a block can cover the whole image, and W*H*255
            // overflows u32 past ~16.8M pixels.
            let mut sum = 0u64;
            for y in y0..y1 {
                for x in x0..x1 {
                    sum += lum[y * w + x] as u64;
                }
            }
            let count = ((y1 - y0) * (x1 - x0)) as u64;
            let brightness = sum as f32 / count as f32;

            let index = quantize(brightness, gamma, ramp.contrast_stretch(), max_index);
            row.push(ramp.glyph(index));
        }
        rows.push(row);
    }

    Ok(AsciiArt {
        columns,
        lines,
        rows,
    })
}

/// Maps an averaged brightness in [0, 255] to a ramp index.
fn quantize(brightness: f32, gamma: f32, contrast_stretch: bool, max_index: f32) -> usize {
    let mut n = brightness / 255.0;
    if contrast_stretch {
        n = ((n - 0.5) * 1.5 + 0.5).clamp(0.0, 1.0);
    }
    let shaped = n.powf(gamma);
    (shaped * max_index).round().clamp(0.0, max_index) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RampStyle;

    fn opts(step: u32) -> AsciiOptions {
        AsciiOptions {
            step,
            ..AsciiOptions::default()
        }
    }

    #[test]
    fn test_grid_dimensions_are_ceilings() {
        let buf = PixelBuffer::new(10, 10, 1).unwrap();
        for (step, aspect, cols, lines) in [
            (1u32, 1.0f32, 10usize, 10usize),
            (3, 1.0, 4, 4),
            (10, 1.0, 1, 1),
            (4, 2.0, 3, 2),
            (7, 2.0, 2, 1),
        ] {
            let options = AsciiOptions {
                step,
                aspect,
                ..AsciiOptions::default()
            };
            let art = render(&buf, &options).unwrap();
            assert_eq!((art.columns(), art.lines()), (cols, lines));
            assert!(art.rows().iter().all(|r| r.chars().count() == cols));
        }
    }

    #[test]
    fn test_black_maps_to_darkest_glyph() {
        let buf = PixelBuffer::new(12, 9, 3).unwrap();
        for style in RampStyle::ALL {
            let options = AsciiOptions {
                ramp: style.ramp(),
                ..opts(3)
            };
            let art = render(&buf, &options).unwrap();
            let darkest = style.ramp().darkest();
            assert!(
                art.rows()
                    .iter()
                    .all(|r| r.chars().all(|c| c == darkest)),
                "style {}",
                style
            );
        }
    }

    #[test]
    fn test_white_maps_to_brightest_glyph() {
        let buf = PixelBuffer::filled(12, 9, 3, &[255, 255, 255]).unwrap();
        for style in RampStyle::ALL {
            let options = AsciiOptions {
                ramp: style.ramp(),
                ..opts(3)
            };
            let art = render(&buf, &options).unwrap();
            let brightest = style.ramp().brightest();
            assert!(
                art.rows()
                    .iter()
                    .all(|r| r.chars().all(|c| c == brightest)),
                "style {}",
                style
            );
        }
    }

    #[test]
    fn test_zero_step_rejected() {
        let buf = PixelBuffer::new(4, 4, 1).unwrap();
        assert!(render(&buf, &opts(0)).is_err());
    }

    #[test]
    fn test_bad_aspect_rejected() {
        let buf = PixelBuffer::new(4, 4, 1).unwrap();
        let options = AsciiOptions {
            aspect: 0.0,
            ..opts(2)
        };
        assert!(render(&buf, &options).is_err());
    }

    #[test]
    fn test_partial_blocks_average_in_bounds_only() {
        // 3 wide, step 2: second column is a single-pixel-wide block.
        // Left block averages (0 + 0) / 2, right block is pure white.
        let buf = PixelBuffer::from_data(3, 1, 1, vec![0, 0, 255]).unwrap();
        let options = AsciiOptions {
            step: 2,
            aspect: 1.0,
            ..AsciiOptions::default()
        };
        let art = render(&buf, &options).unwrap();
        let ramp = Ramp::default();
        let row: Vec<char> = art.rows()[0].chars().collect();
        assert_eq!(row, vec![ramp.darkest(), ramp.brightest()]);
    }

    #[test]
    fn test_gamma_brightens_midtones() {
        let buf = PixelBuffer::filled(4, 2, 1, &[128]).unwrap();
        let base = render(&buf, &opts(1)).unwrap();
        let options = AsciiOptions {
            gamma: 0.3,
            ..opts(1)
        };
        let bright = render(&buf, &options).unwrap();
        let ramp = Ramp::default();
        let base_idx = ramp_index_of(&ramp, base.rows()[0].chars().next().unwrap());
        let bright_idx = ramp_index_of(&ramp, bright.rows()[0].chars().next().unwrap());
        assert!(bright_idx > base_idx);
    }

    #[test]
    fn test_whole_image_block_on_large_image() {
        // One cell covering 4200x4200 all-white pixels; the brightness
        // sum (255 * 17.64M) exceeds u32::MAX and must not wrap.
        let buf = PixelBuffer::filled(4200, 4200, 1, &[255]).unwrap();
        let options = AsciiOptions {
            step: 4200,
            aspect: 1.0,
            ..AsciiOptions::default()
        };
        let art = render(&buf, &options).unwrap();
        assert_eq!((art.columns(), art.lines()), (1, 1));
        assert_eq!(art.rows()[0], Ramp::default().brightest().to_string());
    }

    #[test]
    fn test_effective_gamma_clamped() {
        let mut options = AsciiOptions::default();
        options.gamma = 100.0;
        assert_eq!(options.effective_gamma(), GAMMA_RANGE.1);
        options.gamma = 0.0001;
        assert_eq!(options.effective_gamma(), GAMMA_RANGE.0);
        options.gamma = 1.4;
        assert_eq!(options.effective_gamma(), 1.4);
    }

    #[test]
    fn test_gamma_clamped_to_range() {
        // gamma 100 clamps to 3.0, so output matches an explicit 3.0.
        let buf = PixelBuffer::filled(4, 4, 1, &[90]).unwrap();
        let wild = AsciiOptions {
            gamma: 100.0,
            ..opts(2)
        };
        let clamped = AsciiOptions {
            gamma: 3.0,
            ..opts(2)
        };
        assert_eq!(
            render(&buf, &wild).unwrap().rows(),
            render(&buf, &clamped).unwrap().rows()
        );
    }

    #[test]
    fn test_display_joins_rows_with_newlines() {
        let buf = PixelBuffer::new(2, 4, 1).unwrap();
        let options = AsciiOptions {
            step: 1,
            aspect: 2.0,
            ..AsciiOptions::default()
        };
        let art = render(&buf, &options).unwrap();
        assert_eq!(art.to_string(), "  \n  \n");
    }

    fn ramp_index_of(ramp: &Ramp, glyph: char) -> usize {
        (0..ramp.len()).find(|&i| ramp.glyph(i) == glyph).unwrap()
    }
}
