//! Character ramps.
//!
//! A ramp is an ordered glyph sequence from darkest to brightest. The
//! built-in styles cover the usual trade-offs between contrast, tonal
//! resolution, and character-set portability; arbitrary ramp strings are
//! accepted through [`Ramp::custom`].

use crate::{AsciiError, AsciiResult};
use std::fmt;
use std::str::FromStr;

/// Short high-contrast set, 10 glyphs.
const RAMP_SHORT: &str = " .:-=+*#%@";

/// Extended set, 70 glyphs.
const RAMP_EXTENDED: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Block-shade set.
const RAMP_BLOCKS: &str = " \u{2591}\u{2592}\u{2593}\u{2588}";

/// Dense set; rendered with contrast stretching.
const RAMP_DENSE: &str = " _.,-=+:;cba!?0123456789$W#@\u{d1}";

/// Classic maximally-portable set.
const RAMP_CLASSIC: &str = " .oO0@";

/// Built-in ramp styles, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampStyle {
    /// Short high-contrast set (the default).
    Short,
    /// Extended 70-glyph set for smooth tonal gradients.
    Extended,
    /// Unicode shade blocks.
    Blocks,
    /// Dense set, shaped with a contrast stretch before gamma.
    Dense,
    /// Classic 6-glyph set restricted to universally portable characters.
    Classic,
}

impl RampStyle {
    /// All built-in styles.
    pub const ALL: [RampStyle; 5] = [
        RampStyle::Short,
        RampStyle::Extended,
        RampStyle::Blocks,
        RampStyle::Dense,
        RampStyle::Classic,
    ];

    /// Returns the style's identifier.
    pub fn name(self) -> &'static str {
        match self {
            RampStyle::Short => "short",
            RampStyle::Extended => "extended",
            RampStyle::Blocks => "blocks",
            RampStyle::Dense => "dense",
            RampStyle::Classic => "classic",
        }
    }

    /// Builds the ramp for this style.
    pub fn ramp(self) -> Ramp {
        let (glyphs, contrast) = match self {
            RampStyle::Short => (RAMP_SHORT, false),
            RampStyle::Extended => (RAMP_EXTENDED, false),
            RampStyle::Blocks => (RAMP_BLOCKS, false),
            RampStyle::Dense => (RAMP_DENSE, true),
            RampStyle::Classic => (RAMP_CLASSIC, false),
        };
        Ramp {
            name: self.name().to_string(),
            glyphs: glyphs.chars().collect(),
            contrast_stretch: contrast,
        }
    }
}

impl FromStr for RampStyle {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(RampStyle::Short),
            "extended" => Ok(RampStyle::Extended),
            "blocks" => Ok(RampStyle::Blocks),
            "dense" => Ok(RampStyle::Dense),
            "classic" => Ok(RampStyle::Classic),
            other => Err(AsciiError::InvalidRamp(format!(
                "unknown ramp style '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for RampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered glyph sequence from darkest to brightest.
///
/// Immutable after construction; the renderer only reads it.
#[derive(Debug, Clone)]
pub struct Ramp {
    name: String,
    glyphs: Vec<char>,
    contrast_stretch: bool,
}

impl Ramp {
    /// Builds a ramp from an arbitrary glyph string.
    ///
    /// # Errors
    ///
    /// Returns [`AsciiError::InvalidRamp`] for fewer than 2 glyphs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rimg_ascii::Ramp;
    ///
    /// let ramp = Ramp::custom(" #").unwrap();
    /// assert_eq!(ramp.len(), 2);
    /// assert!(Ramp::custom("@").is_err());
    /// ```
    pub fn custom(glyphs: &str) -> AsciiResult<Self> {
        let chars: Vec<char> = glyphs.chars().collect();
        if chars.len() < 2 {
            return Err(AsciiError::InvalidRamp(format!(
                "ramp needs at least 2 glyphs, got {}",
                chars.len()
            )));
        }
        Ok(Self {
            name: "custom".to_string(),
            glyphs: chars,
            contrast_stretch: false,
        })
    }

    /// Resolves a ramp from either a built-in style name or, failing
    /// that, a literal glyph string.
    pub fn resolve(spec: &str) -> AsciiResult<Self> {
        match spec.parse::<RampStyle>() {
            Ok(style) => Ok(style.ramp()),
            Err(_) => Self::custom(spec),
        }
    }

    /// Returns the ramp's name ("custom" for user-supplied glyphs).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; ramps have at least 2 glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Whether brightness is contrast-stretched before gamma shaping.
    pub fn contrast_stretch(&self) -> bool {
        self.contrast_stretch
    }

    /// Returns the glyph at `index` (clamped to the last glyph).
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }

    /// First (darkest) glyph.
    pub fn darkest(&self) -> char {
        self.glyphs[0]
    }

    /// Last (brightest) glyph.
    pub fn brightest(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        RampStyle::Short.ramp()
    }
}
