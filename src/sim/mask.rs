//! Opaque-pixel collision masks
//!
//! A mask is the set of pixels of a sprite whose alpha clears a threshold.
//! Overlap is tested pixel by pixel inside the intersection of the two
//! footprints, so transparent margins never register a hit.

use core::fmt;

use glam::IVec2;

/// Alpha values strictly above this count as opaque
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 127;

const WORD_BITS: u32 = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskError {
    /// Width or height is zero
    Empty { width: u32, height: u32 },
    /// Alpha buffer does not hold exactly `width * height` samples
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { width, height } => {
                write!(f, "mask must have a non-zero size, got {width}x{height}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "alpha buffer holds {actual} samples, expected {expected}")
            }
        }
    }
}

impl std::error::Error for MaskError {}

/// Bit-packed opaque-pixel footprint, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    words_per_row: u32,
    bits: Vec<u64>,
}

impl CollisionMask {
    /// Empty (fully transparent) mask
    pub fn new(width: u32, height: u32) -> Self {
        let words_per_row = width.div_ceil(WORD_BITS);
        Self {
            width,
            height,
            words_per_row,
            bits: vec![0; (words_per_row * height) as usize],
        }
    }

    /// Fully opaque mask
    pub fn filled(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    /// Build a mask by evaluating `opaque(x, y)` for every pixel
    pub fn from_fn(width: u32, height: u32, opaque: impl Fn(u32, u32) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if opaque(x, y) {
                    mask.set(x, y);
                }
            }
        }
        mask
    }

    /// Build a mask from a row-major alpha channel
    pub fn from_alpha(
        width: u32,
        height: u32,
        alpha: &[u8],
        threshold: u8,
    ) -> Result<Self, MaskError> {
        if width == 0 || height == 0 {
            return Err(MaskError::Empty { width, height });
        }
        let expected = width as usize * height as usize;
        if alpha.len() != expected {
            return Err(MaskError::SizeMismatch {
                expected,
                actual: alpha.len(),
            });
        }
        Ok(Self::from_fn(width, height, |x, y| {
            alpha[(y * width + x) as usize] > threshold
        }))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> (usize, u32) {
        let word = y * self.words_per_row + x / WORD_BITS;
        (word as usize, x % WORD_BITS)
    }

    pub fn set(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            let (word, bit) = self.index(x, y);
            self.bits[word] |= 1 << bit;
        }
    }

    /// Whether pixel (x, y) is opaque. Out-of-range pixels are transparent.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        let (word, bit) = self.index(x as u32, y as u32);
        self.bits[word] & (1 << bit) != 0
    }

    /// Number of opaque pixels
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// Whether `other`, placed at `offset` relative to this mask's origin,
    /// shares at least one opaque pixel with this mask.
    pub fn overlaps(&self, other: &CollisionMask, offset: IVec2) -> bool {
        let x0 = offset.x.max(0);
        let y0 = offset.y.max(0);
        let x1 = (offset.x + other.width as i32).min(self.width as i32);
        let y1 = (offset.y + other.height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    return true;
                }
            }
        }
        false
    }
}
