//! Packed word layout.
//!
//! Pixels are stored eight to a 64-bit word. Each row occupies
//! `width / 8 + 1` words; column `col` lives in word `col / 8` of its row,
//! at bit offset `8 * (col % 8)`:
//!
//! ```text
//! word:   [ c7 | c6 | c5 | c4 | c3 | c2 | c1 | c0 ]   bits 63..0
//!          56   48   40   32   24   16    8    0
//! ```
//!
//! The extra word per row is kept even when `width` is a multiple of 8, so
//! the word count is always `height * (width / 8 + 1)`.

use crate::{Error, Result};

/// Number of 8-bit lanes in one packed word.
pub const LANES_PER_WORD: usize = 8;

/// Width of one lane in bits.
pub const LANE_BITS: u32 = 8;

/// Packed storage unit.
pub type Word = u64;

/// Number of words used by one row of `width` pixels.
#[inline]
pub const fn words_per_row(width: usize) -> usize {
    width / LANES_PER_WORD + 1
}

/// Total word count for a `width` x `height` image.
///
/// Returns `0` when either dimension is zero (no buffer is allocated for an
/// empty image). Overflow of the word or byte count is reported as
/// [`Error::AllocationFailed`].
pub fn words_for(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Ok(0);
    }
    let words = height
        .checked_mul(words_per_row(width))
        .ok_or_else(|| Error::allocation_failed(usize::MAX, "word count overflows usize"))?;
    words
        .checked_mul(std::mem::size_of::<Word>())
        .ok_or_else(|| Error::allocation_failed(usize::MAX, "byte count overflows usize"))?;
    Ok(words)
}

/// Location of one pixel inside the packed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    /// Index of the word holding the pixel.
    pub word: usize,
    /// Bit offset of the pixel's lane inside the word.
    pub shift: u32,
}

impl Lane {
    /// Translates `(row, col)` into a lane address, checking bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gray_core::layout::Lane;
    ///
    /// // 10 columns -> 2 words per row
    /// let lane = Lane::locate(1, 9, 10, 3).unwrap();
    /// assert_eq!(lane.word, 3);
    /// assert_eq!(lane.shift, 8);
    ///
    /// assert!(Lane::locate(3, 0, 10, 3).is_err());
    /// ```
    #[inline]
    pub fn locate(row: usize, col: usize, width: usize, height: usize) -> Result<Self> {
        if row >= height || col >= width {
            return Err(Error::out_of_bounds(row, col, width, height));
        }
        Ok(Self {
            word: row * words_per_row(width) + col / LANES_PER_WORD,
            shift: LANE_BITS * (col % LANES_PER_WORD) as u32,
        })
    }

    /// Bit mask selecting this lane.
    #[inline]
    pub const fn mask(&self) -> Word {
        0xFF << self.shift
    }

    /// Extracts this lane's byte from `word`.
    #[inline]
    pub const fn extract(&self, word: Word) -> u8 {
        ((word >> self.shift) & 0xFF) as u8
    }

    /// Returns `word` with this lane cleared and replaced by `value`.
    #[inline]
    pub const fn insert(&self, word: Word, value: u8) -> Word {
        (word & !self.mask()) | (((value as Word) << self.shift) & self.mask())
    }
}
