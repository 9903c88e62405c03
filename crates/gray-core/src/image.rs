//! Packed grayscale image buffer.
//!
//! [`PackedImage`] owns a buffer of 64-bit words, each holding eight 8-bit
//! pixels (see [`crate::layout`] for the exact arrangement). Every pixel
//! access goes through [`Lane::locate`], so out-of-range coordinates are
//! reported rather than silently touching a neighbouring row.
//!
//! # Lifecycle
//!
//! ```rust
//! use gray_core::{PackedImage, PixelStore};
//!
//! // Fixed dimensions
//! let mut img = PackedImage::new("Line Plot", 100, 100, 255).unwrap();
//! img.set_point(10, 20, 200).unwrap();
//! assert_eq!(img.get_point(10, 20).unwrap(), 200);
//!
//! // Explicit release consumes the image
//! img.release();
//! ```
//!
//! An empty placeholder (`PackedImage::empty`) has no buffer; a reader fills
//! in dimensions later through [`PackedImage::reshape`].

use crate::layout::{self, Lane, Word};
use crate::{Error, PixelStore, Result};
use tracing::{debug, trace};

/// Owned 8-bit grayscale image stored as packed 64-bit words.
///
/// # Example
///
/// ```rust
/// use gray_core::{PackedImage, PixelStore};
///
/// let mut img = PackedImage::new("ramp", 8, 2, 255).unwrap();
/// for col in 0..8 {
///     img.set_point(0, col, (col * 10) as u8).unwrap();
/// }
/// assert_eq!(img.row(0).unwrap(), vec![0, 10, 20, 30, 40, 50, 60, 70]);
/// assert_eq!(img.word_count(), 4);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PackedImage {
    /// Image name (PGM comment line)
    name: String,
    /// Width in pixels
    width: usize,
    /// Height in pixels
    height: usize,
    /// Declared maximum sample value
    max_value: u32,
    /// Packed pixel words, `height * (width / 8 + 1)` of them
    words: Vec<Word>,
}

impl PackedImage {
    /// Creates a zero-filled image.
    ///
    /// No buffer is allocated when `width * height == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the word count overflows or
    /// the allocator refuses the request.
    pub fn new(
        name: impl Into<String>,
        width: usize,
        height: usize,
        max_value: u32,
    ) -> Result<Self> {
        let words = alloc_words(width, height)?;
        Ok(Self {
            name: name.into(),
            width,
            height,
            max_value,
            words,
        })
    }

    /// Creates a 0x0 placeholder, typically to be filled by a reader.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: 0,
            height: 0,
            max_value: 255,
            words: Vec::new(),
        }
    }

    /// Releases the image and its buffer.
    ///
    /// Takes `self` by value, so a released image cannot be used or
    /// released again.
    pub fn release(self) {
        trace!(name = %self.name, words = self.words.len(), "release");
        drop(self);
    }

    /// Replaces dimensions and buffer with a fresh zero-filled allocation.
    ///
    /// On error the image is left unchanged.
    pub fn reshape(&mut self, width: usize, height: usize, max_value: u32) -> Result<()> {
        let words = alloc_words(width, height)?;
        self.width = width;
        self.height = height;
        self.max_value = max_value;
        self.words = words;
        Ok(())
    }

    /// Drops the buffer and zeroes `width`, `height` and `max_value`.
    ///
    /// The name is kept.
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.max_value = 0;
        self.words = Vec::new();
    }

    /// Renames the image.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the declared maximum sample value.
    pub fn set_max_value(&mut self, max_value: u32) {
        self.max_value = max_value;
    }

    /// Writes the low 8 bits of `value` at `(row, col)`.
    ///
    /// This is the truncation the packed layout imposes on samples wider
    /// than a byte.
    #[inline]
    pub fn set_point_masked(&mut self, row: usize, col: usize, value: u32) -> Result<()> {
        self.set_point(row, col, (value & 0xFF) as u8)
    }

    /// Sets every pixel to `value`.
    pub fn fill(&mut self, value: u8) {
        for row in 0..self.height {
            for col in 0..self.width {
                let lane = self.lane(row, col);
                self.words[lane.word] = lane.insert(self.words[lane.word], value);
            }
        }
    }

    /// Returns an unpacked copy of one row.
    pub fn row(&self, row: usize) -> Result<Vec<u8>> {
        if row >= self.height {
            return Err(Error::out_of_bounds(row, 0, self.width, self.height));
        }
        Ok((0..self.width)
            .map(|col| {
                let lane = self.lane(row, col);
                lane.extract(self.words[lane.word])
            })
            .collect())
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns the number of packed words in the buffer.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the packed words.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Lane address for coordinates already known to be in bounds.
    #[inline]
    fn lane(&self, row: usize, col: usize) -> Lane {
        Lane {
            word: row * layout::words_per_row(self.width) + col / layout::LANES_PER_WORD,
            shift: layout::LANE_BITS * (col % layout::LANES_PER_WORD) as u32,
        }
    }
}

impl PixelStore for PackedImage {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn max_value(&self) -> u32 {
        self.max_value
    }

    #[inline]
    fn get_point(&self, row: usize, col: usize) -> Result<u8> {
        let lane = Lane::locate(row, col, self.width, self.height)?;
        Ok(lane.extract(self.words[lane.word]))
    }

    #[inline]
    fn set_point(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        let lane = Lane::locate(row, col, self.width, self.height)?;
        self.words[lane.word] = lane.insert(self.words[lane.word], value);
        Ok(())
    }
}

impl std::fmt::Debug for PackedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackedImage")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("max_value", &self.max_value)
            .field("words", &self.words.len())
            .finish()
    }
}

fn alloc_words(width: usize, height: usize) -> Result<Vec<Word>> {
    let count = layout::words_for(width, height)?;
    let mut words = Vec::new();
    words.try_reserve_exact(count).map_err(|e| {
        let bytes = count.saturating_mul(std::mem::size_of::<Word>());
        Error::allocation_failed(bytes, e.to_string())
    })?;
    words.resize(count, 0);
    if count > 0 {
        debug!(width, height, words = count, "allocated packed buffer");
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_new() {
        let img = PackedImage::new("test", 100, 100, 255).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 100);
        assert_eq!(img.max_value(), 255);
        assert_eq!(img.name(), "test");
        assert_eq!(img.pixel_count(), 10000);
        assert_eq!(img.word_count(), 100 * 13);
    }

    #[test]
    fn test_image_zero_area_has_no_buffer() {
        let img = PackedImage::new("flat", 0, 10, 255).unwrap();
        assert!(img.is_empty());
        assert_eq!(img.word_count(), 0);

        let img = PackedImage::empty("placeholder");
        assert_eq!(img.dimensions(), (0, 0));
        assert_eq!(img.word_count(), 0);
    }

    #[test]
    fn test_image_allocation_overflow() {
        let err = PackedImage::new("huge", usize::MAX, usize::MAX, 255).unwrap_err();
        assert!(err.is_allocation_error());
    }

    #[test]
    fn test_image_starts_zeroed() {
        let img = PackedImage::new("z", 9, 3, 255).unwrap();
        for row in 0..3 {
            assert_eq!(img.row(row).unwrap(), vec![0; 9]);
        }
    }

    #[test]
    fn test_image_set_get_point() {
        let mut img = PackedImage::new("t", 10, 10, 255).unwrap();
        img.set_point(5, 5, 200).unwrap();
        assert_eq!(img.get_point(5, 5).unwrap(), 200);
        assert_eq!(img.get_point(0, 0).unwrap(), 0);

        img.set_point(5, 5, 7).unwrap();
        assert_eq!(img.get_point(5, 5).unwrap(), 7);
    }

    #[test]
    fn test_image_lanes_are_independent() {
        let mut img = PackedImage::new("lanes", 8, 1, 255).unwrap();
        let values = [0xFF, 0x00, 0x81, 0x7F, 0x01, 0xFE, 0x55, 0xAA];
        for (col, &v) in values.iter().enumerate() {
            img.set_point(0, col, v).unwrap();
        }
        for (col, &v) in values.iter().enumerate() {
            assert_eq!(img.get_point(0, col).unwrap(), v, "lane {}", col);
        }

        // Overwrite one lane, neighbours keep their values
        img.set_point(0, 3, 0x00).unwrap();
        assert_eq!(img.get_point(0, 2).unwrap(), 0x81);
        assert_eq!(img.get_point(0, 3).unwrap(), 0x00);
        assert_eq!(img.get_point(0, 4).unwrap(), 0x01);
    }

    #[test]
    fn test_image_set_point_masked() {
        let mut img = PackedImage::new("m", 2, 1, 65535).unwrap();
        img.set_point_masked(0, 0, 0x1234).unwrap();
        img.set_point_masked(0, 1, 256).unwrap();
        assert_eq!(img.get_point(0, 0).unwrap(), 0x34);
        assert_eq!(img.get_point(0, 1).unwrap(), 0);
    }

    #[test]
    fn test_image_out_of_bounds() {
        let mut img = PackedImage::new("oob", 10, 4, 255).unwrap();
        img.fill(9);
        let before = img.clone();

        let err = img.set_point(4, 0, 1).unwrap_err();
        assert_eq!(err, Error::out_of_bounds(4, 0, 10, 4));
        // Column 10 would alias the padding lane of row 0 in the raw layout
        assert!(img.set_point(0, 10, 1).is_err());
        assert!(img.get_point(0, 10).is_err());
        assert!(img.row(4).is_err());
        assert_eq!(img, before);
    }

    #[test]
    fn test_image_fill() {
        let mut img = PackedImage::new("f", 17, 3, 255).unwrap();
        img.fill(128);
        for row in 0..3 {
            assert!(img.row(row).unwrap().iter().all(|&v| v == 128));
        }
    }

    #[test]
    fn test_image_reshape_and_clear() {
        let mut img = PackedImage::empty("r");
        img.reshape(16, 2, 15).unwrap();
        assert_eq!(img.dimensions(), (16, 2));
        assert_eq!(img.max_value(), 15);
        assert_eq!(img.word_count(), 6);

        img.set_point(1, 15, 3).unwrap();
        img.clear();
        assert_eq!(img.dimensions(), (0, 0));
        assert_eq!(img.max_value(), 0);
        assert_eq!(img.word_count(), 0);
        assert_eq!(img.name(), "r");
        assert!(img.get_point(0, 0).is_err());
    }

    #[test]
    fn test_image_reshape_failure_keeps_image() {
        let mut img = PackedImage::new("keep", 4, 4, 255).unwrap();
        assert!(img.reshape(usize::MAX, 3, 255).is_err());
        assert_eq!(img.dimensions(), (4, 4));
    }

    #[test]
    fn test_image_set_max_value() {
        let mut img = PackedImage::new("mv", 2, 2, 255).unwrap();
        img.set_point(1, 1, 200).unwrap();
        img.set_max_value(65535);
        assert_eq!(img.max_value(), 65535);
        // Metadata only: pixels and buffer are untouched
        assert_eq!(img.get_point(1, 1).unwrap(), 200);
        assert_eq!(img.word_count(), 2);
    }

    #[test]
    fn test_image_words_layout() {
        // 10 columns -> 2 words per row
        let mut img = PackedImage::new("w", 10, 2, 255).unwrap();
        img.set_point(0, 0, 0x12).unwrap();
        img.set_point(0, 7, 0xFF).unwrap();
        img.set_point(1, 9, 0xAB).unwrap();

        let words = img.words();
        assert_eq!(words.len(), 4);
        assert_eq!(words[0], 0xFF00_0000_0000_0012);
        assert_eq!(words[1], 0);
        assert_eq!(words[2], 0);
        assert_eq!(words[3], 0xAB00);
    }

    #[test]
    fn test_image_fill_keeps_padding_word() {
        // Width 8 still gets a second, unused word per row
        let mut img = PackedImage::new("pad", 8, 2, 255).unwrap();
        img.fill(0xFF);
        assert_eq!(img.words(), &[u64::MAX, 0, u64::MAX, 0]);
    }

    #[test]
    fn test_image_debug_omits_words() {
        let img = PackedImage::new("dbg", 8, 8, 255).unwrap();
        let s = format!("{:?}", img);
        assert!(s.contains("dbg"));
        assert!(s.contains("words: 16"));
    }
}
