//! The pixel store interface.
//!
//! Codecs and rasterizers are written against [`PixelStore`] rather than a
//! concrete buffer. [`PackedImage`](crate::PackedImage) is the only
//! implementation in this workspace.

use crate::Result;

/// Random access to an 8-bit grayscale raster addressed by `(row, col)`.
///
/// All accessors are bounds-checked and return
/// [`Error::OutOfBounds`](crate::Error::OutOfBounds) instead of touching
/// memory outside the image.
pub trait PixelStore {
    /// Image name, written as the comment line of a PGM file.
    fn name(&self) -> &str;

    /// Width in pixels (number of columns).
    fn width(&self) -> usize;

    /// Height in pixels (number of rows).
    fn height(&self) -> usize;

    /// Declared maximum sample value.
    ///
    /// Advisory only: samples are stored as bytes whatever this says.
    fn max_value(&self) -> u32;

    /// Reads the pixel at `(row, col)`.
    fn get_point(&self, row: usize, col: usize) -> Result<u8>;

    /// Writes the pixel at `(row, col)`.
    fn set_point(&mut self, row: usize, col: usize, value: u8) -> Result<()>;

    /// Returns `(width, height)`.
    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Returns `true` if `(row, col)` addresses a pixel of this image.
    #[inline]
    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width()
    }
}
