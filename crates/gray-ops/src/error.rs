//! Error types for drawing operations.

use thiserror::Error;

/// Error type for drawing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// A point of the primitive lies outside the image.
    ///
    /// Coordinates are signed: `x` is the row, `y` the column.
    #[error("point ({x}, {y}) outside {width}x{height} image")]
    OutOfBounds {
        /// Row coordinate
        x: i64,
        /// Column coordinate
        y: i64,
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },

    /// Pixel store error.
    #[error(transparent)]
    Image(#[from] gray_core::Error),
}

impl OpsError {
    /// Returns `true` if this is a bounds error.
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
            || matches!(self, Self::Image(e) if e.is_bounds_error())
    }
}

/// Result type for drawing operations.
pub type OpsResult<T> = Result<T, OpsError>;
