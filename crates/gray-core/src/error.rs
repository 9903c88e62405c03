//! Error types for gray-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the packed pixel store:
//! - Pixel access outside the image (checked on every get/set)
//! - Buffer allocation (exhaustion or word-count overflow)
//!
//! # Usage
//!
//! ```rust
//! use gray_core::{Error, PackedImage, PixelStore};
//!
//! let mut img = PackedImage::new("demo", 4, 4, 255).unwrap();
//! let err = img.set_point(4, 0, 7).unwrap_err();
//! assert!(err.is_bounds_error());
//! ```
//!
//! # Used By
//!
//! - [`crate::image::PackedImage`] - Buffer operations
//! - `gray-io` - wrapped in `IoError::Image`
//! - `gray-ops` - wrapped in `OpsError::Image`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while creating or accessing a packed image.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinates are outside image bounds.
    ///
    /// Returned when accessing `(row, col)` where `row >= height` or
    /// `col >= width`. The buffer is never touched in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gray_core::Error;
    ///
    /// let err = Error::OutOfBounds { row: 100, col: 50, width: 80, height: 60 };
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("pixel (row {row}, col {col}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// Row that was requested
        row: usize,
        /// Column that was requested
        col: usize,
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },

    /// Memory allocation failed.
    ///
    /// Returned when the word count overflows `usize` or the allocator
    /// refuses the request. The image is left without a buffer.
    #[error("failed to allocate {requested} bytes: {reason}")]
    AllocationFailed {
        /// Bytes requested
        requested: usize,
        /// Failure reason
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`].
    #[inline]
    pub fn out_of_bounds(row: usize, col: usize, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            row,
            col,
            width,
            height,
        }
    }

    /// Creates an [`Error::AllocationFailed`].
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }

    /// Returns `true` for coordinate errors.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` for allocation errors.
    #[inline]
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }
}
