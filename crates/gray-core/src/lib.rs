//! # gray-core
//!
//! Core types for 8-bit grayscale bitmaps.
//!
//! - [`PackedImage`] - Owned image buffer, eight pixels per 64-bit word
//! - [`PixelStore`] - Bounds-checked `(row, col)` access trait
//! - [`layout`] - Word/lane addressing arithmetic
//! - [`Error`] - Bounds and allocation errors
//!
//! ## Crate Structure
//!
//! ```text
//! gray-core (this crate)
//!    ^
//!    |
//!    +-- gray-io  (PGM P2 reader/writer)
//!    +-- gray-ops (line / triangle rasterizer)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod layout;
pub mod store;

// Re-exports for convenience
pub use error::{Error, Result};
pub use image::PackedImage;
pub use layout::{Lane, Word};
pub use store::PixelStore;

/// Prelude module for convenient imports.
///
/// ```
/// use gray_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::PackedImage;
    pub use crate::store::PixelStore;
}
