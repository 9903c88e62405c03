//! # gray-ops
//!
//! Rasterization primitives for packed grayscale images.
//!
//! Everything draws through [`gray_core::PixelStore`], so any store
//! implementation can be a target.
//!
//! # Modules
//!
//! - [`draw`] - Lines, triangle outlines, neighbor painting
//!
//! # Example
//!
//! ```rust
//! use gray_core::{PackedImage, PixelStore};
//! use gray_ops::draw;
//!
//! let mut img = PackedImage::new("plot", 100, 100, 255).unwrap();
//! img.fill(255);
//! draw::triangle_shape(&mut img, 33, 33, 88, 88, 0, 60, 0).unwrap();
//! assert_eq!(img.get_point(88, 88).unwrap(), 0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod draw;

pub use draw::{check_point, fill_neighbors, line, line_points, triangle_shape, LineIter};
pub use error::{OpsError, OpsResult};
