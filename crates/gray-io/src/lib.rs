//! # gray-io
//!
//! Image I/O for packed grayscale bitmaps.
//!
//! - **PGM** - Plain-text portable graymap (`P2`), read and write
//!
//! # Architecture
//!
//! - [`FormatReader`] - Trait for stream readers
//! - [`FormatWriter`] - Trait for stream writers
//! - [`read`] / [`write`] - Path-level functions with format detection
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gray_io::{read, write};
//!
//! let image = read("input.pgm")?;
//! write("output.pgm", &image)?;
//! ```
//!
//! # Format-Specific Usage
//!
//! ```rust,ignore
//! use gray_io::FormatReader;
//! use gray_io::pgm::PgmReader;
//!
//! let reader = PgmReader::new().strict_max_value(true).debug(true);
//! let image = reader.read_from(std::io::stdin().lock())?;
//! ```
//!
//! # Feature Flags
//!
//! - `pgm` - Plain-text PGM support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
mod traits;

#[cfg(feature = "pgm")]
pub mod pgm;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use traits::{FormatReader, FormatWriter};

use gray_core::{PackedImage, PixelStore};
use std::path::Path;

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes, then by extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported
/// - The file is malformed or truncated
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PackedImage> {
    let path = path.as_ref();
    let format = Format::detect(path)?;

    match format {
        #[cfg(feature = "pgm")]
        Format::Pgm => pgm::read(path),

        Format::PgmBinary => Err(IoError::UnsupportedFormat("binary PGM (P5)".to_string())),

        _ => Err(unsupported(path)),
    }
}

/// Writes an image to a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written, or the
/// extension names no supported format.
pub fn write<P: AsRef<Path>, S: PixelStore + ?Sized>(path: P, image: &S) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);

    match format {
        #[cfg(feature = "pgm")]
        Format::Pgm => pgm::write(path, image),

        _ => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}
