//! I/O traits for image readers and writers.
//!
//! These traits define the interface for format-specific implementations.
//! Both work on streams; the path-level helpers in the crate root open and
//! buffer files on top of them.

use crate::IoResult;
use gray_core::{PackedImage, PixelStore};
use std::io::{BufRead, Write};

/// Trait for image format readers.
///
/// `O` is the reader's option struct.
///
/// # Example
///
/// ```rust,ignore
/// use gray_io::FormatReader;
/// use gray_io::pgm::{PgmReader, PgmReaderOptions};
///
/// let reader = PgmReader::with_options(PgmReaderOptions {
///     strict_max_value: true,
///     ..Default::default()
/// });
/// let image = reader.read_from(std::io::stdin().lock())?;
/// ```
pub trait FormatReader<O> {
    /// Format name.
    fn format_name(&self) -> &'static str;

    /// Checks whether `header` starts like a file this reader accepts.
    fn can_read(&self, header: &[u8]) -> bool;

    /// Reads a new image from `reader`.
    fn read_from<R: BufRead>(&self, reader: R) -> IoResult<PackedImage>;

    /// Re-populates `image` from `reader`.
    ///
    /// On error the image is left empty (0x0, no buffer).
    fn read_into<R: BufRead>(&self, image: &mut PackedImage, reader: R) -> IoResult<()>;

    /// Creates a reader with custom options.
    fn with_options(options: O) -> Self;
}

/// Trait for image format writers.
pub trait FormatWriter<O> {
    /// Format name.
    fn format_name(&self) -> &'static str;

    /// Writes `image` to `writer`.
    fn write_to<S: PixelStore + ?Sized, W: Write>(&self, image: &S, writer: W) -> IoResult<()>;

    /// Writes `image` to a byte vector.
    fn write_to_memory<S: PixelStore + ?Sized>(&self, image: &S) -> IoResult<Vec<u8>> {
        let mut out = Vec::new();
        self.write_to(image, &mut out)?;
        Ok(out)
    }

    /// Creates a writer with custom options.
    fn with_options(options: O) -> Self;
}
