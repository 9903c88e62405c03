//! Plain-text PGM (`P2`) format support.
//!
//! # Layout
//!
//! ```text
//! P2 <width> <height> <maxValue>
//! # <name>
//! <v00> <v01> ... <v0,width-1>
//! ...
//! ```
//!
//! The writer emits exactly this layout, one image row per text line. The
//! reader accepts any whitespace-separated arrangement: header fields and
//! samples may be split across lines, and blank or `#` comment lines may
//! appear anywhere.
//!
//! # Sample range
//!
//! Samples are stored as bytes. A sample above 255 keeps only its low 8
//! bits, whatever `maxValue` declares; set
//! [`PgmReaderOptions::strict_max_value`] to reject samples above the
//! declared maximum instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use gray_io::pgm;
//!
//! let image = pgm::read("input.pgm")?;
//! pgm::write("copy.pgm", &image)?;
//! ```

use crate::traits::{FormatReader, FormatWriter};
use crate::{IoError, IoResult};
use gray_core::{PackedImage, PixelStore};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, trace, warn};

const PGM_MAGIC: &[u8] = b"P2";
const PGM_BINARY_MAGIC: &[u8] = b"P5";

/// Initial capacity of the reader's line buffer.
const LINE_CAPACITY: usize = 15;

/// Header fields: magic, width, height, max value.
const HEADER_FIELDS: usize = 4;

/// Reads a PGM file from the given path.
///
/// The image name is taken from the first comment line, or the file stem
/// when the file has no comment.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PackedImage> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut image = PgmReader::new().read_from(BufReader::new(file))?;
    if image.name().is_empty() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            image.set_name(stem);
        }
    }
    Ok(image)
}

/// Writes an image to a PGM file.
pub fn write<P: AsRef<Path>, S: PixelStore + ?Sized>(path: P, image: &S) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    PgmWriter::new().write_to(image, BufWriter::new(file))
}

/// Reads a PGM image from a buffered stream with default options.
pub fn read_from<R: BufRead>(reader: R) -> IoResult<PackedImage> {
    PgmReader::new().read_from(reader)
}

/// Re-populates `image` from a buffered stream with default options.
///
/// On error `image` is left empty.
pub fn read_into<R: BufRead>(image: &mut PackedImage, reader: R) -> IoResult<()> {
    PgmReader::new().read_into(image, reader)
}

/// Writes an image to a stream with default options.
pub fn write_to<S: PixelStore + ?Sized, W: Write>(image: &S, writer: W) -> IoResult<()> {
    PgmWriter::new().write_to(image, writer)
}

/// Reads a PGM image from a byte slice.
pub fn read_from_memory(data: &[u8]) -> IoResult<PackedImage> {
    PgmReader::new().read_from(data)
}

/// Writes an image to a byte vector.
pub fn write_to_memory<S: PixelStore + ?Sized>(image: &S) -> IoResult<Vec<u8>> {
    PgmWriter::new().write_to_memory(image)
}

// ============================================================================
// Options
// ============================================================================

/// Options for reading PGM files.
///
/// # Example
///
/// ```rust,ignore
/// use gray_io::pgm::{PgmReader, PgmReaderOptions};
/// use gray_io::FormatReader;
///
/// let reader = PgmReader::with_options(PgmReaderOptions {
///     debug: true,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone, Default)]
pub struct PgmReaderOptions {
    /// Report header-parsing failures through `tracing::warn!`.
    /// Advisory only; errors are returned either way.
    pub debug: bool,
    /// Reject samples greater than the declared `maxValue`.
    /// Default: false (samples are truncated to 8 bits).
    pub strict_max_value: bool,
}

/// Options for writing PGM files.
#[derive(Debug, Clone)]
pub struct PgmWriterOptions {
    /// Emit the `# <name>` comment line after the header. Default: true.
    pub comment: bool,
}

impl Default for PgmWriterOptions {
    fn default() -> Self {
        Self { comment: true }
    }
}

// ============================================================================
// Tokenizer
// ============================================================================

#[inline]
fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

#[inline]
fn is_line_end(b: u8) -> bool {
    b == b'\r' || b == b'\n' || b == b'\0'
}

/// Whitespace-delimited tokens over a line-oriented stream.
///
/// One line buffer is reused for the whole stream; a token is a range into
/// it and is only valid until the next call to [`Tokens::next`].
struct Tokens<R> {
    reader: R,
    line: Vec<u8>,
    pos: usize,
    line_no: usize,
    comment: Option<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(LINE_CAPACITY),
            pos: 0,
            line_no: 0,
            comment: None,
        }
    }

    /// Returns the next token, reading further lines as needed.
    ///
    /// `None` means the stream ended.
    fn next(&mut self) -> IoResult<Option<Range<usize>>> {
        loop {
            if let Some(span) = self.scan() {
                return Ok(Some(span));
            }
            if !self.fetch_line()? {
                return Ok(None);
            }
        }
    }

    /// Scans the rest of the current line for a token.
    fn scan(&mut self) -> Option<Range<usize>> {
        let len = self.line.len();
        let mut pos = self.pos;
        while pos < len && is_blank(self.line[pos]) {
            pos += 1;
        }
        if pos >= len || is_line_end(self.line[pos]) {
            self.pos = len;
            return None;
        }
        if self.line[pos] == b'#' {
            self.remember_comment(pos + 1);
            self.pos = len;
            return None;
        }
        let start = pos;
        while pos < len && !is_blank(self.line[pos]) && !is_line_end(self.line[pos]) {
            pos += 1;
        }
        self.pos = pos;
        Some(start..pos)
    }

    fn fetch_line(&mut self) -> IoResult<bool> {
        self.line.clear();
        self.pos = 0;
        let n = self.reader.read_until(b'\n', &mut self.line)?;
        if n == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        trace!(line = self.line_no, len = n, "read line");
        Ok(true)
    }

    fn remember_comment(&mut self, from: usize) {
        if self.comment.is_some() {
            return;
        }
        let rest = &self.line[from..];
        let end = rest.iter().position(|&b| is_line_end(b)).unwrap_or(rest.len());
        let text = String::from_utf8_lossy(&rest[..end]).trim().to_string();
        self.comment = Some(text);
    }

    fn text(&self, span: &Range<usize>) -> &[u8] {
        &self.line[span.clone()]
    }

    /// Parses an unsigned decimal token.
    ///
    /// Only ASCII digits are accepted (no sign, no hex).
    fn parse<T: FromStr>(&self, span: &Range<usize>, expected: &'static str) -> IoResult<T> {
        let bytes = self.text(span);
        std::str::from_utf8(bytes)
            .ok()
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<T>().ok())
            .ok_or_else(|| self.parse_error(span, expected))
    }

    fn parse_error(&self, span: &Range<usize>, expected: &'static str) -> IoError {
        IoError::Parse {
            line: self.line_no,
            token: String::from_utf8_lossy(self.text(span)).into_owned(),
            expected,
        }
    }
}

// ============================================================================
// PgmReader
// ============================================================================

/// Parser state. Header fields are consumed in order, then samples
/// row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Magic,
    Width,
    Height { width: usize },
    MaxValue { width: usize, height: usize },
    Pixels { row: usize, col: usize },
    Done,
}

impl State {
    /// Values consumed so far and values required, for truncation errors.
    fn progress(&self, width: usize, height: usize) -> (usize, usize) {
        match *self {
            State::Magic => (0, HEADER_FIELDS),
            State::Width => (1, HEADER_FIELDS),
            State::Height { .. } => (2, HEADER_FIELDS),
            State::MaxValue { .. } => (3, HEADER_FIELDS),
            State::Pixels { row, col } => (row * width + col, width * height),
            State::Done => (width * height, width * height),
        }
    }
}

/// PGM (`P2`) reader.
///
/// A streaming parser: bytes are pulled one line at a time and nothing past
/// the last sample of the grid is consumed.
///
/// # Example
///
/// ```rust
/// use gray_core::PixelStore;
/// use gray_io::FormatReader;
/// use gray_io::pgm::PgmReader;
///
/// let data = b"P2 3 2 255\n# tiny\n0 1 2\n3 4 5\n";
/// let image = PgmReader::new().read_from(&data[..]).unwrap();
/// assert_eq!(image.name(), "tiny");
/// assert_eq!(image.get_point(1, 2).unwrap(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PgmReader {
    options: PgmReaderOptions,
}

impl PgmReader {
    /// Creates a new reader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables diagnostic logging of header failures.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.options.debug = enabled;
        self
    }

    /// Enables or disables rejection of samples above `maxValue`.
    pub fn strict_max_value(mut self, enabled: bool) -> Self {
        self.options.strict_max_value = enabled;
        self
    }

    /// Returns the reader options.
    pub fn options(&self) -> &PgmReaderOptions {
        &self.options
    }

    fn decode<R: BufRead>(&self, image: &mut PackedImage, tokens: &mut Tokens<R>) -> IoResult<()> {
        let mut state = State::Magic;

        loop {
            if state == State::Done {
                break;
            }
            let Some(span) = tokens.next()? else {
                let (got, expected) = state.progress(image.width(), image.height());
                if state == State::Magic {
                    let msg = "empty input, no P2 magic number".to_string();
                    return Err(self.header_error(msg, tokens));
                }
                return Err(IoError::Truncated { expected, got });
            };

            state = match state {
                State::Magic => {
                    let magic = tokens.text(&span);
                    if magic == PGM_MAGIC {
                        State::Width
                    } else if magic == PGM_BINARY_MAGIC {
                        let msg = "binary PGM (P5) is not supported".to_string();
                        return Err(self.header_error(msg, tokens));
                    } else {
                        let magic = String::from_utf8_lossy(magic);
                        let msg = format!("{:?} is not a P2 magic number", magic);
                        return Err(self.header_error(msg, tokens));
                    }
                }
                State::Width => {
                    let width: usize = self.header_field(tokens, &span, "image width")?;
                    if width == 0 {
                        return Err(self.header_error("width is 0".into(), tokens));
                    }
                    State::Height { width }
                }
                State::Height { width } => {
                    let height: usize = self.header_field(tokens, &span, "image height")?;
                    if height == 0 {
                        return Err(self.header_error("height is 0".into(), tokens));
                    }
                    State::MaxValue { width, height }
                }
                State::MaxValue { width, height } => {
                    let max_value: u32 = self.header_field(tokens, &span, "maximum gray value")?;
                    image.reshape(width, height, max_value)?;
                    debug!(width, height, max_value, line = tokens.line_no, "PGM header");
                    State::Pixels { row: 0, col: 0 }
                }
                State::Pixels { row, col } => {
                    let value: u32 = tokens.parse(&span, "gray value")?;
                    if self.options.strict_max_value && value > image.max_value() {
                        return Err(tokens.parse_error(&span, "gray value not above maxValue"));
                    }
                    image.set_point_masked(row, col, value)?;

                    let (row, col) = if col + 1 == image.width() {
                        (row + 1, 0)
                    } else {
                        (row, col + 1)
                    };
                    if row == image.height() {
                        State::Done
                    } else {
                        State::Pixels { row, col }
                    }
                }
                State::Done => State::Done,
            };
        }

        Ok(())
    }

    fn header_error<R>(&self, msg: String, tokens: &Tokens<R>) -> IoError {
        self.report_header(tokens.line_no, &msg);
        IoError::Format(msg)
    }

    /// Parses a numeric header field, reporting failures like other header errors.
    fn header_field<T: FromStr, R: BufRead>(
        &self,
        tokens: &Tokens<R>,
        span: &Range<usize>,
        expected: &'static str,
    ) -> IoResult<T> {
        tokens.parse(span, expected).inspect_err(|e| self.report_header(tokens.line_no, e))
    }

    fn report_header(&self, line: usize, msg: &dyn std::fmt::Display) {
        if self.options.debug {
            warn!(line, "err: {}", msg);
        } else {
            debug!(line, "PGM header rejected: {}", msg);
        }
    }
}

impl FormatReader<PgmReaderOptions> for PgmReader {
    /// Returns "PGM".
    fn format_name(&self) -> &'static str {
        "PGM"
    }

    /// Checks for the `P2` magic number.
    fn can_read(&self, header: &[u8]) -> bool {
        crate::Format::from_bytes(header) == crate::Format::Pgm
    }

    fn read_from<R: BufRead>(&self, reader: R) -> IoResult<PackedImage> {
        let mut image = PackedImage::empty("");
        self.read_into(&mut image, reader)?;
        Ok(image)
    }

    fn read_into<R: BufRead>(&self, image: &mut PackedImage, reader: R) -> IoResult<()> {
        image.clear();
        let mut tokens = Tokens::new(reader);

        if let Err(e) = self.decode(image, &mut tokens) {
            image.clear();
            return Err(e);
        }

        if image.name().is_empty() {
            if let Some(comment) = tokens.comment.take() {
                image.set_name(comment);
            }
        }
        trace!(lines = tokens.line_no, "PGM read complete");
        Ok(())
    }

    fn with_options(options: PgmReaderOptions) -> Self {
        Self { options }
    }
}

// ============================================================================
// PgmWriter
// ============================================================================

/// PGM (`P2`) writer.
///
/// # Example
///
/// ```rust
/// use gray_core::{PackedImage, PixelStore};
/// use gray_io::FormatWriter;
/// use gray_io::pgm::PgmWriter;
///
/// let mut image = PackedImage::new("dot", 2, 1, 255).unwrap();
/// image.set_point(0, 1, 255).unwrap();
/// let bytes = PgmWriter::new().write_to_memory(&image).unwrap();
/// assert_eq!(bytes, b"P2 2 1 255\n# dot\n0 255\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PgmWriter {
    options: PgmWriterOptions,
}

impl PgmWriter {
    /// Creates a new writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the name comment line.
    pub fn comment(mut self, enabled: bool) -> Self {
        self.options.comment = enabled;
        self
    }
}

impl FormatWriter<PgmWriterOptions> for PgmWriter {
    /// Returns "PGM".
    fn format_name(&self) -> &'static str {
        "PGM"
    }

    fn write_to<S: PixelStore + ?Sized, W: Write>(&self, image: &S, mut writer: W) -> IoResult<()> {
        let (width, height) = image.dimensions();
        writeln!(writer, "P2 {} {} {}", width, height, image.max_value())?;

        if self.options.comment {
            let name = image.name().replace(['\r', '\n'], " ");
            if name.is_empty() {
                writeln!(writer, "#")?;
            } else {
                writeln!(writer, "# {}", name)?;
            }
        }

        let mut line = Vec::with_capacity(width * 4);
        for row in 0..height {
            line.clear();
            for col in 0..width {
                if col > 0 {
                    line.push(b' ');
                }
                push_sample(&mut line, image.get_point(row, col)?);
            }
            line.push(b'\n');
            writer.write_all(&line)?;
        }

        writer.flush()?;
        debug!(width, height, "PGM written");
        Ok(())
    }

    fn with_options(options: PgmWriterOptions) -> Self {
        Self { options }
    }
}

/// Appends `value` in decimal.
fn push_sample(line: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        line.push(b'0' + value / 100);
    }
    if value >= 10 {
        line.push(b'0' + value / 10 % 10);
    }
    line.push(b'0' + value % 10);
}
