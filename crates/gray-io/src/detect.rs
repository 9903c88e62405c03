//! Format detection utilities.
//!
//! Detects image formats from file extensions and magic bytes.

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes read from a file for magic detection; room for a leading comment.
const MAGIC_HEADER_LEN: usize = 512;

/// Image formats known to the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain-text PGM (`P2`).
    Pgm,
    /// Binary PGM (`P5`). Recognized, not supported.
    PgmBinary,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file path (magic bytes, then extension).
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();

        if let Ok(format) = Self::from_magic_bytes(path) {
            if format != Format::Unknown {
                return Ok(format);
            }
        }

        Ok(Self::from_extension(path))
    }

    /// Detects format from file extension only.
    ///
    /// `.pgm` is assumed to be the text variant.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("pgm") | Some("pnm") => Format::Pgm,
            _ => Format::Unknown,
        }
    }

    /// Detects format from file magic bytes.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let mut file = File::open(path)?;
        let mut header = [0u8; MAGIC_HEADER_LEN];
        let bytes_read = file.read(&mut header)?;
        Ok(Self::from_bytes(&header[..bytes_read]))
    }

    /// Detects format from raw bytes (magic number check).
    ///
    /// Leading whitespace and `#` comment lines are skipped; the magic
    /// must be followed by whitespace or end of data.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bytes = bytes;
        loop {
            let start = bytes
                .iter()
                .position(|b| !b.is_ascii_whitespace())
                .unwrap_or(bytes.len());
            bytes = &bytes[start..];
            if bytes.first() != Some(&b'#') {
                break;
            }
            // A comment with no line end leaves nothing to inspect
            match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => bytes = &bytes[end + 1..],
                None => return Format::Unknown,
            }
        }
        if bytes.len() < 2 || bytes[0] != b'P' {
            return Format::Unknown;
        }
        if bytes.len() > 2 && !bytes[2].is_ascii_whitespace() {
            return Format::Unknown;
        }
        match bytes[1] {
            b'2' => Format::Pgm,
            b'5' => Format::PgmBinary,
            _ => Format::Unknown,
        }
    }

    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Pgm | Format::PgmBinary => "pgm",
            Format::Unknown => "",
        }
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Pgm | Format::PgmBinary => "image/x-portable-graymap",
            Format::Unknown => "application/octet-stream",
        }
    }
}
