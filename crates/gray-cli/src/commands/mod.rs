//! CLI command implementations

pub mod copy;
pub mod info;
pub mod line;
pub mod triangle;

use anyhow::{Context, Result};
use gray_core::{PackedImage, PixelStore};
use gray_io::pgm::PgmReader;
use gray_io::FormatReader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<PackedImage> {
    gray_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Load image from path, rejecting samples above the declared maximum.
pub fn load_image_strict(path: &Path) -> Result<PackedImage> {
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let reader = PgmReader::new().strict_max_value(true).debug(true);
    let mut image = reader
        .read_from(BufReader::new(file))
        .with_context(|| format!("Failed to load: {}", path.display()))?;
    if image.name().is_empty() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            image.set_name(stem);
        }
    }
    Ok(image)
}

/// Save image to path
pub fn save_image<S: PixelStore + ?Sized>(path: &Path, image: &S) -> Result<()> {
    gray_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Parses `WIDTHxHEIGHT`.
pub fn parse_size(s: &str) -> std::result::Result<(usize, usize), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w = w.trim().parse().map_err(|_| format!("invalid width '{}'", w))?;
    let h = h.trim().parse().map_err(|_| format!("invalid height '{}'", h))?;
    Ok((w, h))
}

/// Parses `ROW,COL`.
pub fn parse_point(s: &str) -> std::result::Result<(i64, i64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let x = x.trim().parse().map_err(|_| format!("invalid row '{}'", x))?;
    let y = y.trim().parse().map_err(|_| format!("invalid column '{}'", y))?;
    Ok((x, y))
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
