//! Triangle command: the demo plot.
//!
//! Paints an outline triangle on a white canvas and, with `--fill`,
//! closes it by scanning each column.

use crate::TriangleArgs;
use anyhow::{bail, Context, Result};
use gray_core::{PackedImage, PixelStore};
use gray_ops::draw;
use tracing::debug;

/// Vertices on a 100x100 canvas, as (row, col).
const VERTICES: [(i64, i64); 3] = [(33, 33), (88, 88), (0, 60)];

const INK: u8 = 0;
const PAPER: u8 = 255;

pub fn run(args: TriangleArgs, verbose: bool) -> Result<()> {
    let size = args.size;
    if size == 0 {
        bail!("canvas size must be positive");
    }

    let mut image = PackedImage::new("Line Plot", size, size, 255)?;
    image.fill(PAPER);

    let [a, b, c] = VERTICES.map(|(x, y)| (scale(x, size), scale(y, size)));
    debug!(?a, ?b, ?c, size, "triangle vertices");
    draw::triangle_shape(&mut image, a.0, a.1, b.0, b.1, c.0, c.1, INK)
        .context("Failed to draw triangle")?;

    if args.fill {
        let painted = scan_fill(&mut image, INK)?;
        debug!(painted, "column fill");
    }

    super::save_image(&args.output, &image)?;

    if verbose {
        println!("Wrote {}x{} triangle to {}", size, size, args.output.display());
    }

    Ok(())
}

fn scale(v: i64, size: usize) -> i64 {
    v * size as i64 / 100
}

/// Paints each column between its first two crossings of `ink`.
///
/// A column that enters an ink run but never meets a second one is left
/// as is. Returns the number of pixels painted.
pub fn scan_fill<S: PixelStore + ?Sized>(image: &mut S, ink: u8) -> gray_core::Result<usize> {
    let (width, height) = image.dimensions();
    let mut painted = 0;

    for col in 0..width {
        let mut row = 0;
        while row < height && image.get_point(row, col)? != ink {
            row += 1;
        }
        while row < height && image.get_point(row, col)? == ink {
            row += 1;
        }
        let start = row;
        while row < height && image.get_point(row, col)? != ink {
            row += 1;
        }
        if row == height {
            continue;
        }
        for r in start..row {
            image.set_point(r, col, ink)?;
        }
        painted += row - start;
    }

    Ok(painted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn outlined_box() -> PackedImage {
        let mut image = PackedImage::new("box", 6, 6, 255).unwrap();
        image.fill(PAPER);
        for col in 1..5 {
            image.set_point(1, col, INK).unwrap();
            image.set_point(4, col, INK).unwrap();
        }
        image
    }

    #[test]
    fn test_scan_fill_box() {
        let mut image = outlined_box();
        assert_eq!(scan_fill(&mut image, INK).unwrap(), 8);
        for row in 1..5 {
            assert_eq!(image.row(row).unwrap(), vec![255, 0, 0, 0, 0, 255]);
        }
        assert_eq!(image.row(0).unwrap(), vec![255; 6]);
        assert_eq!(image.row(5).unwrap(), vec![255; 6]);
    }

    #[test]
    fn test_scan_fill_open_column_untouched() {
        let mut image = PackedImage::new("open", 3, 5, 255).unwrap();
        image.fill(PAPER);
        image.set_point(1, 0, INK).unwrap();
        assert_eq!(scan_fill(&mut image, INK).unwrap(), 0);
        assert_eq!(image.get_point(3, 0).unwrap(), PAPER);
    }

    fn triangle_args(output: PathBuf, size: usize, fill: bool) -> TriangleArgs {
        TriangleArgs {
            output,
            size,
            fill,
        }
    }

    #[test]
    fn test_triangle_outline_and_fill() {
        let dir = tempfile::tempdir().unwrap();
        let outline = dir.path().join("outline.pgm");
        let filled = dir.path().join("filled.pgm");

        run(triangle_args(outline.clone(), 100, false), false).unwrap();
        run(triangle_args(filled.clone(), 100, true), false).unwrap();

        let outline = gray_io::read(&outline).unwrap();
        let filled = gray_io::read(&filled).unwrap();
        assert_eq!(outline.name(), "Line Plot");

        for (x, y) in VERTICES {
            assert_eq!(outline.get_point(x as usize, y as usize).unwrap(), INK);
        }
        assert_eq!(outline.get_point(40, 55).unwrap(), PAPER);
        assert_eq!(filled.get_point(40, 55).unwrap(), INK);
        assert_eq!(filled.get_point(5, 5).unwrap(), PAPER);
        assert_eq!(filled.get_point(99, 99).unwrap(), PAPER);
    }

    #[test]
    fn test_triangle_scales_with_size() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("small.pgm");
        run(triangle_args(out.clone(), 50, false), false).unwrap();

        let image = gray_io::read(&out).unwrap();
        assert_eq!(image.dimensions(), (50, 50));
        assert_eq!(image.get_point(16, 16).unwrap(), INK);
        assert_eq!(image.get_point(44, 44).unwrap(), INK);
        assert_eq!(image.get_point(0, 30).unwrap(), INK);

        assert!(run(triangle_args(out, 0, false), false).is_err());
    }
}
