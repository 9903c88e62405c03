//! Line command: draw one line on a blank canvas.

use crate::LineArgs;
use anyhow::{Context, Result};
use gray_core::PackedImage;
use gray_ops::draw;
use tracing::debug;

pub fn run(args: LineArgs, verbose: bool) -> Result<()> {
    let (x0, y0) = args.from;
    let (x1, y1) = args.to;
    let (width, height) = args.size;
    let failed = || format!("Failed to draw line ({},{}) -> ({},{})", x0, y0, x1, y1);

    let mut image = PackedImage::new(args.name.as_str(), width, height, 255)?;
    draw::check_point(&image, x0, y0).with_context(failed)?;
    draw::check_point(&image, x1, y1).with_context(failed)?;

    if args.dry_run {
        for (x, y) in draw::LineIter::new(x0, y0, x1, y1) {
            println!("{},{}", x, y);
        }
        return Ok(());
    }

    image.fill(args.background);
    debug!(width, height, background = args.background, "canvas");

    draw::line(&mut image, x0, y0, x1, y1, args.color).with_context(failed)?;

    super::save_image(&args.output, &image)?;

    if verbose {
        println!("Wrote {}x{} line plot to {}", width, height, args.output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gray_core::PixelStore;
    use std::path::PathBuf;

    fn line_args(output: PathBuf, from: (i64, i64), to: (i64, i64)) -> LineArgs {
        LineArgs {
            output,
            size: (16, 8),
            from,
            to,
            color: 200,
            background: 10,
            name: "Line Plot".to_string(),
            dry_run: false,
        }
    }

    #[test]
    fn test_line_writes_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("line.pgm");
        run(line_args(out.clone(), (0, 0), (7, 15)), false).unwrap();

        let image = gray_io::read(&out).unwrap();
        assert_eq!(image.name(), "Line Plot");
        assert_eq!(image.dimensions(), (16, 8));
        assert_eq!(image.get_point(0, 0).unwrap(), 200);
        assert_eq!(image.get_point(7, 15).unwrap(), 200);
        assert_eq!(image.get_point(7, 0).unwrap(), 10);
    }

    #[test]
    fn test_line_out_of_bounds_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("line.pgm");
        let err = run(line_args(out.clone(), (0, 0), (8, 0)), false).unwrap_err();
        assert!(err.to_string().contains("Failed to draw line"));
        assert!(!out.exists());
    }

    #[test]
    fn test_line_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("line.pgm");
        let mut args = line_args(out.clone(), (0, 0), (3, 3));
        args.dry_run = true;
        run(args, false).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_line_dry_run_checks_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("line.pgm");

        let mut args = line_args(out.clone(), (i64::MIN, 0), (0, 0));
        args.dry_run = true;
        let err = run(args, false).unwrap_err();
        assert!(err.to_string().contains("Failed to draw line"));

        let mut args = line_args(out.clone(), (0, 0), (0, i64::MAX));
        args.dry_run = true;
        assert!(run(args, false).is_err());
        assert!(!out.exists());
    }
}
