//! Copy command: read an image and write it back out.

use crate::CopyArgs;
use anyhow::{Context, Result};
use gray_core::PixelStore;
use gray_io::pgm::PgmWriter;
use gray_io::FormatWriter;
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

pub fn run(args: CopyArgs, verbose: bool) -> Result<()> {
    let image = if args.strict {
        super::load_image_strict(&args.input)?
    } else {
        super::load_image(&args.input)?
    };
    info!(name = image.name(), input = %args.input.display(), "loaded");

    if args.no_comment {
        let file = File::create(&args.output)
            .with_context(|| format!("Failed to create: {}", args.output.display()))?;
        PgmWriter::new()
            .comment(false)
            .write_to(&image, BufWriter::new(file))
            .with_context(|| format!("Failed to save: {}", args.output.display()))?;
    } else {
        super::save_image(&args.output, &image)?;
    }

    if verbose {
        println!("Copied {} -> {}", args.input.display(), args.output.display());
    }

    Ok(())
}
