//! Image info command.
//!
//! Displays name, dimensions, maximum value and storage size.

use crate::InfoArgs;
use anyhow::Result;
use gray_core::{PackedImage, PixelStore};
use gray_io::Format;
use std::fs;
use std::path::Path;

/// Runs the info command, printing one block per input.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let file_size = fs::metadata(path)?.len();
        let format = Format::detect(path).unwrap_or(Format::Unknown);

        let image = if args.strict {
            super::load_image_strict(path)?
        } else {
            super::load_image(path)?
        };

        print_text(path, &image, file_size, format, verbose);

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

fn print_text(path: &Path, image: &PackedImage, file_size: u64, format: Format, verbose: bool) {
    println!("{}", path.display());
    println!("  Name:       {}", image.name());
    println!("  Format:     {:?} ({})", format, format.mime_type());
    println!("  Dimensions: {}x{}", image.width(), image.height());
    println!("  Max value:  {}", image.max_value());
    println!("  File size:  {}", super::format_size(file_size));

    if verbose {
        println!("  Pixels:     {}", image.pixel_count());
        println!(
            "  Words:      {} ({})",
            image.word_count(),
            super::format_size((image.word_count() * 8) as u64)
        );
    }
}
