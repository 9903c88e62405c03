//! gray - Grayscale PGM tool
//!
//! Inspects, copies and draws into plain-text PGM (P2) images.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{parse_point, parse_size};

#[derive(Parser)]
#[command(name = "gray")]
#[command(author, version, about = "Grayscale PGM (P2) tool")]
#[command(long_about = "
Reads, writes and draws into plain-text PGM (P2) grayscale images.

Examples:
  gray info image.pgm                       # Show image info
  gray copy src.pgm dst.pgm                 # Read and re-write
  gray line out.pgm --size 64x64 --from 0,0 --to 63,40
  gray triangle lineplot.pgm --fill         # Filled demo triangle
  RUST_LOG=gray_io=trace gray info image.pgm
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Read an image and write it back out
    #[command(visible_alias = "cp")]
    Copy(CopyArgs),

    /// Draw a single line on a blank canvas
    Line(LineArgs),

    /// Draw the demo triangle, optionally filled
    #[command(visible_alias = "tri")]
    Triangle(TriangleArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Reject samples above the declared maximum value
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct CopyArgs {
    /// Source image
    input: PathBuf,

    /// Destination image
    output: PathBuf,

    /// Reject samples above the declared maximum value
    #[arg(long)]
    strict: bool,

    /// Omit the name comment line
    #[arg(long)]
    no_comment: bool,
}

#[derive(Args)]
struct LineArgs {
    /// Output image
    output: PathBuf,

    /// Canvas size as WIDTHxHEIGHT
    #[arg(short, long, value_parser = parse_size, default_value = "100x100")]
    size: (usize, usize),

    /// Start point as ROW,COL
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    from: (i64, i64),

    /// End point as ROW,COL
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    to: (i64, i64),

    /// Line gray value
    #[arg(short, long, default_value = "255")]
    color: u8,

    /// Canvas gray value
    #[arg(short, long, default_value = "0")]
    background: u8,

    /// Image name written to the comment line
    #[arg(short, long, default_value = "Line Plot")]
    name: String,

    /// Print the line's pixels instead of writing the image
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args)]
struct TriangleArgs {
    /// Output image
    output: PathBuf,

    /// Canvas edge length; the triangle scales with it
    #[arg(short, long, default_value = "100")]
    size: usize,

    /// Paint each column between its first two outline crossings
    #[arg(short, long)]
    fill: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose > 0),
        Commands::Copy(args) => commands::copy::run(args, cli.verbose > 0),
        Commands::Line(args) => commands::line::run(args, cli.verbose > 0),
        Commands::Triangle(args) => commands::triangle::run(args, cli.verbose > 0),
    }
}
