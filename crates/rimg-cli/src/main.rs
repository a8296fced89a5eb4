//! rimg - Raster image processing CLI
//!
//! Pixel transforms, edge detection, ASCII rendering, and a directory
//! batch driver over JPEG/PNG/BMP inputs.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rimg")]
#[command(author, version, about = "Raster image processing CLI")]
#[command(long_about = "
Pixel transforms for JPEG, PNG, and BMP images.

Examples:
  rimg info photo.jpg                     # Show image info
  rimg grayscale photo.jpg                # -> photo_grayscale.jpg
  rimg blur photo.jpg -r 5 -t gaussian -o soft.png
  rimg edge photo.jpg -t 80               # Sobel edges with hysteresis
  rimg flip photo.jpg --mode horizontal
  rimg ascii photo.jpg -s 4 --ramp blocks -o art.txt
  rimg batch -i shots/ -o out/ grayscale blur edge
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// JPEG output quality (1-100)
    #[arg(short = 'q', long, global = true, default_value = "90")]
    quality: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Convert to grayscale
    #[command(visible_alias = "gray")]
    Grayscale(GrayscaleArgs),

    /// Invert color channels (negative)
    #[command(visible_alias = "neg")]
    Invert(InvertArgs),

    /// Apply blur filter
    Blur(BlurArgs),

    /// Flip or rotate the image
    Flip(FlipArgs),

    /// Sobel edge detection
    Edge(EdgeArgs),

    /// Render the image as ASCII art
    Ascii(AsciiArgs),

    /// Batch process a directory of images
    Batch(BatchArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct GrayscaleArgs {
    /// Input image
    input: PathBuf,

    /// Output image (default: <stem>_grayscale.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct InvertArgs {
    /// Input image
    input: PathBuf,

    /// Output image (default: <stem>_invert.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct BlurArgs {
    /// Input image
    input: PathBuf,

    /// Output image (default: <stem>_blur.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Blur radius (kernel spans 2r+1 pixels)
    #[arg(short, long, default_value = "3")]
    radius: u32,

    /// Blur type: box, gaussian
    #[arg(short = 't', long = "type", default_value = "gaussian")]
    blur_type: String,
}

#[derive(Args)]
struct FlipArgs {
    /// Input image
    input: PathBuf,

    /// Output image (default: <stem>_flip.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Flip mode: vertical, horizontal, rotate180
    #[arg(short, long, default_value = "vertical")]
    mode: String,
}

#[derive(Args)]
struct EdgeArgs {
    /// Input image
    input: PathBuf,

    /// Output image (default: <stem>_edge.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Strong-edge magnitude threshold
    #[arg(short, long, default_value = "100")]
    threshold: u8,
}

#[derive(Args)]
struct AsciiArgs {
    /// Input image
    input: PathBuf,

    /// Output text file (default: <stem>_ascii.txt, "-" for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Horizontal sampling step in pixels
    #[arg(short, long, default_value = "5")]
    step: u32,

    /// Ramp name (short, extended, blocks, dense, classic) or literal glyphs
    #[arg(long, default_value = "short")]
    ramp: String,

    /// Gamma shaping exponent (clamped to 0.1-3.0)
    #[arg(short, long, default_value = "1.0")]
    gamma: f32,

    /// Vertical step multiplier for glyph cell shape
    #[arg(long, default_value = "2.0")]
    aspect: f32,

    /// Omit the metadata header
    #[arg(long)]
    no_header: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Input directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory (per-operation subdirectories are created inside)
    #[arg(short, long)]
    output: PathBuf,

    /// Operations to apply (default: all)
    #[arg(value_name = "OP")]
    ops: Vec<String>,

    /// Blur radius
    #[arg(short, long, default_value = "3")]
    radius: u32,

    /// Edge detection threshold
    #[arg(short, long, default_value = "100")]
    threshold: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Grayscale(args) => commands::grayscale::run(args, cli.verbose, cli.quality),
        Commands::Invert(args) => commands::invert::run(args, cli.verbose, cli.quality),
        Commands::Blur(args) => commands::blur::run(args, cli.verbose, cli.quality),
        Commands::Flip(args) => commands::flip::run(args, cli.verbose, cli.quality),
        Commands::Edge(args) => commands::edge::run(args, cli.verbose, cli.quality),
        Commands::Ascii(args) => commands::ascii::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose, cli.quality),
    }
}
