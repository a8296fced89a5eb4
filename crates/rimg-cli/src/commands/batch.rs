//! Batch processing command
//!
//! Applies a set of operations to every supported image in a directory.
//! Each operation writes into its own subdirectory of the output root;
//! a failing file is logged and skipped, never aborting the walk.

use crate::BatchArgs;
use anyhow::{bail, Result};
use rayon::prelude::*;
use rimg_ascii::{render, AsciiOptions};
use rimg_core::PixelBuffer;
use rimg_ops::{color, edge, filter, transform};
use std::path::{Path, PathBuf};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

const ALL_OPS: [&str; 6] = ["grayscale", "invert", "blur", "flip", "edge", "ascii"];

pub fn run(args: BatchArgs, verbose: bool, quality: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "batch::run");

    let ops: Vec<String> = if args.ops.is_empty() {
        ALL_OPS.iter().map(|s| s.to_string()).collect()
    } else {
        args.ops.clone()
    };

    for op in &ops {
        if !ALL_OPS.contains(&op.as_str()) {
            bail!(
                "Unknown operation: {} (expected one of {})",
                op,
                ALL_OPS.join(", ")
            );
        }
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(&args.input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && rimg_io::Format::is_supported_path(path))
        .collect();
    files.sort();

    if files.is_empty() {
        bail!("No supported images in {}", args.input.display());
    }

    info!(files = files.len(), ops = ?ops, "Starting batch processing");
    if verbose {
        println!(
            "Found {} images in {}, applying: {}",
            files.len(),
            args.input.display(),
            ops.join(", ")
        );
    }

    // Subdirectory creation is idempotent.
    for op in &ops {
        std::fs::create_dir_all(args.output.join(op))?;
    }

    let results: Vec<Result<()>> = files
        .par_iter()
        .map(|input| process_file(input, &args.output, &ops, &args, quality, verbose))
        .collect();

    let mut success = 0;
    let mut failed = 0;
    for result in results {
        match result {
            Ok(()) => success += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    info!(success, failed, "Batch processing complete");
    println!("Processed: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} files failed", failed);
    }

    Ok(())
}

fn process_file(
    input: &Path,
    output_root: &Path,
    ops: &[String],
    args: &BatchArgs,
    quality: u8,
    verbose: bool,
) -> Result<()> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    if verbose {
        println!("Processing {}", input.display());
    }

    let image = super::load_image(input)?;

    for op in ops {
        let result = apply_op(&image, op, args)?;
        match result {
            OpOutput::Image(out) => {
                let path = output_root.join(op).join(format!("{}_{}.jpg", stem, op));
                super::save_image(&path, &out, quality)?;
            }
            OpOutput::Text(text) => {
                let path = output_root.join(op).join(format!("{}_{}.txt", stem, op));
                std::fs::write(&path, text)?;
            }
        }
    }

    Ok(())
}

enum OpOutput {
    Image(PixelBuffer),
    Text(String),
}

fn apply_op(image: &PixelBuffer, op: &str, args: &BatchArgs) -> Result<OpOutput> {
    let output = match op {
        "grayscale" => {
            let mut out = image.clone();
            color::grayscale(&mut out)?;
            OpOutput::Image(out)
        }
        "invert" => {
            let mut out = image.clone();
            color::invert(&mut out)?;
            OpOutput::Image(out)
        }
        "blur" => OpOutput::Image(filter::gaussian_blur(image, args.radius)?),
        "flip" => {
            let mut out = image.clone();
            transform::flip_vertical(&mut out)?;
            OpOutput::Image(out)
        }
        "edge" => OpOutput::Image(edge::detect_edges(image, args.threshold)?),
        "ascii" => OpOutput::Text(render(image, &AsciiOptions::default())?.to_string()),
        other => bail!("Unknown operation: {}", other),
    };

    Ok(output)
}
