//! Flip/rotate command

use crate::FlipArgs;
use anyhow::{bail, Result};
use rimg_ops::transform::{flip_horizontal, flip_vertical, rotate_180};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: FlipArgs, verbose: bool, quality: u8) -> Result<()> {
    trace!(input = %args.input.display(), mode = %args.mode, "flip::run");

    let output = args
        .output
        .unwrap_or_else(|| super::default_output(&args.input, "flip", None));

    let mut image = super::load_image(&args.input)?;
    info!(mode = %args.mode, w = image.width(), h = image.height(), "Flipping");

    match args.mode.to_lowercase().as_str() {
        "vertical" | "v" => flip_vertical(&mut image)?,
        "horizontal" | "h" => flip_horizontal(&mut image)?,
        "rotate180" | "180" => rotate_180(&mut image)?,
        other => bail!(
            "Unknown flip mode: {} (expected vertical, horizontal, or rotate180)",
            other
        ),
    }

    super::save_image(&output, &image, quality)?;

    if verbose {
        println!("{} -> {}", args.input.display(), output.display());
    }

    Ok(())
}
