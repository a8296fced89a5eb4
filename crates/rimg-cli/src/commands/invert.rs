//! Invert (negative) command

use crate::InvertArgs;
use anyhow::Result;
use rimg_ops::color::invert;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: InvertArgs, verbose: bool, quality: u8) -> Result<()> {
    trace!(input = %args.input.display(), "invert::run");

    let output = args
        .output
        .unwrap_or_else(|| super::default_output(&args.input, "invert", None));

    let mut image = super::load_image(&args.input)?;
    info!(w = image.width(), h = image.height(), "Inverting colors");
    invert(&mut image)?;
    super::save_image(&output, &image, quality)?;

    if verbose {
        println!("{} -> {}", args.input.display(), output.display());
    }

    Ok(())
}
