//! Grayscale command

use crate::GrayscaleArgs;
use anyhow::Result;
use rimg_ops::color::grayscale;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: GrayscaleArgs, verbose: bool, quality: u8) -> Result<()> {
    trace!(input = %args.input.display(), "grayscale::run");

    let output = args
        .output
        .unwrap_or_else(|| super::default_output(&args.input, "grayscale", None));

    let mut image = super::load_image(&args.input)?;
    info!(w = image.width(), h = image.height(), "Converting to grayscale");
    grayscale(&mut image)?;
    super::save_image(&output, &image, quality)?;

    if verbose {
        println!("{} -> {}", args.input.display(), output.display());
    }

    Ok(())
}
