//! Edge detection command
//!
//! Sobel gradients with two-threshold hysteresis; output is a
//! black-and-white edge mask in the input's channel layout.

use crate::EdgeArgs;
use anyhow::Result;
use rimg_ops::edge::detect_edges;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: EdgeArgs, verbose: bool, quality: u8) -> Result<()> {
    trace!(input = %args.input.display(), threshold = args.threshold, "edge::run");

    let output = args
        .output
        .unwrap_or_else(|| super::default_output(&args.input, "edge", None));

    let image = super::load_image(&args.input)?;
    info!(
        threshold = args.threshold,
        w = image.width(),
        h = image.height(),
        "Detecting edges"
    );

    let mask = detect_edges(&image, args.threshold)?;
    super::save_image(&output, &mask, quality)?;

    if verbose {
        println!("{} -> {}", args.input.display(), output.display());
    }

    Ok(())
}
