//! Blur command
//!
//! Applies box or gaussian blur.

use crate::BlurArgs;
use anyhow::{bail, Result};
use rimg_ops::filter::{box_blur, gaussian_blur};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: BlurArgs, verbose: bool, quality: u8) -> Result<()> {
    trace!(input = %args.input.display(), blur_type = %args.blur_type, radius = args.radius, "blur::run");

    let output = args
        .output
        .unwrap_or_else(|| super::default_output(&args.input, "blur", None));

    let image = super::load_image(&args.input)?;
    info!(
        blur_type = %args.blur_type,
        radius = args.radius,
        w = image.width(),
        h = image.height(),
        "Applying blur"
    );

    if verbose {
        println!(
            "Applying {} blur (radius={}) to {}",
            args.blur_type,
            args.radius,
            args.input.display()
        );
    }

    let blurred = match args.blur_type.to_lowercase().as_str() {
        "box" => box_blur(&image, args.radius)?,
        "gaussian" | "gauss" => gaussian_blur(&image, args.radius)?,
        other => bail!("Unknown blur type: {} (expected box or gaussian)", other),
    };

    super::save_image(&output, &blurred, quality)?;

    if verbose {
        println!("Done: {}", output.display());
    }

    Ok(())
}
