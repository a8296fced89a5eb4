//! Image info command.
//!
//! Displays dimensions, channel count, format, and file size.

use crate::InfoArgs;
use anyhow::Result;
use rimg_io::Format;
use std::fs;

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let metadata = fs::metadata(path)?;
        let format = Format::detect(path).unwrap_or(Format::Unknown);
        let image = super::load_image(path)?;

        println!("{}", path.display());
        println!("  Resolution: {}x{}", image.width(), image.height());
        println!("  Channels:   {}", image.channels());
        println!("  Pixels:     {}", image.pixel_count());
        println!("  Format:     {:?}", format);
        println!("  File size:  {}", super::format_size(metadata.len()));

        if verbose {
            let lum = rimg_core::luminance_map(&image);
            let (min, max) = lum
                .iter()
                .fold((255u8, 0u8), |(lo, hi), &v| (lo.min(v), hi.max(v)));
            let avg = lum.iter().map(|&v| v as u64).sum::<u64>() as f64 / lum.len().max(1) as f64;
            println!("  Luma min:   {}", min);
            println!("  Luma max:   {}", max);
            println!("  Luma avg:   {:.2}", avg);
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}
