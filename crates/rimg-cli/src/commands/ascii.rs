//! ASCII art command
//!
//! Renders the image as a glyph grid, written to a text file or stdout.

use crate::AsciiArgs;
use anyhow::{Context, Result};
use rimg_ascii::{render, AsciiArt, AsciiOptions, Ramp};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: AsciiArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), step = args.step, ramp = %args.ramp, "ascii::run");

    let output = args
        .output
        .unwrap_or_else(|| super::default_output(&args.input, "ascii", Some("txt")));

    let image = super::load_image(&args.input)?;

    let options = AsciiOptions {
        step: args.step,
        aspect: args.aspect,
        gamma: args.gamma,
        ramp: Ramp::resolve(&args.ramp)?,
    };

    info!(
        w = image.width(),
        h = image.height(),
        step = options.step,
        ramp = options.ramp.name(),
        "Rendering ascii art"
    );

    let art = render(&image, &options)?;

    let mut text = String::new();
    if !args.no_header {
        write_header(&mut text, &args.input, &image, &options, &art);
    }
    write!(text, "{}", art)?;

    if output.as_os_str() == "-" {
        std::io::stdout().write_all(text.as_bytes())?;
    } else {
        std::fs::write(&output, &text)
            .with_context(|| format!("Failed to save: {}", output.display()))?;
        if verbose {
            println!(
                "{} -> {} ({}x{} glyphs)",
                args.input.display(),
                output.display(),
                art.columns(),
                art.lines()
            );
        }
    }

    Ok(())
}

fn write_header(
    text: &mut String,
    input: &Path,
    image: &rimg_core::PixelBuffer,
    options: &AsciiOptions,
    art: &AsciiArt,
) {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    let _ = writeln!(
        text,
        "# {} ({}x{}, {} channels)",
        name,
        image.width(),
        image.height(),
        image.channels()
    );
    let _ = writeln!(
        text,
        "# grid {}x{} (step {}x{})",
        art.columns(),
        art.lines(),
        options.step,
        options.vertical_step()
    );
    let _ = writeln!(
        text,
        "# ramp {}, gamma {:.2}",
        options.ramp.name(),
        options.effective_gamma()
    );
}
