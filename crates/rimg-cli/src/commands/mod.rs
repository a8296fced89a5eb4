//! CLI command implementations

pub mod ascii;
pub mod batch;
pub mod blur;
pub mod edge;
pub mod flip;
pub mod grayscale;
pub mod info;
pub mod invert;

use anyhow::{Context, Result};
use rimg_core::PixelBuffer;
use rimg_io::{Format, JpegWriterOptions};
use std::path::{Path, PathBuf};

/// Load image from path
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    rimg_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path, honoring the JPEG quality setting.
pub fn save_image(path: &Path, image: &PixelBuffer, quality: u8) -> Result<()> {
    let result = match Format::from_extension(path) {
        Format::Jpeg => rimg_io::jpeg::write_with_options(path, image, &JpegWriterOptions { quality }),
        _ => rimg_io::write(path, image),
    };
    result.with_context(|| format!("Failed to save: {}", path.display()))
}

/// Default output path: `<stem>_<op>.<ext>` next to the input.
pub fn default_output(input: &Path, op: &str, ext: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = ext
        .or_else(|| input.extension().and_then(|e| e.to_str()))
        .unwrap_or("png");
    input.with_file_name(format!("{}_{}.{}", stem, op, ext))
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
