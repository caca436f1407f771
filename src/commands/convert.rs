//! Single-file conversion command

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::FormatArg;
use crate::convert::{self, OutputFormat};

/// Quality used when converting to JPEG without an explicit `--quality`
const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Resolve the CLI format/quality pair into a typed output format.
///
/// A quality value supplied for a lossless format is ignored with a
/// warning; only the JPEG variant carries one.
pub fn resolve_format(format: FormatArg, quality: Option<u8>) -> Result<OutputFormat> {
    let format = match format {
        FormatArg::Png => OutputFormat::Png,
        FormatArg::Jpeg => OutputFormat::jpeg(quality.unwrap_or(DEFAULT_JPEG_QUALITY))?,
        FormatArg::Tiff => OutputFormat::Tiff,
        FormatArg::Bmp => OutputFormat::Bmp,
    };
    if quality.is_some() && !format.is_lossy() {
        log::warn!("--quality only applies to jpeg output; ignoring it");
    }
    Ok(format)
}

/// Fail early with a clear message when a folder argument does not exist
pub fn ensure_folder(path: &Path, role: &str) -> Result<()> {
    anyhow::ensure!(
        path.is_dir(),
        "{role} folder {} does not exist or is not a directory",
        path.display()
    );
    Ok(())
}

pub fn execute(
    input: PathBuf,
    output: PathBuf,
    format: FormatArg,
    quality: Option<u8>,
) -> Result<()> {
    let format = resolve_format(format, quality)?;
    ensure_folder(&output, "output")?;

    let written = convert::convert_file(&input, &output, format)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!("✓ Converted {} to {}", input.display(), written.display());
    Ok(())
}
