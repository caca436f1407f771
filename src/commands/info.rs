//! DDS inspection command

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::convert::decode_dds;
use crate::utils::format_bytes;

pub fn execute(file: PathBuf) -> Result<()> {
    let metadata = fs::metadata(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let image = decode_dds(&file)
        .with_context(|| format!("Failed to decode {}", file.display()))?;

    println!("DDS File Information: {}", file.display());
    println!("=====================================");
    println!("Dimensions: {}x{}", image.width(), image.height());
    println!("Color Type: {:?}", image.color());
    println!("Has Alpha: {}", image.color().has_alpha());
    println!("File Size: {}", format_bytes(metadata.len()));

    Ok(())
}
