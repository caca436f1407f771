//! Batch conversion command

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::mpsc;

use crate::batch::{self, BatchConfig};
use crate::cli::FormatArg;
use crate::commands::convert::{ensure_folder, resolve_format};
use crate::utils::create_progress_bar;

pub fn execute(
    input: PathBuf,
    output: PathBuf,
    format: FormatArg,
    quality: Option<u8>,
) -> Result<()> {
    let format = resolve_format(format, quality)?;
    ensure_folder(&input, "input")?;
    ensure_folder(&output, "output")?;

    let config = BatchConfig {
        input_dir: input,
        output_dir: output,
        format,
    };

    let (sender, receiver) = mpsc::channel();
    let handle = batch::spawn(config, sender);

    // The sender is dropped when the worker finishes, ending this loop
    let mut bar = None;
    for snapshot in receiver {
        let bar = bar.get_or_insert_with(|| {
            create_progress_bar(snapshot.total as u64, "Converting")
        });
        bar.set_position(snapshot.completed as u64);
        if let Some(error) = &snapshot.last_error {
            bar.set_message(format!("last error: {error}"));
        }
    }
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    let outcome = handle.join().context("Batch conversion failed")?;

    if outcome.total == 0 {
        println!("No DDS files found in input folder");
    } else if outcome.is_clean() {
        println!("✓ Converted {} file(s)", outcome.converted.len());
    } else {
        println!(
            "Converted {} of {} file(s), {} failed:",
            outcome.converted.len(),
            outcome.total,
            outcome.errors.len()
        );
        for (file, error) in &outcome.errors {
            println!("  ✗ {}: {error}", file.display());
        }
    }

    Ok(())
}
