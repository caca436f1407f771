//! Root CLI structure for dds-convert

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dds-convert")]
#[command(about = "Convert DDS texture files to common image formats", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single DDS file
    Convert {
        /// Path to the DDS file
        input: PathBuf,

        /// Folder to write the converted image into
        #[arg(short, long)]
        output: PathBuf,

        /// Target image format
        #[arg(short, long, default_value = "png")]
        format: FormatArg,

        /// JPEG quality (1-100); only applies when the target format is jpeg
        #[arg(long)]
        quality: Option<u8>,
    },

    /// Convert every DDS file in a folder
    Batch {
        /// Folder containing DDS files (scanned non-recursively)
        input: PathBuf,

        /// Folder to write the converted images into
        #[arg(short, long)]
        output: PathBuf,

        /// Target image format
        #[arg(short, long, default_value = "png")]
        format: FormatArg,

        /// JPEG quality (1-100); only applies when the target format is jpeg
        #[arg(long)]
        quality: Option<u8>,
    },

    /// Display information about a DDS file
    Info {
        /// Path to the DDS file
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Output formats selectable on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Png,
    Jpeg,
    Tiff,
    Bmp,
}
