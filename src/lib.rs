//! DDS texture conversion library
//!
//! Converts DDS texture files into common raster formats (PNG, JPEG, TIFF,
//! BMP), one file at a time or in batch over a folder. Decoding the DDS
//! container and encoding the outputs are delegated to the `image` crate;
//! this crate contributes the orchestration and the command-line front end.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod convert;
pub mod error;
pub mod utils;
