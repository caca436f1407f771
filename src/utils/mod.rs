//! Shared utilities for the dds-convert CLI

pub mod format;
pub mod progress;

pub use format::*;
pub use progress::*;
